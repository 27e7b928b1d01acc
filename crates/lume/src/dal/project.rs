/*
 *  Copyright 2025 Colliery Software
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! Project operations.

use diesel::prelude::*;
use tracing::debug;

use super::models::ProjectRow;
use super::{filter_by, first_match, Criteria, ModelDbService, ProjectCriteria};
use crate::database::schema::projects;
use crate::error::ModelDbError;
use crate::models::{NewProject, Project};

impl ModelDbService {
    /// Records a project and returns its name.
    pub async fn store_project(&self, project: NewProject) -> Result<String, ModelDbError> {
        let row = ProjectRow::from(project);

        let project_name: String = crate::with_connection!(self.database, |conn| {
            diesel::insert_into(projects::table)
                .values(&row)
                .returning(projects::project_name)
                .get_result::<String>(conn)
        })?;

        debug!(project_name = %project_name, "Stored project");
        Ok(project_name)
    }

    /// Returns the project matching `criteria`.
    ///
    /// Several matches resolve to the first project name in ascending order.
    ///
    /// # Arguments
    ///
    /// * `criteria` - Column equality filters on `project_name` and `description`
    pub async fn get_project(&self, criteria: ProjectCriteria) -> Result<Project, ModelDbError> {
        let description = criteria.describe();

        let rows: Vec<ProjectRow> = crate::with_connection!(self.database, |conn| {
            let mut query = projects::table.select(ProjectRow::as_select()).into_boxed();
            filter_by!(query, criteria, {
                project_name => projects::project_name,
                description => projects::description,
            });
            query
                .order(projects::project_name.asc())
                .load::<ProjectRow>(conn)
        })?;

        debug!(criteria = %description, matches = rows.len(), "Queried projects");
        first_match("project", rows, |row| row.project_name.clone())
            .map(Project::from)
            .ok_or(ModelDbError::ProjectNotFound(description))
    }
}
