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

//! Model operations.

use chrono::Utc;
use diesel::prelude::*;
use tracing::debug;

use super::models::{ModelRow, NewModelRow};
use super::{filter_by, first_match, Criteria, ModelCriteria, ModelDbService};
use crate::database::schema::models;
use crate::error::ModelDbError;
use crate::models::{Model, NewModel};

impl ModelDbService {
    /// Records a model and returns its generated id.
    ///
    /// `created` is set to the current time.
    ///
    /// # Arguments
    ///
    /// * `model` - Author, laboratory, facility, beampath and description of the model
    pub async fn store_model(&self, model: NewModel) -> Result<i32, ModelDbError> {
        let row = NewModelRow::new(model, Utc::now());

        let model_id: i32 = crate::with_connection!(self.database, |conn| {
            diesel::insert_into(models::table)
                .values(&row)
                .returning(models::model_id)
                .get_result::<i32>(conn)
        })?;

        debug!(model_id, "Stored model");
        Ok(model_id)
    }

    /// Returns the model matching `criteria`.
    ///
    /// # Arguments
    ///
    /// * `criteria` - Column equality filters; empty criteria match every model
    ///
    /// # Returns
    ///
    /// The lowest-id match, or [`ModelDbError::ModelNotFound`] when nothing matches.
    pub async fn get_model(&self, criteria: ModelCriteria) -> Result<Model, ModelDbError> {
        let description = criteria.describe();

        let rows: Vec<ModelRow> = crate::with_connection!(self.database, |conn| {
            let created = criteria.created.map(|dt| dt.naive_utc());
            let mut query = models::table.select(ModelRow::as_select()).into_boxed();
            filter_by!(query, criteria, {
                model_id => models::model_id,
                author => models::author,
                laboratory => models::laboratory,
                facility => models::facility,
                beampath => models::beampath,
                description => models::description,
            });
            if let Some(created) = created {
                query = query.filter(models::created.eq(created));
            }
            query.order(models::model_id.asc()).load::<ModelRow>(conn)
        })?;

        debug!(criteria = %description, matches = rows.len(), "Queried models");
        first_match("model", rows, |row| row.model_id.to_string())
            .map(Model::from)
            .ok_or(ModelDbError::ModelNotFound(description))
    }
}
