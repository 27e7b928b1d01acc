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

//! Diesel row types for the model database.
//!
//! Rows carry the storage representation (naive UTC timestamps, foreign keys
//! as plain ids) and convert into the domain types in [`crate::models`].
//! Every row type is backend-neutral: the same struct is loaded from and
//! inserted into PostgreSQL and SQLite.

use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::database::schema::{
    dependency_types, deployment_dependencies, deployments, flow_of_flows, flows, models,
    projects,
};
use crate::models::{
    DependencyType, Deployment, DeploymentDependency, Flow, Model, NewDependency,
    NewDeployment, NewFlow, NewModel, NewProject, Project,
};

fn to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc)
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = models)]
pub struct ModelRow {
    pub model_id: i32,
    pub created: NaiveDateTime,
    pub author: String,
    pub laboratory: String,
    pub facility: String,
    pub beampath: String,
    pub description: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = models)]
pub struct NewModelRow {
    pub created: NaiveDateTime,
    pub author: String,
    pub laboratory: String,
    pub facility: String,
    pub beampath: String,
    pub description: String,
}

impl From<ModelRow> for Model {
    fn from(row: ModelRow) -> Self {
        Model {
            model_id: row.model_id,
            created: to_utc(row.created),
            author: row.author,
            laboratory: row.laboratory,
            facility: row.facility,
            beampath: row.beampath,
            description: row.description,
        }
    }
}

impl NewModelRow {
    pub fn new(model: NewModel, created: DateTime<Utc>) -> Self {
        Self {
            created: created.naive_utc(),
            author: model.author,
            laboratory: model.laboratory,
            facility: model.facility,
            beampath: model.beampath,
            description: model.description,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = deployments)]
pub struct DeploymentRow {
    pub deployment_id: i32,
    pub version: String,
    pub deploy_date: NaiveDateTime,
    pub asset_dir: Option<String>,
    pub source: String,
    pub sha256: String,
    pub image: String,
    pub is_live: bool,
    pub model_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = deployments)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewDeploymentRow {
    pub version: String,
    pub deploy_date: NaiveDateTime,
    pub asset_dir: Option<String>,
    pub source: String,
    pub sha256: String,
    pub image: String,
    pub is_live: bool,
    pub model_id: i32,
}

impl From<DeploymentRow> for Deployment {
    fn from(row: DeploymentRow) -> Self {
        Deployment {
            deployment_id: row.deployment_id,
            version: row.version,
            deploy_date: to_utc(row.deploy_date),
            asset_dir: row.asset_dir,
            source: row.source,
            sha256: row.sha256,
            image: row.image,
            is_live: row.is_live,
            model_id: row.model_id,
        }
    }
}

impl NewDeploymentRow {
    /// `now` is used when the payload carries no explicit deploy date.
    pub fn new(deployment: NewDeployment, now: DateTime<Utc>) -> Self {
        Self {
            version: deployment.version,
            deploy_date: deployment.deploy_date.unwrap_or(now).naive_utc(),
            asset_dir: deployment.asset_dir,
            source: deployment.source,
            sha256: deployment.sha256,
            image: deployment.image,
            is_live: deployment.is_live,
            model_id: deployment.model_id,
        }
    }
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = projects)]
pub struct ProjectRow {
    pub project_name: String,
    pub description: String,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            project_name: row.project_name,
            description: row.description,
        }
    }
}

impl From<NewProject> for ProjectRow {
    fn from(project: NewProject) -> Self {
        ProjectRow {
            project_name: project.project_name,
            description: project.description,
        }
    }
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = flows)]
pub struct FlowRow {
    pub flow_id: String,
    pub flow_name: String,
    pub project_name: String,
    pub deployment_id: i32,
}

impl From<FlowRow> for Flow {
    fn from(row: FlowRow) -> Self {
        Flow {
            flow_id: row.flow_id,
            flow_name: row.flow_name,
            project_name: row.project_name,
            deployment_id: row.deployment_id,
        }
    }
}

impl From<NewFlow> for FlowRow {
    fn from(flow: NewFlow) -> Self {
        FlowRow {
            flow_id: flow.flow_id,
            flow_name: flow.flow_name,
            project_name: flow.project_name,
            deployment_id: flow.deployment_id,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = flow_of_flows)]
pub struct NewFlowOfFlowsRow {
    pub parent_flow_id: String,
    pub flow_id: String,
    pub position: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = dependency_types)]
pub struct DependencyTypeRow {
    pub id: i32,
    #[diesel(column_name = type_)]
    pub label: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = dependency_types)]
pub struct NewDependencyTypeRow {
    #[diesel(column_name = type_)]
    pub label: String,
}

impl From<DependencyTypeRow> for DependencyType {
    fn from(row: DependencyTypeRow) -> Self {
        DependencyType {
            id: row.id,
            label: row.label,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = deployment_dependencies)]
pub struct DependencyRow {
    pub id: i32,
    pub name: String,
    pub source: String,
    pub local_source: Option<String>,
    pub version: String,
    pub deployment_id: i32,
    pub dependency_type_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = deployment_dependencies)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewDependencyRow {
    pub name: String,
    pub source: String,
    pub local_source: Option<String>,
    pub version: String,
    pub deployment_id: i32,
    pub dependency_type_id: i32,
}

impl NewDependencyRow {
    pub fn new(dependency: NewDependency, deployment_id: i32, dependency_type_id: i32) -> Self {
        Self {
            name: dependency.name,
            source: dependency.source,
            local_source: dependency.local_source,
            version: dependency.version,
            deployment_id,
            dependency_type_id,
        }
    }
}

impl From<(DependencyRow, DependencyTypeRow)> for DeploymentDependency {
    fn from((row, dependency_type): (DependencyRow, DependencyTypeRow)) -> Self {
        DeploymentDependency {
            id: row.id,
            name: row.name,
            source: row.source,
            local_source: row.local_source,
            version: row.version,
            deployment_id: row.deployment_id,
            dependency_type: dependency_type.into(),
        }
    }
}
