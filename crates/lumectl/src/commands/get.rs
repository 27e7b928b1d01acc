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

//! Implementation of the `get` command.
//!
//! Filters are given as repeated `--filter column=value` flags and validated
//! against the entity's columns before the database is contacted.

use anyhow::{Context, Result};
use clap::ValueEnum;
use lume::dal::criteria::parse_pair;
use lume::{
    Criteria, DeploymentCriteria, FlowCriteria, FlowOfFlowsCriteria, ModelCriteria,
    ModelDbConfig, ProjectCriteria, ValidationError,
};

use super::{connect, print_json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Model,
    Deployment,
    LatestDeployment,
    Project,
    Flow,
    FlowOfFlows,
}

fn parse_filters(filters: &[String]) -> Result<Vec<(String, String)>, ValidationError> {
    filters.iter().map(|raw| parse_pair(raw)).collect()
}

fn build_criteria<C: Criteria>(pairs: &[(String, String)]) -> Result<C> {
    C::try_from_pairs(pairs.iter().map(|(k, v)| (k, v))).with_context(|| {
        format!(
            "Invalid filter for {}; columns are: {}",
            C::ENTITY,
            C::COLUMNS.join(", ")
        )
    })
}

pub async fn run(config: &ModelDbConfig, entity: Entity, filters: &[String]) -> Result<()> {
    let pairs = parse_filters(filters)?;
    // Validate before opening a connection.
    match entity {
        Entity::Model => {
            let criteria = build_criteria::<ModelCriteria>(&pairs)?;
            let model = connect(config)?.get_model(criteria).await?;
            print_json(&model)
        }
        Entity::Deployment => {
            let criteria = build_criteria::<DeploymentCriteria>(&pairs)?;
            let deployment = connect(config)?.get_deployment(criteria).await?;
            print_json(&deployment)
        }
        Entity::LatestDeployment => {
            let criteria = build_criteria::<DeploymentCriteria>(&pairs)?;
            let deployment = connect(config)?.get_latest_deployment(criteria).await?;
            print_json(&deployment)
        }
        Entity::Project => {
            let criteria = build_criteria::<ProjectCriteria>(&pairs)?;
            let project = connect(config)?.get_project(criteria).await?;
            print_json(&project)
        }
        Entity::Flow => {
            let criteria = build_criteria::<FlowCriteria>(&pairs)?;
            let flow = connect(config)?.get_flow(criteria).await?;
            print_json(&flow)
        }
        Entity::FlowOfFlows => {
            let criteria = build_criteria::<FlowOfFlowsCriteria>(&pairs)?;
            let flows = connect(config)?.get_flow_of_flows(criteria).await?;
            print_json(&flows)
        }
    }
}
