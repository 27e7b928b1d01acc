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

//! Deployment operations.

use chrono::Utc;
use diesel::prelude::*;
use tracing::debug;

use super::models::{DeploymentRow, NewDeploymentRow};
use super::{filter_by, first_match, Criteria, DeploymentCriteria, ModelDbService};
use crate::database::schema::deployments;
use crate::error::ModelDbError;
use crate::models::{Deployment, NewDeployment};

macro_rules! deployment_query {
    ($criteria:ident) => {{
        let deploy_date = $criteria.deploy_date.map(|dt| dt.naive_utc());
        let mut query = deployments::table
            .select(DeploymentRow::as_select())
            .into_boxed();
        filter_by!(query, $criteria, {
            deployment_id => deployments::deployment_id,
            version => deployments::version,
            asset_dir => deployments::asset_dir,
            source => deployments::source,
            sha256 => deployments::sha256,
            image => deployments::image,
            is_live => deployments::is_live,
            model_id => deployments::model_id,
        });
        if let Some(deploy_date) = deploy_date {
            query = query.filter(deployments::deploy_date.eq(deploy_date));
        }
        query
    }};
}

impl ModelDbService {
    /// Records a deployment of an existing model and returns its generated id.
    ///
    /// Fails with a foreign key violation when `model_id` does not exist.
    pub async fn store_deployment(&self, deployment: NewDeployment) -> Result<i32, ModelDbError> {
        let row = NewDeploymentRow::new(deployment, Utc::now());
        let model_id = row.model_id;

        let deployment_id: i32 = crate::with_connection!(self.database, |conn| {
            diesel::insert_into(deployments::table)
                .values(&row)
                .returning(deployments::deployment_id)
                .get_result::<i32>(conn)
        })?;

        debug!(deployment_id, model_id, "Stored deployment");
        Ok(deployment_id)
    }

    /// Returns the deployment matching `criteria`.
    pub async fn get_deployment(
        &self,
        criteria: DeploymentCriteria,
    ) -> Result<Deployment, ModelDbError> {
        let description = criteria.describe();

        let rows: Vec<DeploymentRow> = crate::with_connection!(self.database, |conn| {
            deployment_query!(criteria)
                .order(deployments::deployment_id.asc())
                .load::<DeploymentRow>(conn)
        })?;

        debug!(criteria = %description, matches = rows.len(), "Queried deployments");
        first_match("deployment", rows, |row| row.deployment_id.to_string())
            .map(Deployment::from)
            .ok_or(ModelDbError::DeploymentNotFound(description))
    }

    /// Returns the most recently deployed match for `criteria`.
    ///
    /// Ties on `deploy_date` are broken by the higher deployment id.
    pub async fn get_latest_deployment(
        &self,
        criteria: DeploymentCriteria,
    ) -> Result<Deployment, ModelDbError> {
        let description = criteria.describe();

        let row: Option<DeploymentRow> = crate::with_connection!(self.database, |conn| {
            deployment_query!(criteria)
                .order((
                    deployments::deploy_date.desc(),
                    deployments::deployment_id.desc(),
                ))
                .first::<DeploymentRow>(conn)
                .optional()
        })?;

        debug!(criteria = %description, found = row.is_some(), "Queried latest deployment");
        row.map(Deployment::from)
            .ok_or(ModelDbError::DeploymentNotFound(description))
    }
}
