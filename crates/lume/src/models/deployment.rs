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

//! Deployment records: one containerized, versioned build of a model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub deployment_id: i32,
    pub version: String,
    pub deploy_date: DateTime<Utc>,
    pub asset_dir: Option<String>,
    pub source: String,
    pub sha256: String,
    pub image: String,
    /// Several deployments of the same model may be live at once.
    pub is_live: bool,
    pub model_id: i32,
}

/// Payload for [`crate::ModelDbService::store_deployment`].
///
/// `is_live` defaults to `false`, `asset_dir` to `None` and `deploy_date` to
/// the time of the store call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeployment {
    pub model_id: i32,
    pub version: String,
    pub source: String,
    pub sha256: String,
    pub image: String,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub asset_dir: Option<String>,
    #[serde(default)]
    pub deploy_date: Option<DateTime<Utc>>,
}

impl NewDeployment {
    pub fn new(
        model_id: i32,
        version: impl Into<String>,
        source: impl Into<String>,
        sha256: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            model_id,
            version: version.into(),
            source: source.into(),
            sha256: sha256.into(),
            image: image.into(),
            is_live: false,
            asset_dir: None,
            deploy_date: None,
        }
    }

    pub fn live(mut self, is_live: bool) -> Self {
        self.is_live = is_live;
        self
    }

    pub fn asset_dir(mut self, asset_dir: impl Into<String>) -> Self {
        self.asset_dir = Some(asset_dir.into());
        self
    }

    /// Overrides the deploy date, e.g. when importing historical deployments.
    pub fn deployed_at(mut self, deploy_date: DateTime<Utc>) -> Self {
        self.deploy_date = Some(deploy_date);
        self
    }
}
