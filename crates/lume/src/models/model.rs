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

//! Simulation model records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered simulation model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub model_id: i32,
    /// Set by the store when the model is recorded.
    pub created: DateTime<Utc>,
    pub author: String,
    pub laboratory: String,
    pub facility: String,
    pub beampath: String,
    pub description: String,
}

/// Payload for [`crate::ModelDbService::store_model`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewModel {
    pub author: String,
    pub laboratory: String,
    pub facility: String,
    pub beampath: String,
    pub description: String,
}

impl NewModel {
    pub fn new(
        author: impl Into<String>,
        laboratory: impl Into<String>,
        facility: impl Into<String>,
        beampath: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            laboratory: laboratory.into(),
            facility: facility.into(),
            beampath: beampath.into(),
            description: description.into(),
        }
    }
}
