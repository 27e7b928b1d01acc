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

//! Flow records.
//!
//! Flow ids are assigned by the orchestration engine when the flow is
//! registered there, so they are supplied by the caller rather than generated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    pub flow_id: String,
    pub flow_name: String,
    pub project_name: String,
    pub deployment_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFlow {
    pub flow_id: String,
    pub deployment_id: i32,
    pub flow_name: String,
    pub project_name: String,
}

impl NewFlow {
    pub fn new(
        flow_id: impl Into<String>,
        deployment_id: i32,
        flow_name: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            flow_id: flow_id.into(),
            deployment_id,
            flow_name: flow_name.into(),
            project_name: project_name.into(),
        }
    }
}
