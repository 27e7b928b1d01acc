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

//! Pinned dependencies of a deployment.
//!
//! Each dependency carries a type label (for example `conda` or `pip`) that
//! must already be registered in `dependency_types`. In serialized form the
//! label is keyed `type`, matching the dependency manifests produced at
//! packaging time.

use serde::{Deserialize, Serialize};

/// A registered dependency kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyType {
    pub id: i32,
    #[serde(rename = "type")]
    pub label: String,
}

/// A dependency row together with its resolved type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentDependency {
    pub id: i32,
    pub name: String,
    pub source: String,
    pub local_source: Option<String>,
    pub version: String,
    pub deployment_id: i32,
    pub dependency_type: DependencyType,
}

/// One entry of a dependency manifest, as accepted by
/// [`crate::ModelDbService::store_dependencies`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDependency {
    pub name: String,
    #[serde(rename = "type")]
    pub dependency_type: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_source: Option<String>,
    pub version: String,
}

impl NewDependency {
    pub fn new(
        name: impl Into<String>,
        dependency_type: impl Into<String>,
        source: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dependency_type: dependency_type.into(),
            source: source.into(),
            local_source: None,
            version: version.into(),
        }
    }

    pub fn local_source(mut self, local_source: impl Into<String>) -> Self {
        self.local_source = Some(local_source.into());
        self
    }
}
