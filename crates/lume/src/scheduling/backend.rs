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

//! Local run backend.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FileService, SchedulingError};
use crate::config::LOCAL_NAMESPACE;

/// Configuration of a run on the engine's local agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalRunConfig {
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default)]
    pub working_dir: Option<String>,
}

impl LocalRunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn working_dir(mut self, working_dir: impl Into<String>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }
}

/// Run descriptor for the engine's local agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalRun {
    pub env: BTreeMap<String, String>,
    pub working_dir: Option<String>,
}

/// Builds engine run descriptors from run configurations.
#[async_trait]
pub trait RunBackend: Send + Sync {
    type Config: Send + Sync;
    type Run;

    async fn get_run(&self, config: &Self::Config) -> Result<Self::Run, SchedulingError>;
}

/// Backend producing [`LocalRun`] descriptors.
///
/// The working directory, when set, must exist in the file service's
/// `local` namespace.
#[derive(Clone)]
pub struct LocalBackend {
    file_service: Arc<dyn FileService>,
}

impl LocalBackend {
    /// Creates a local backend that checks working directories through `file_service`.
    pub fn new(file_service: Arc<dyn FileService>) -> Self {
        Self { file_service }
    }
}

impl std::fmt::Debug for LocalBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalBackend").finish_non_exhaustive()
    }
}

#[async_trait]
impl RunBackend for LocalBackend {
    type Config = LocalRunConfig;
    type Run = LocalRun;

    async fn get_run(&self, config: &LocalRunConfig) -> Result<LocalRun, SchedulingError> {
        if let Some(working_dir) = &config.working_dir {
            if !self
                .file_service
                .dir_exists(LOCAL_NAMESPACE, working_dir)
                .await?
            {
                return Err(SchedulingError::MissingResource {
                    namespace: LOCAL_NAMESPACE.to_string(),
                    path: working_dir.clone(),
                });
            }
        }

        debug!(working_dir = ?config.working_dir, env_vars = config.env.len(), "Built local run");
        Ok(LocalRun {
            env: config.env.clone(),
            working_dir: config.working_dir.clone(),
        })
    }
}
