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

//! File existence checks over named namespaces.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::SchedulingError;
use crate::config::FileServiceConfig;

/// Answers whether a directory exists within a namespace.
#[async_trait]
pub trait FileService: Send + Sync {
    async fn dir_exists(&self, namespace: &str, path: &str) -> Result<bool, SchedulingError>;
}

/// [`FileService`] over local directories, one root per namespace.
///
/// Paths are resolved below the namespace root. Absolute paths are re-rooted
/// under it and `..` components are rejected, so a lookup never leaves the
/// root.
#[derive(Debug, Clone, Default)]
pub struct LocalFileService {
    mounts: BTreeMap<String, PathBuf>,
}

impl LocalFileService {
    pub fn new(mounts: BTreeMap<String, PathBuf>) -> Self {
        Self { mounts }
    }

    /// Builds the service from the configured namespace mounts.
    pub fn from_config(config: &FileServiceConfig) -> Self {
        Self::new(config.mounts.clone())
    }

    pub fn with_mount(mut self, namespace: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        self.mounts.insert(namespace.into(), root.into());
        self
    }

    /// Maps `path` in `namespace` to a path on the local filesystem.
    pub fn resolve(&self, namespace: &str, path: &str) -> Result<PathBuf, SchedulingError> {
        let root = self
            .mounts
            .get(namespace)
            .ok_or_else(|| SchedulingError::UnknownNamespace(namespace.to_string()))?;

        let mut resolved = root.clone();
        for component in Path::new(path).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
                Component::ParentDir => return Err(SchedulingError::InvalidPath(path.to_string())),
            }
        }
        Ok(resolved)
    }
}

#[async_trait]
impl FileService for LocalFileService {
    async fn dir_exists(&self, namespace: &str, path: &str) -> Result<bool, SchedulingError> {
        let resolved = self.resolve(namespace, path)?;

        let exists = match tokio::fs::metadata(&resolved).await {
            Ok(metadata) => metadata.is_dir(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(source) => {
                return Err(SchedulingError::Io {
                    path: resolved,
                    source,
                })
            }
        };

        debug!(namespace, path, exists, "Checked directory");
        Ok(exists)
    }
}
