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

//! Implementation of the `dependencies` commands.

use std::path::Path;

use anyhow::{Context, Result};
use lume::models::NewDependency;
use lume::ModelDbConfig;
use serde::Deserialize;
use tracing::info;

use super::{connect, print_json};

#[derive(Debug, Deserialize)]
struct TomlManifest {
    #[serde(default)]
    dependencies: Vec<NewDependency>,
}

/// Parses a manifest: a JSON array when the file ends in `.json`, otherwise
/// TOML with a `[[dependencies]]` table array.
fn parse_manifest(path: &Path, content: &str) -> Result<Vec<NewDependency>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(content).context("Invalid JSON dependency manifest"),
        _ => {
            let manifest: TomlManifest =
                toml::from_str(content).context("Invalid TOML dependency manifest")?;
            Ok(manifest.dependencies)
        }
    }
}

pub async fn list(config: &ModelDbConfig, deployment_id: i32) -> Result<()> {
    let dependencies = connect(config)?
        .get_dependencies(deployment_id)
        .await
        .with_context(|| format!("Failed to list dependencies of deployment {}", deployment_id))?;
    print_json(&dependencies)
}

pub async fn store(config: &ModelDbConfig, deployment_id: i32, manifest: &Path) -> Result<()> {
    let content = std::fs::read_to_string(manifest)
        .with_context(|| format!("Failed to read manifest {}", manifest.display()))?;
    let dependencies = parse_manifest(manifest, &content)?;

    let ids = connect(config)?
        .store_dependencies(&dependencies, deployment_id)
        .await
        .context("Failed to store dependencies")?;

    info!(
        "Stored {} dependencies for deployment {}",
        ids.len(),
        deployment_id
    );
    print_json(&ids)
}

pub async fn add_type(config: &ModelDbConfig, label: &str) -> Result<()> {
    let id = connect(config)?
        .store_dependency_type(label)
        .await
        .with_context(|| format!("Failed to register dependency type '{}'", label))?;

    info!("Registered dependency type '{}' with id {}", label, id);
    Ok(())
}
