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

//! Implementation of the `apply-schema` command.

use anyhow::{Context, Result};
use lume::ModelDbConfig;
use tracing::info;

pub async fn run(config: &ModelDbConfig) -> Result<()> {
    let service = super::connect(config)?;
    service
        .apply_schema()
        .await
        .context("Failed to apply schema")?;

    info!(
        url = %lume::database::redact_url(&config.database_url),
        "Schema is up to date"
    );
    Ok(())
}
