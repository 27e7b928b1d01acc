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

//! Subcommand implementations.

use anyhow::{Context, Result};
use lume::{Database, ModelDbConfig, ModelDbService};

pub mod dependencies;
pub mod get;
pub mod schema;

pub(crate) fn connect(config: &ModelDbConfig) -> Result<ModelDbService> {
    let database = Database::from_config(config).context("Failed to connect to database")?;
    Ok(ModelDbService::new(database))
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON")?;
    println!("{}", rendered);
    Ok(())
}
