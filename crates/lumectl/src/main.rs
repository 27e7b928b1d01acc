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

//! lumectl - administration CLI for the Lume model metadata store.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lume::{LumeConfig, ModelDbConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::get::Entity;

/// lumectl - inspect and populate the Lume model database
#[derive(Parser)]
#[command(name = "lumectl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL. Without it, --config is read, then LUME_MODEL_DB_URL or DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// TOML configuration file with a [model_db] section
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing tables in the model database
    ApplySchema,

    /// Look up a record and print it as JSON
    Get {
        #[arg(value_enum)]
        entity: Entity,

        /// Column filter, repeatable (e.g. --filter model_id=3)
        #[arg(long = "filter", short = 'f')]
        filters: Vec<String>,
    },

    /// Deployment dependency manifests
    Dependencies {
        #[command(subcommand)]
        command: DependencyCommands,
    },
}

#[derive(Subcommand)]
enum DependencyCommands {
    /// List the dependencies of a deployment
    List {
        #[arg(long)]
        deployment_id: i32,
    },

    /// Store a dependency manifest (TOML [[dependencies]] or JSON array)
    Store {
        #[arg(long)]
        deployment_id: i32,

        #[arg(long)]
        manifest: PathBuf,
    },

    /// Register a dependency type label (e.g. conda, pip)
    AddType { label: String },
}

/// Picks the database settings: explicit URL, then config file, then environment.
fn model_db_config(cli: &Cli) -> Result<ModelDbConfig> {
    let _ = dotenvy::dotenv();
    resolve_model_db_config(cli, |key| std::env::var(key).ok())
}

/// Resolution behind [`model_db_config`], with the environment supplied by `lookup`.
fn resolve_model_db_config<F>(cli: &Cli, lookup: F) -> Result<ModelDbConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = &cli.database_url {
        return Ok(ModelDbConfig::new(url.clone()));
    }
    if let Some(path) = &cli.config {
        let config = LumeConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
        return Ok(config.model_db);
    }
    let config = LumeConfig::from_lookup(lookup).context(
        "Database URL is required. Set --database-url, --config or the LUME_MODEL_DB_URL/DATABASE_URL environment variable",
    )?;
    Ok(config.model_db)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = model_db_config(&cli)?;

    match cli.command {
        Commands::ApplySchema => commands::schema::run(&config).await?,
        Commands::Get { entity, filters } => commands::get::run(&config, entity, &filters).await?,
        Commands::Dependencies { command } => match command {
            DependencyCommands::List { deployment_id } => {
                commands::dependencies::list(&config, deployment_id).await?
            }
            DependencyCommands::Store {
                deployment_id,
                manifest,
            } => commands::dependencies::store(&config, deployment_id, &manifest).await?,
            DependencyCommands::AddType { label } => {
                commands::dependencies::add_type(&config, &label).await?
            }
        },
    }

    Ok(())
}
