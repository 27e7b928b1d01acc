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

//! # Lume
//!
//! Metadata store for simulation models and the workflow artifacts built
//! around them. Lume records models, their containerized deployments, the
//! flows and projects registered with an external orchestration engine,
//! pinned deployment dependencies and flow execution results.
//!
//! The crate is organised in layers:
//!
//! - [`database`] owns the connection pool, backend detection and the
//!   relational schema.
//! - [`dal`] exposes [`ModelDbService`], the typed store/get contract over that
//!   schema, together with the criteria types used to query it.
//! - [`results`] stores arbitrary-shaped simulation result documents keyed by
//!   flow id.
//! - [`scheduling`] turns local run configurations into run descriptors for
//!   the orchestration engine after checking the working directory exists.
//!
//! ```rust,ignore
//! use lume::{Database, ModelDbService};
//! use lume::models::NewModel;
//! use lume::dal::ModelCriteria;
//!
//! let database = Database::try_new("sqlite:///var/lib/lume/models.db", 4)?;
//! let service = ModelDbService::new(database);
//! service.apply_schema().await?;
//!
//! let model_id = service
//!     .store_model(NewModel::new("author", "slac", "lcls", "cu_hxr", "injector surrogate"))
//!     .await?;
//! let model = service.get_model(ModelCriteria::new().model_id(model_id)).await?;
//! ```

#[cfg(not(any(feature = "postgres", feature = "sqlite")))]
compile_error!("at least one of the `postgres` or `sqlite` features must be enabled");

pub mod config;
pub mod dal;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod results;
pub mod scheduling;

pub use config::{FileServiceConfig, LumeConfig, ModelDbConfig};
pub use dal::{
    Criteria, DeploymentCriteria, FlowCriteria, FlowOfFlowsCriteria, ModelCriteria, ModelDbService,
    ProjectCriteria,
};
pub use database::{BackendType, Database};
pub use error::{ModelDbError, ValidationError};
pub use logging::init_logging;
pub use results::{DatabaseResultsStore, ResultDocument, ResultsError, ResultsStore};
pub use scheduling::{LocalBackend, LocalFileService, RunBackend, SchedulingError};
