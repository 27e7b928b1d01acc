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

//! Run backend adapter.
//!
//! Turns a run configuration into the run descriptor handed to the external
//! orchestration engine, after checking through a [`FileService`] that the
//! resources the run needs exist. Execution itself belongs to the engine.

use std::path::PathBuf;

use thiserror::Error;

pub mod backend;
pub mod file_service;

pub use backend::{LocalBackend, LocalRun, LocalRunConfig, RunBackend};
pub use file_service::{FileService, LocalFileService};

#[derive(Debug, Error)]
pub enum SchedulingError {
    /// A resource the run depends on does not exist.
    #[error("Directory {path} does not exist in namespace '{namespace}'")]
    MissingResource { namespace: String, path: String },

    #[error("Unknown file service namespace '{0}'")]
    UnknownNamespace(String),

    #[error("Invalid path '{0}': parent directory components are not allowed")]
    InvalidPath(String),

    #[error("I/O error checking {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
