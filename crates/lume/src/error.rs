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

//! Error types for the metadata store service.
//!
//! Errors from lower layers (pool, driver) are wrapped rather than
//! reclassified, so callers can still inspect the underlying diesel error.

use thiserror::Error;

use crate::database::DatabaseError;

/// Errors returned by [`crate::ModelDbService`].
#[derive(Debug, Error)]
pub enum ModelDbError {
    #[error("No model found matching {0}")]
    ModelNotFound(String),

    #[error("No deployment found matching {0}")]
    DeploymentNotFound(String),

    #[error("No project found matching {0}")]
    ProjectNotFound(String),

    #[error("No flow found matching {0}")]
    FlowNotFound(String),

    #[error("No flow of flows found matching {0}")]
    FlowOfFlowsNotFound(String),

    /// A dependency named a type label absent from `dependency_types`.
    #[error("Unknown dependency type '{label}'")]
    UnknownDependencyType { label: String },

    #[error("Invalid criteria: {0}")]
    Validation(#[from] ValidationError),

    #[error("Connection pool error: {0}")]
    ConnectionPool(String),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
}

impl From<DatabaseError> for ModelDbError {
    fn from(err: DatabaseError) -> Self {
        ModelDbError::ConnectionPool(err.to_string())
    }
}

/// Errors raised while building query criteria from untyped input.
///
/// Both variants are raised before any query is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{column}' is not a column of {entity}")]
    UnknownColumn {
        entity: &'static str,
        column: String,
    },

    #[error("Invalid value '{value}' for column '{column}': expected {expected}")]
    InvalidValue {
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("Malformed filter '{0}': expected column=value")]
    MalformedPair(String),
}
