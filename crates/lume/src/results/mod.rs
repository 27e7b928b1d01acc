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

//! Simulation result documents.
//!
//! Flow runs produce input/output payloads whose shape depends on the
//! simulation. They are stored as JSON documents keyed by the flow id, next to
//! the relational metadata, and validated only for structural shape: a
//! document must deserialize into one of the [`ResultDocument`] variants.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::database::DatabaseError;

pub mod document;
pub mod store;

pub use document::{GenericResult, ImpactResult, ResultDocument};
pub use store::DatabaseResultsStore;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("Invalid result document: {0}")]
    InvalidDocument(String),

    #[error("No results stored for flow '{flow_id}'")]
    NotFound { flow_id: String },

    #[error("Result serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    ConnectionPool(String),
}

impl From<DatabaseError> for ResultsError {
    fn from(err: DatabaseError) -> Self {
        ResultsError::ConnectionPool(err.to_string())
    }
}

/// A document as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResult {
    pub id: i32,
    pub flow_id: String,
    pub created_at: DateTime<Utc>,
    pub document: ResultDocument,
}

/// Storage for result documents.
#[async_trait]
pub trait ResultsStore: Send + Sync {
    /// Stores a document and returns its id.
    async fn insert(&self, document: &ResultDocument) -> Result<i32, ResultsError>;

    /// All documents for a flow, in insertion order. Empty when there are none.
    async fn find(&self, flow_id: &str) -> Result<Vec<StoredResult>, ResultsError>;

    /// The most recently stored document for a flow.
    async fn latest(&self, flow_id: &str) -> Result<StoredResult, ResultsError>;
}
