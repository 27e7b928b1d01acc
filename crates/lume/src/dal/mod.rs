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

//! Metadata store service.
//!
//! [`ModelDbService`] is the typed store/get contract over the model database.
//! It holds a [`Database`] handle and runs every operation as a single
//! interaction on one pooled connection, which goes back to the pool when the
//! call returns, on success and on error.
//!
//! Operations are grouped by entity:
//!
//! - [`model`]: `store_model`, `get_model`
//! - [`deployment`]: `store_deployment`, `get_deployment`, `get_latest_deployment`
//! - [`project`]: `store_project`, `get_project`
//! - [`flow`]: `store_flow`, `get_flow`, `store_flow_of_flows`, `get_flow_of_flows`
//! - [`dependency`]: `store_dependency_type`, `get_dependency_type`,
//!   `store_dependencies`, `get_dependencies`
//!
//! # Multiple matches
//!
//! The single-record getters order candidate rows by primary key and return
//! the first. When more than one row matches, a warning naming the entity, the
//! match count and the returned key is logged.

use diesel::prelude::*;
use tracing::{info, warn};

use crate::database::{ddl, BackendType, Database};
use crate::error::ModelDbError;

pub mod criteria;
pub mod dependency;
pub mod deployment;
pub mod flow;
pub mod model;
pub mod models;
pub mod project;

pub use criteria::{
    Criteria, CriterionValue, DeploymentCriteria, FlowCriteria, FlowOfFlowsCriteria,
    ModelCriteria, ProjectCriteria,
};

/// Adds an equality filter to a boxed query for every criteria field that is set.
macro_rules! filter_by {
    ($query:ident, $criteria:ident, { $($field:ident => $column:path),* $(,)? }) => {
        $(
            if let Some(value) = $criteria.$field {
                $query = $query.filter($column.eq(value));
            }
        )*
    };
}
pub(crate) use filter_by;

/// Typed store/get operations over the model database.
///
/// `ModelDbService` is `Clone`; clones share the underlying pool.
#[derive(Clone, Debug)]
pub struct ModelDbService {
    database: Database,
}

impl ModelDbService {
    /// Creates a service over an existing database handle.
    ///
    /// # Arguments
    ///
    /// * `database` - Pooled connection handle; the service keeps it for its lifetime
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Returns the backend the service is connected to.
    pub fn backend(&self) -> BackendType {
        self.database.backend()
    }

    /// Creates every table and index that does not exist yet.
    ///
    /// Safe to call on an already initialised database. All statements run in
    /// one transaction.
    pub async fn apply_schema(&self) -> Result<(), ModelDbError> {
        let backend = self.database.backend();
        let statements = ddl::create_statements(backend);

        crate::with_connection!(self.database, |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                for statement in statements {
                    diesel::sql_query(*statement).execute(conn)?;
                }
                Ok(())
            })
        })?;

        info!(
            backend = backend.as_str(),
            tables = ddl::TABLES.len(),
            "Model database schema applied"
        );
        Ok(())
    }
}

/// Returns the first of `rows`, warning when there was more than one.
///
/// `rows` must already be in primary key order.
pub(crate) fn first_match<R, K>(entity: &'static str, rows: Vec<R>, key: K) -> Option<R>
where
    K: Fn(&R) -> String,
{
    let count = rows.len();
    let first = rows.into_iter().next()?;
    if count > 1 {
        warn!(
            entity,
            count,
            key = %key(&first),
            "Multiple {} records matched, returning the one with the lowest key",
            entity
        );
    }
    Some(first)
}
