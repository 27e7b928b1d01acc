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

//! Database layer: connection pooling, backend detection and schema.
//!
//! - [`connection`] builds the `deadpool-diesel` pool for PostgreSQL or SQLite
//!   and hands out pooled connections.
//! - [`schema`] holds the diesel table definitions shared by both backends.
//! - [`ddl`] holds the create-if-absent statements used by `apply_schema`.

pub mod connection;
pub mod ddl;
pub mod schema;

pub use connection::{redact_url, AnyPool, BackendType, Database, DatabaseError};

#[cfg(feature = "sqlite")]
pub use connection::enable_foreign_keys;

/// Runs a diesel closure on a pooled connection of whichever backend the
/// [`Database`] was built for.
///
/// The closure body is expanded once per enabled backend and type-checked
/// against that backend's concrete connection, so a query is written once
/// and runs on both. On SQLite, foreign key enforcement is switched on before
/// the body runs. The expression evaluates to the body's `QueryResult`; pool
/// and interaction failures are returned early through `?` as
/// [`DatabaseError`], so the calling function's error type must implement
/// `From<DatabaseError>`.
///
/// ```rust,ignore
/// let count: i64 = with_connection!(self.database, |conn| {
///     models::table.count().get_result(conn)
/// })?;
/// ```
#[macro_export]
macro_rules! with_connection {
    ($database:expr, |$conn:ident| $body:expr) => {{
        let database: &$crate::database::Database = &$database;
        match database.backend() {
            #[cfg(feature = "postgres")]
            $crate::database::BackendType::Postgres => {
                let pooled = database.get_postgres_connection().await?;
                pooled
                    .interact(move |$conn| $body)
                    .await
                    .map_err(|e| $crate::database::DatabaseError::Interact(e.to_string()))?
            }
            #[cfg(feature = "sqlite")]
            $crate::database::BackendType::Sqlite => {
                let pooled = database.get_sqlite_connection().await?;
                pooled
                    .interact(move |$conn| {
                        $crate::database::enable_foreign_keys($conn)?;
                        $body
                    })
                    .await
                    .map_err(|e| $crate::database::DatabaseError::Interact(e.to_string()))?
            }
        }
    }};
}

