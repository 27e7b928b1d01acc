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

//! Integration tests for pool construction.

use lume::config::ModelDbConfig;
use lume::database::DatabaseError;
use lume::{BackendType, Database};
use tempfile::TempDir;

#[tokio::test]
async fn test_database_from_config() {
    let dir = TempDir::new().unwrap();
    let config = ModelDbConfig::new(dir.path().join("models.db").display().to_string())
        .with_pool_size(3);

    let database = Database::from_config(&config).unwrap();
    assert_eq!(database.backend(), BackendType::Sqlite);

    let conn = database.get_sqlite_connection().await;
    assert!(conn.is_ok());
}

#[test]
fn test_database_rejects_unknown_scheme() {
    let err = Database::try_new("mysql://localhost/models", 2).unwrap_err();
    assert!(matches!(err, DatabaseError::UnsupportedUrl(_)));
}

#[test]
fn test_init_logging_twice() {
    lume::init_logging(Some("debug"));
    lume::init_logging(None);
    tracing::info!("logging still works after a second init");
}
