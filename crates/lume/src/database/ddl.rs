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

//! Create-if-absent DDL for the model database.
//!
//! Schema management is purely additive: every statement is
//! `CREATE ... IF NOT EXISTS`, so applying it to a database that already has
//! the tables is a no-op. There is no versioning and no down path.

use super::BackendType;

#[cfg(feature = "postgres")]
const POSTGRES_STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS models (
        model_id SERIAL PRIMARY KEY,
        created TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        author VARCHAR(255) NOT NULL,
        laboratory VARCHAR(255) NOT NULL,
        facility VARCHAR(255) NOT NULL,
        beampath VARCHAR(255) NOT NULL,
        description TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS deployments (
        deployment_id SERIAL PRIMARY KEY,
        version VARCHAR(255) NOT NULL,
        deploy_date TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        asset_dir VARCHAR(255),
        source VARCHAR(255) NOT NULL,
        sha256 VARCHAR(255) NOT NULL,
        image VARCHAR(255) NOT NULL,
        is_live BOOLEAN NOT NULL DEFAULT FALSE,
        model_id INTEGER NOT NULL REFERENCES models (model_id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS projects (
        project_name VARCHAR(255) PRIMARY KEY,
        description TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS flows (
        flow_id VARCHAR(255) PRIMARY KEY,
        flow_name VARCHAR(255) NOT NULL,
        project_name VARCHAR(255) NOT NULL REFERENCES projects (project_name),
        deployment_id INTEGER NOT NULL REFERENCES deployments (deployment_id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS flow_of_flows (
        id SERIAL PRIMARY KEY,
        parent_flow_id VARCHAR(255) NOT NULL REFERENCES flows (flow_id),
        flow_id VARCHAR(255) NOT NULL REFERENCES flows (flow_id),
        position INTEGER NOT NULL DEFAULT 0
    )"#,
    r#"CREATE TABLE IF NOT EXISTS dependency_types (
        id SERIAL PRIMARY KEY,
        "type" VARCHAR(255) NOT NULL UNIQUE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS deployment_dependencies (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        source VARCHAR(255) NOT NULL,
        local_source VARCHAR(255),
        version VARCHAR(255) NOT NULL,
        deployment_id INTEGER NOT NULL REFERENCES deployments (deployment_id),
        dependency_type_id INTEGER NOT NULL REFERENCES dependency_types (id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS results (
        id SERIAL PRIMARY KEY,
        flow_id VARCHAR(255) NOT NULL,
        result_type VARCHAR(64) NOT NULL,
        document TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_deployments_model_id ON deployments (model_id)",
    "CREATE INDEX IF NOT EXISTS idx_flows_deployment_id ON flows (deployment_id)",
    "CREATE INDEX IF NOT EXISTS idx_flow_of_flows_parent ON flow_of_flows (parent_flow_id)",
    "CREATE INDEX IF NOT EXISTS idx_deployment_dependencies_deployment_id ON deployment_dependencies (deployment_id)",
    "CREATE INDEX IF NOT EXISTS idx_results_flow_id ON results (flow_id)",
];

#[cfg(feature = "sqlite")]
const SQLITE_STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS models (
        model_id INTEGER PRIMARY KEY AUTOINCREMENT,
        created TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        author TEXT NOT NULL,
        laboratory TEXT NOT NULL,
        facility TEXT NOT NULL,
        beampath TEXT NOT NULL,
        description TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS deployments (
        deployment_id INTEGER PRIMARY KEY AUTOINCREMENT,
        version TEXT NOT NULL,
        deploy_date TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
        asset_dir TEXT,
        source TEXT NOT NULL,
        sha256 TEXT NOT NULL,
        image TEXT NOT NULL,
        is_live BOOLEAN NOT NULL DEFAULT 0,
        model_id INTEGER NOT NULL REFERENCES models (model_id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS projects (
        project_name TEXT PRIMARY KEY NOT NULL,
        description TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS flows (
        flow_id TEXT PRIMARY KEY NOT NULL,
        flow_name TEXT NOT NULL,
        project_name TEXT NOT NULL REFERENCES projects (project_name),
        deployment_id INTEGER NOT NULL REFERENCES deployments (deployment_id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS flow_of_flows (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        parent_flow_id TEXT NOT NULL REFERENCES flows (flow_id),
        flow_id TEXT NOT NULL REFERENCES flows (flow_id),
        position INTEGER NOT NULL DEFAULT 0
    )"#,
    r#"CREATE TABLE IF NOT EXISTS dependency_types (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        "type" TEXT NOT NULL UNIQUE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS deployment_dependencies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        source TEXT NOT NULL,
        local_source TEXT,
        version TEXT NOT NULL,
        deployment_id INTEGER NOT NULL REFERENCES deployments (deployment_id),
        dependency_type_id INTEGER NOT NULL REFERENCES dependency_types (id)
    )"#,
    r#"CREATE TABLE IF NOT EXISTS results (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        flow_id TEXT NOT NULL,
        result_type TEXT NOT NULL,
        document TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_deployments_model_id ON deployments (model_id)",
    "CREATE INDEX IF NOT EXISTS idx_flows_deployment_id ON flows (deployment_id)",
    "CREATE INDEX IF NOT EXISTS idx_flow_of_flows_parent ON flow_of_flows (parent_flow_id)",
    "CREATE INDEX IF NOT EXISTS idx_deployment_dependencies_deployment_id ON deployment_dependencies (deployment_id)",
    "CREATE INDEX IF NOT EXISTS idx_results_flow_id ON results (flow_id)",
];

/// Tables created by [`create_statements`], in dependency order.
pub const TABLES: &[&str] = &[
    "models",
    "deployments",
    "projects",
    "flows",
    "flow_of_flows",
    "dependency_types",
    "deployment_dependencies",
    "results",
];

/// Returns the create-if-absent statements for the given backend.
pub fn create_statements(backend: BackendType) -> &'static [&'static str] {
    match backend {
        #[cfg(feature = "postgres")]
        BackendType::Postgres => POSTGRES_STATEMENTS,
        #[cfg(feature = "sqlite")]
        BackendType::Sqlite => SQLITE_STATEMENTS,
    }
}
