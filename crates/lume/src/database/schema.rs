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

//! Diesel table definitions for the model database.
//!
//! These definitions use only SQL types that both PostgreSQL and SQLite map
//! natively (`Integer`, `Text`, `Bool`, `Timestamp`), so a single schema
//! serves both backends. The matching DDL lives in [`super::ddl`].

diesel::table! {
    models (model_id) {
        model_id -> Integer,
        created -> Timestamp,
        author -> Text,
        laboratory -> Text,
        facility -> Text,
        beampath -> Text,
        description -> Text,
    }
}

diesel::table! {
    deployments (deployment_id) {
        deployment_id -> Integer,
        version -> Text,
        deploy_date -> Timestamp,
        asset_dir -> Nullable<Text>,
        source -> Text,
        sha256 -> Text,
        image -> Text,
        is_live -> Bool,
        model_id -> Integer,
    }
}

diesel::table! {
    projects (project_name) {
        project_name -> Text,
        description -> Text,
    }
}

diesel::table! {
    flows (flow_id) {
        flow_id -> Text,
        flow_name -> Text,
        project_name -> Text,
        deployment_id -> Integer,
    }
}

diesel::table! {
    flow_of_flows (id) {
        id -> Integer,
        parent_flow_id -> Text,
        flow_id -> Text,
        position -> Integer,
    }
}

diesel::table! {
    dependency_types (id) {
        id -> Integer,
        #[sql_name = "type"]
        type_ -> Text,
    }
}

diesel::table! {
    deployment_dependencies (id) {
        id -> Integer,
        name -> Text,
        source -> Text,
        local_source -> Nullable<Text>,
        version -> Text,
        deployment_id -> Integer,
        dependency_type_id -> Integer,
    }
}

diesel::table! {
    results (id) {
        id -> Integer,
        flow_id -> Text,
        result_type -> Text,
        document -> Text,
        created_at -> Timestamp,
    }
}

diesel::joinable!(deployments -> models (model_id));
diesel::joinable!(flows -> deployments (deployment_id));
diesel::joinable!(flows -> projects (project_name));
diesel::joinable!(flow_of_flows -> flows (flow_id));
diesel::joinable!(deployment_dependencies -> deployments (deployment_id));
diesel::joinable!(deployment_dependencies -> dependency_types (dependency_type_id));

diesel::allow_tables_to_appear_in_same_query!(
    models,
    deployments,
    projects,
    flows,
    flow_of_flows,
    dependency_types,
    deployment_dependencies,
    results,
);
