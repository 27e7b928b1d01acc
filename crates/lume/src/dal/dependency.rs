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

//! Dependency type and deployment dependency operations.
//!
//! Storing a dependency manifest resolves every type label first, in one
//! select, and refuses the whole manifest when any label is unknown. Only
//! then are the dependency rows inserted, within the same transaction, so a
//! call either stores every dependency or none.

use std::collections::{BTreeSet, HashMap};

use diesel::prelude::*;
use tracing::debug;

use super::models::{
    DependencyRow, DependencyTypeRow, NewDependencyRow, NewDependencyTypeRow,
};
use super::ModelDbService;
use crate::database::schema::{dependency_types, deployment_dependencies};
use crate::error::ModelDbError;
use crate::models::{DependencyType, DeploymentDependency, NewDependency};

/// Inserts dependency rows and returns their ids in input order.
trait InsertDependencies {
    fn insert_dependencies(&mut self, rows: &[NewDependencyRow]) -> QueryResult<Vec<i32>>;
}

#[cfg(feature = "postgres")]
impl InsertDependencies for diesel::PgConnection {
    fn insert_dependencies(&mut self, rows: &[NewDependencyRow]) -> QueryResult<Vec<i32>> {
        // A multi-row INSERT ... RETURNING yields ids in VALUES order.
        diesel::insert_into(deployment_dependencies::table)
            .values(rows)
            .returning(deployment_dependencies::id)
            .get_results(self)
    }
}

#[cfg(feature = "sqlite")]
impl InsertDependencies for diesel::SqliteConnection {
    fn insert_dependencies(&mut self, rows: &[NewDependencyRow]) -> QueryResult<Vec<i32>> {
        rows.iter()
            .map(|row| {
                diesel::insert_into(deployment_dependencies::table)
                    .values(row)
                    .returning(deployment_dependencies::id)
                    .get_result::<i32>(self)
            })
            .collect()
    }
}

impl ModelDbService {
    /// Registers a dependency type label and returns its id.
    pub async fn store_dependency_type(&self, label: &str) -> Result<i32, ModelDbError> {
        let row = NewDependencyTypeRow {
            label: label.to_string(),
        };

        let id: i32 = crate::with_connection!(self.database, |conn| {
            diesel::insert_into(dependency_types::table)
                .values(&row)
                .returning(dependency_types::id)
                .get_result::<i32>(conn)
        })?;

        debug!(id, label, "Stored dependency type");
        Ok(id)
    }

    /// Looks up a dependency type by its label.
    ///
    /// Fails with [`ModelDbError::UnknownDependencyType`] when the label was
    /// never registered.
    pub async fn get_dependency_type(&self, label: &str) -> Result<DependencyType, ModelDbError> {
        let wanted = label.to_string();

        let row: Option<DependencyTypeRow> = crate::with_connection!(self.database, |conn| {
            dependency_types::table
                .filter(dependency_types::type_.eq(wanted))
                .select(DependencyTypeRow::as_select())
                .first::<DependencyTypeRow>(conn)
                .optional()
        })?;

        row.map(DependencyType::from)
            .ok_or_else(|| ModelDbError::UnknownDependencyType {
                label: label.to_string(),
            })
    }

    /// Stores a dependency manifest for a deployment.
    ///
    /// Returns one id per entry, in input order. An empty manifest returns an
    /// empty list without touching the database. Any entry with an
    /// unregistered type label fails the whole call with
    /// [`ModelDbError::UnknownDependencyType`] and nothing is stored.
    ///
    /// # Arguments
    ///
    /// * `dependencies` - Manifest entries; each `type` must be a registered label
    /// * `deployment_id` - The deployment the manifest belongs to
    pub async fn store_dependencies(
        &self,
        dependencies: &[NewDependency],
        deployment_id: i32,
    ) -> Result<Vec<i32>, ModelDbError> {
        if dependencies.is_empty() {
            return Ok(Vec::new());
        }

        let labels: Vec<String> = dependencies
            .iter()
            .map(|dependency| dependency.dependency_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let dependencies = dependencies.to_vec();

        let ids: Vec<i32> = crate::with_connection!(self.database, |conn| {
            conn.transaction::<_, ModelDbError, _>(|conn| {
                let type_ids: HashMap<String, i32> = dependency_types::table
                    .filter(dependency_types::type_.eq_any(labels))
                    .select(DependencyTypeRow::as_select())
                    .load::<DependencyTypeRow>(conn)?
                    .into_iter()
                    .map(|row| (row.label, row.id))
                    .collect();

                let rows = dependencies
                    .into_iter()
                    .map(|dependency| {
                        let type_id = *type_ids.get(&dependency.dependency_type).ok_or_else(
                            || ModelDbError::UnknownDependencyType {
                                label: dependency.dependency_type.clone(),
                            },
                        )?;
                        Ok(NewDependencyRow::new(dependency, deployment_id, type_id))
                    })
                    .collect::<Result<Vec<_>, ModelDbError>>()?;

                Ok(conn.insert_dependencies(&rows)?)
            })
        })?;

        debug!(deployment_id, count = ids.len(), "Stored deployment dependencies");
        Ok(ids)
    }

    /// Returns the dependencies of a deployment with their types, ordered by id.
    ///
    /// A deployment without dependencies is reported as
    /// [`ModelDbError::DeploymentNotFound`].
    pub async fn get_dependencies(
        &self,
        deployment_id: i32,
    ) -> Result<Vec<DeploymentDependency>, ModelDbError> {
        let rows: Vec<(DependencyRow, DependencyTypeRow)> =
            crate::with_connection!(self.database, |conn| {
                deployment_dependencies::table
                    .inner_join(dependency_types::table)
                    .filter(deployment_dependencies::deployment_id.eq(deployment_id))
                    .order(deployment_dependencies::id.asc())
                    .select((DependencyRow::as_select(), DependencyTypeRow::as_select()))
                    .load::<(DependencyRow, DependencyTypeRow)>(conn)
            })?;

        debug!(deployment_id, count = rows.len(), "Queried deployment dependencies");
        if rows.is_empty() {
            return Err(ModelDbError::DeploymentNotFound(format!(
                "deployment (deployment_id={}) with dependencies",
                deployment_id
            )));
        }
        Ok(rows.into_iter().map(DeploymentDependency::from).collect())
    }
}
