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

//! Result documents stored in the model database's `results` table.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use tracing::debug;

use super::{ResultDocument, ResultsError, ResultsStore, StoredResult};
use crate::database::schema::results;
use crate::database::Database;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = results)]
struct ResultRow {
    id: i32,
    flow_id: String,
    #[allow(dead_code)]
    result_type: String,
    document: String,
    created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = results)]
struct NewResultRow {
    flow_id: String,
    result_type: String,
    document: String,
    created_at: NaiveDateTime,
}

impl ResultRow {
    fn into_stored(self) -> Result<StoredResult, ResultsError> {
        Ok(StoredResult {
            id: self.id,
            flow_id: self.flow_id,
            created_at: DateTime::<Utc>::from_naive_utc_and_offset(self.created_at, Utc),
            document: serde_json::from_str(&self.document)?,
        })
    }
}

/// [`ResultsStore`] backed by the relational model database.
#[derive(Clone, Debug)]
pub struct DatabaseResultsStore {
    database: Database,
}

impl DatabaseResultsStore {
    /// Creates a results store sharing `database`'s pool.
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl ResultsStore for DatabaseResultsStore {
    async fn insert(&self, document: &ResultDocument) -> Result<i32, ResultsError> {
        document.validate()?;
        let row = NewResultRow {
            flow_id: document.flow_id().to_string(),
            result_type: document.result_type().to_string(),
            document: serde_json::to_string(document)?,
            created_at: Utc::now().naive_utc(),
        };
        let flow_id = row.flow_id.clone();

        let id: i32 = crate::with_connection!(self.database, |conn| {
            diesel::insert_into(results::table)
                .values(&row)
                .returning(results::id)
                .get_result::<i32>(conn)
        })?;

        debug!(id, flow_id = %flow_id, "Stored result document");
        Ok(id)
    }

    async fn find(&self, flow_id: &str) -> Result<Vec<StoredResult>, ResultsError> {
        let wanted = flow_id.to_string();

        let rows: Vec<ResultRow> = crate::with_connection!(self.database, |conn| {
            results::table
                .filter(results::flow_id.eq(wanted))
                .order(results::id.asc())
                .select(ResultRow::as_select())
                .load::<ResultRow>(conn)
        })?;

        rows.into_iter().map(ResultRow::into_stored).collect()
    }

    async fn latest(&self, flow_id: &str) -> Result<StoredResult, ResultsError> {
        let wanted = flow_id.to_string();

        let row: Option<ResultRow> = crate::with_connection!(self.database, |conn| {
            results::table
                .filter(results::flow_id.eq(wanted))
                .order((results::created_at.desc(), results::id.desc()))
                .select(ResultRow::as_select())
                .first::<ResultRow>(conn)
                .optional()
        })?;

        match row {
            Some(row) => row.into_stored(),
            None => Err(ResultsError::NotFound {
                flow_id: flow_id.to_string(),
            }),
        }
    }
}
