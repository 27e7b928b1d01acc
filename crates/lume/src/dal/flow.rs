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

//! Flow and flow-of-flows operations.
//!
//! A flow of flows is a composite flow whose members are themselves
//! registered flows. The grouping rows record the parent, each member and the
//! member's position; queries return the member [`Flow`] records.

use diesel::prelude::*;
use tracing::debug;

use super::models::{FlowRow, NewFlowOfFlowsRow};
use super::{filter_by, first_match, Criteria, FlowCriteria, FlowOfFlowsCriteria, ModelDbService};
use crate::database::schema::{flow_of_flows, flows};
use crate::error::{ModelDbError, ValidationError};
use crate::models::{Flow, NewFlow};

/// Converts a member index into the stored `position` column value.
fn member_position(index: usize) -> Result<i32, ValidationError> {
    i32::try_from(index).map_err(|_| ValidationError::InvalidValue {
        column: "position".to_string(),
        value: index.to_string(),
        expected: "a member position within the 32-bit integer range",
    })
}

impl ModelDbService {
    /// Records a flow and returns its id.
    ///
    /// The deployment and project must already exist.
    pub async fn store_flow(&self, flow: NewFlow) -> Result<String, ModelDbError> {
        let row = FlowRow::from(flow);

        let flow_id: String = crate::with_connection!(self.database, |conn| {
            diesel::insert_into(flows::table)
                .values(&row)
                .returning(flows::flow_id)
                .get_result::<String>(conn)
        })?;

        debug!(flow_id = %flow_id, "Stored flow");
        Ok(flow_id)
    }

    /// Returns the flow matching `criteria`.
    ///
    /// # Arguments
    ///
    /// * `criteria` - Column equality filters; several matches resolve to the lowest flow id
    ///
    /// # Returns
    ///
    /// The matching [`Flow`], or [`ModelDbError::FlowNotFound`].
    pub async fn get_flow(&self, criteria: FlowCriteria) -> Result<Flow, ModelDbError> {
        let description = criteria.describe();

        let rows: Vec<FlowRow> = crate::with_connection!(self.database, |conn| {
            let mut query = flows::table.select(FlowRow::as_select()).into_boxed();
            filter_by!(query, criteria, {
                flow_id => flows::flow_id,
                flow_name => flows::flow_name,
                project_name => flows::project_name,
                deployment_id => flows::deployment_id,
            });
            query.order(flows::flow_id.asc()).load::<FlowRow>(conn)
        })?;

        debug!(criteria = %description, matches = rows.len(), "Queried flows");
        first_match("flow", rows, |row| row.flow_id.clone())
            .map(Flow::from)
            .ok_or(ModelDbError::FlowNotFound(description))
    }

    /// Registers `members` as the ordered children of `parent_flow_id`.
    ///
    /// Each member's position is its index in `members`. All grouping rows are
    /// inserted in one transaction; the returned ids follow `members` order.
    ///
    /// # Arguments
    ///
    /// * `parent_flow_id` - The registered composite flow
    /// * `members` - Registered member flow ids, in execution order
    pub async fn store_flow_of_flows(
        &self,
        parent_flow_id: &str,
        members: &[String],
    ) -> Result<Vec<i32>, ModelDbError> {
        let rows: Vec<NewFlowOfFlowsRow> = members
            .iter()
            .enumerate()
            .map(|(index, flow_id)| {
                Ok(NewFlowOfFlowsRow {
                    parent_flow_id: parent_flow_id.to_string(),
                    flow_id: flow_id.clone(),
                    position: member_position(index)?,
                })
            })
            .collect::<Result<_, ValidationError>>()?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = crate::with_connection!(self.database, |conn| {
            conn.transaction::<_, diesel::result::Error, _>(|conn| {
                rows.iter()
                    .map(|row| {
                        diesel::insert_into(flow_of_flows::table)
                            .values(row)
                            .returning(flow_of_flows::id)
                            .get_result::<i32>(conn)
                    })
                    .collect::<QueryResult<Vec<i32>>>()
            })
        })?;

        debug!(
            parent_flow_id,
            members = ids.len(),
            "Stored flow of flows"
        );
        Ok(ids)
    }

    /// Returns the member flows of the grouping rows matching `criteria`,
    /// ordered by position.
    pub async fn get_flow_of_flows(
        &self,
        criteria: FlowOfFlowsCriteria,
    ) -> Result<Vec<Flow>, ModelDbError> {
        let description = criteria.describe();

        let rows: Vec<FlowRow> = crate::with_connection!(self.database, |conn| {
            let mut query = flow_of_flows::table
                .inner_join(flows::table.on(flows::flow_id.eq(flow_of_flows::flow_id)))
                .select(FlowRow::as_select())
                .into_boxed();
            filter_by!(query, criteria, {
                id => flow_of_flows::id,
                parent_flow_id => flow_of_flows::parent_flow_id,
                flow_id => flow_of_flows::flow_id,
                position => flow_of_flows::position,
            });
            query
                .order((flow_of_flows::position.asc(), flow_of_flows::id.asc()))
                .load::<FlowRow>(conn)
        })?;

        debug!(criteria = %description, members = rows.len(), "Queried flow of flows");
        if rows.is_empty() {
            return Err(ModelDbError::FlowOfFlowsNotFound(description));
        }
        Ok(rows.into_iter().map(Flow::from).collect())
    }
}
