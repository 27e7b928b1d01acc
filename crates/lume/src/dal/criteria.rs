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

//! Typed query criteria.
//!
//! Each entity has a criteria struct whose fields mirror the entity's
//! columns, every one optional. Unset fields do not constrain the query, so
//! an empty criteria matches every row. Typed callers use the builder setters:
//!
//! ```rust,ignore
//! let criteria = DeploymentCriteria::new().model_id(3).is_live(true);
//! ```
//!
//! Callers holding untyped `column=value` input (CLI flags, config files) go
//! through [`Criteria::try_from_pairs`], which rejects unknown columns and
//! unparsable values before any query is built.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A column type that can be parsed from a raw criteria value.
pub trait CriterionValue: Sized + fmt::Display {
    /// Human-readable description of the accepted format.
    const EXPECTED: &'static str;

    fn parse_criterion(raw: &str) -> Option<Self>;
}

impl CriterionValue for String {
    const EXPECTED: &'static str = "a string";

    fn parse_criterion(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl CriterionValue for i32 {
    const EXPECTED: &'static str = "an integer";

    fn parse_criterion(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl CriterionValue for bool {
    const EXPECTED: &'static str = "a boolean (true/false)";

    fn parse_criterion(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        }
    }
}

impl CriterionValue for DateTime<Utc> {
    const EXPECTED: &'static str = "an RFC 3339 timestamp";

    fn parse_criterion(raw: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Runtime view of a criteria type, for callers that only have strings.
pub trait Criteria: Default + fmt::Debug + Send + 'static {
    /// Name of the entity the criteria select, used in errors and logs.
    const ENTITY: &'static str;

    /// The columns that may be constrained, in declaration order.
    const COLUMNS: &'static [&'static str];

    /// Parses `raw` as the value of `column` and sets it.
    fn set(&mut self, column: &str, raw: &str) -> Result<(), ValidationError>;

    /// True when no column is constrained.
    fn is_empty(&self) -> bool;

    /// Renders the constrained columns as `column=value` pairs.
    fn describe(&self) -> String;

    fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = Self::default();
        for (column, value) in pairs {
            criteria.set(column.as_ref(), value.as_ref())?;
        }
        Ok(criteria)
    }
}

/// Splits a `column=value` filter argument.
pub fn parse_pair(raw: &str) -> Result<(String, String), ValidationError> {
    match raw.split_once('=') {
        Some((column, value)) if !column.trim().is_empty() => {
            Ok((column.trim().to_string(), value.to_string()))
        }
        _ => Err(ValidationError::MalformedPair(raw.to_string())),
    }
}

fn parse_value<T: CriterionValue>(column: &str, raw: &str) -> Result<T, ValidationError> {
    T::parse_criterion(raw).ok_or_else(|| ValidationError::InvalidValue {
        column: column.to_string(),
        value: raw.to_string(),
        expected: T::EXPECTED,
    })
}

macro_rules! criteria {
    (
        $(#[$meta:meta])*
        $name:ident for $entity:literal {
            $( $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl Criteria for $name {
            const ENTITY: &'static str = $entity;
            const COLUMNS: &'static [&'static str] = &[$(stringify!($field)),*];

            fn set(&mut self, column: &str, raw: &str) -> Result<(), ValidationError> {
                match column {
                    $(
                        stringify!($field) => {
                            self.$field = Some(parse_value::<$ty>(column, raw)?);
                        }
                    )*
                    _ => {
                        return Err(ValidationError::UnknownColumn {
                            entity: $entity,
                            column: column.to_string(),
                        })
                    }
                }
                Ok(())
            }

            fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }

            fn describe(&self) -> String {
                let mut parts: Vec<String> = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        parts.push(format!("{}={}", stringify!($field), value));
                    }
                )*
                if parts.is_empty() {
                    format!("{} (any)", $entity)
                } else {
                    format!("{} ({})", $entity, parts.join(", "))
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.describe())
            }
        }
    };
}

criteria! {
    /// Selects rows of `models`.
    ModelCriteria for "model" {
        model_id: i32,
        created: DateTime<Utc>,
        author: String,
        laboratory: String,
        facility: String,
        beampath: String,
        description: String,
    }
}

criteria! {
    /// Selects rows of `deployments`.
    DeploymentCriteria for "deployment" {
        deployment_id: i32,
        version: String,
        deploy_date: DateTime<Utc>,
        asset_dir: String,
        source: String,
        sha256: String,
        image: String,
        is_live: bool,
        model_id: i32,
    }
}

criteria! {
    ProjectCriteria for "project" {
        project_name: String,
        description: String,
    }
}

criteria! {
    FlowCriteria for "flow" {
        flow_id: String,
        flow_name: String,
        project_name: String,
        deployment_id: i32,
    }
}

criteria! {
    /// Selects grouping rows of `flow_of_flows`; the query returns their member flows.
    FlowOfFlowsCriteria for "flow_of_flows" {
        id: i32,
        parent_flow_id: String,
        flow_id: String,
        position: i32,
    }
}
