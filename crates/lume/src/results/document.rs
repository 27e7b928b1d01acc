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

//! Result document shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ResultsError;

/// Inputs and outputs of a generic simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericResult {
    pub flow_id: String,
    pub inputs: Map<String, Value>,
    pub outputs: Map<String, Value>,
}

/// Result of an IMPACT beam simulation run, with its archive and the time
/// the input PVs were collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub flow_id: String,
    pub inputs: Map<String, Value>,
    pub outputs: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<String>,
    pub pv_collection_isotime: DateTime<Utc>,
    pub config: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result_type", rename_all = "snake_case")]
pub enum ResultDocument {
    Generic(GenericResult),
    Impact(ImpactResult),
}

impl ResultDocument {
    pub const RESULT_TYPES: &'static [&'static str] = &["generic", "impact"];

    /// Parses an untyped document of the named result type.
    pub fn from_value(result_type: &str, value: Value) -> Result<Self, ResultsError> {
        let document = match result_type {
            "generic" => ResultDocument::Generic(
                serde_json::from_value(value)
                    .map_err(|e| ResultsError::InvalidDocument(e.to_string()))?,
            ),
            "impact" => ResultDocument::Impact(
                serde_json::from_value(value)
                    .map_err(|e| ResultsError::InvalidDocument(e.to_string()))?,
            ),
            other => {
                return Err(ResultsError::InvalidDocument(format!(
                    "unknown result type '{}', expected one of {:?}",
                    other,
                    Self::RESULT_TYPES
                )))
            }
        };
        document.validate()?;
        Ok(document)
    }

    /// Discriminator stored in the `result_type` column.
    pub fn result_type(&self) -> &'static str {
        match self {
            ResultDocument::Generic(_) => "generic",
            ResultDocument::Impact(_) => "impact",
        }
    }

    pub fn flow_id(&self) -> &str {
        match self {
            ResultDocument::Generic(result) => &result.flow_id,
            ResultDocument::Impact(result) => &result.flow_id,
        }
    }

    /// Checks the structural shape of the document.
    pub fn validate(&self) -> Result<(), ResultsError> {
        if self.flow_id().trim().is_empty() {
            return Err(ResultsError::InvalidDocument(
                "flow_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
