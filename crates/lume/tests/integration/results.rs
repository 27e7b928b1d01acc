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

//! Integration tests for the database-backed results store.

use lume::results::{DatabaseResultsStore, ResultDocument, ResultsError, ResultsStore};
use serde_json::json;

use crate::fixtures::sqlite_fixture;

fn generic(flow_id: &str, output: f64) -> ResultDocument {
    ResultDocument::from_value(
        "generic",
        json!({
            "flow_id": flow_id,
            "inputs": {"input1": 2.0, "input2": [1, 2, 3, 4, 5], "input3": "my_file.txt"},
            "outputs": {"output1": output}
        }),
    )
    .unwrap()
}

#[tokio::test]
async fn test_insert_and_find() {
    let fixture = sqlite_fixture().await;
    let store = DatabaseResultsStore::new(fixture.database.clone());

    let first = store.insert(&generic("flow-1", 1.0)).await.unwrap();
    let second = store.insert(&generic("flow-1", 2.0)).await.unwrap();
    store.insert(&generic("flow-2", 3.0)).await.unwrap();

    let stored = store.find("flow-1").await.unwrap();
    assert_eq!(stored.iter().map(|r| r.id).collect::<Vec<_>>(), vec![first, second]);
    assert_eq!(stored[1].document, generic("flow-1", 2.0));
    assert!(stored.iter().all(|r| r.flow_id == "flow-1"));

    let latest = store.latest("flow-1").await.unwrap();
    assert_eq!(latest.id, second);
}

#[tokio::test]
async fn test_impact_document_round_trip() {
    let fixture = sqlite_fixture().await;
    let store = DatabaseResultsStore::new(fixture.database.clone());

    let document = ResultDocument::from_value(
        "impact",
        json!({
            "flow_id": "impact-flow",
            "inputs": {"distgen:n_particle": 10000},
            "outputs": {"end_norm_emit_x": 1.5},
            "plot_file": "plot.png",
            "pv_collection_isotime": "2024-05-01T08:30:00Z",
            "config": {"workdir": "/tmp"}
        }),
    )
    .unwrap();

    store.insert(&document).await.unwrap();
    let latest = store.latest("impact-flow").await.unwrap();
    assert_eq!(latest.document, document);
    assert_eq!(latest.document.result_type(), "impact");
}

#[tokio::test]
async fn test_missing_results() {
    let fixture = sqlite_fixture().await;
    let store = DatabaseResultsStore::new(fixture.database.clone());

    assert!(store.find("nothing").await.unwrap().is_empty());
    let err = store.latest("nothing").await.unwrap_err();
    assert!(matches!(err, ResultsError::NotFound { ref flow_id } if flow_id == "nothing"));
}
