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

//! Integration tests for flows and flows of flows.

use lume::error::ModelDbError;
use lume::models::NewFlow;
use lume::{FlowCriteria, FlowOfFlowsCriteria};

use crate::fixtures::{sqlite_fixture, TestFixture};

async fn deployment_and_project(fixture: &TestFixture) -> (i32, String) {
    let model_id = fixture.model("Ada").await;
    let deployment_id = fixture.deployment(model_id, "v1").await;
    let project = fixture.project("injector").await;
    (deployment_id, project)
}

#[tokio::test]
async fn test_store_and_get_flow() {
    let fixture = sqlite_fixture().await;
    let (deployment_id, project) = deployment_and_project(&fixture).await;

    let flow_id = fixture
        .service
        .store_flow(NewFlow::new("flow-abc", deployment_id, "nightly", &project))
        .await
        .unwrap();
    assert_eq!(flow_id, "flow-abc");

    let flow = fixture
        .service
        .get_flow(FlowCriteria::new().flow_name("nightly"))
        .await
        .unwrap();
    assert_eq!(flow.flow_id, "flow-abc");
    assert_eq!(flow.deployment_id, deployment_id);
    assert_eq!(flow.project_name, "injector");
}

#[tokio::test]
async fn test_flow_requires_existing_project_and_deployment() {
    let fixture = sqlite_fixture().await;
    let (deployment_id, project) = deployment_and_project(&fixture).await;

    let err = fixture
        .service
        .store_flow(NewFlow::new("f1", deployment_id, "n", "no-such-project"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::Database(_)));

    let err = fixture
        .service
        .store_flow(NewFlow::new("f2", 777, "n", &project))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::Database(_)));
}

#[tokio::test]
async fn test_get_flow_not_found() {
    let fixture = sqlite_fixture().await;

    let err = fixture
        .service
        .get_flow(FlowCriteria::new().flow_id("missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::FlowNotFound(_)));
}

#[tokio::test]
async fn test_flow_of_flows_returns_members_in_order() {
    let fixture = sqlite_fixture().await;
    let (deployment_id, project) = deployment_and_project(&fixture).await;

    for flow_id in ["parent", "member-a", "member-b", "member-c", "unrelated"] {
        fixture.flow(flow_id, deployment_id, &project).await;
    }

    let members = vec![
        "member-b".to_string(),
        "member-a".to_string(),
        "member-c".to_string(),
    ];
    let ids = fixture
        .service
        .store_flow_of_flows("parent", &members)
        .await
        .unwrap();
    assert_eq!(ids.len(), 3);

    let flows = fixture
        .service
        .get_flow_of_flows(FlowOfFlowsCriteria::new().parent_flow_id("parent"))
        .await
        .unwrap();
    let flow_ids: Vec<&str> = flows.iter().map(|f| f.flow_id.as_str()).collect();
    assert_eq!(flow_ids, vec!["member-b", "member-a", "member-c"]);
}

#[tokio::test]
async fn test_flow_of_flows_not_found() {
    let fixture = sqlite_fixture().await;

    let err = fixture
        .service
        .get_flow_of_flows(FlowOfFlowsCriteria::new().parent_flow_id("parent"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::FlowOfFlowsNotFound(_)));
}

#[tokio::test]
async fn test_flow_of_flows_with_unknown_member_stores_nothing() {
    let fixture = sqlite_fixture().await;
    let (deployment_id, project) = deployment_and_project(&fixture).await;
    fixture.flow("parent", deployment_id, &project).await;
    fixture.flow("member-a", deployment_id, &project).await;

    let err = fixture
        .service
        .store_flow_of_flows("parent", &["member-a".to_string(), "ghost".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::Database(_)));

    let err = fixture
        .service
        .get_flow_of_flows(FlowOfFlowsCriteria::new().parent_flow_id("parent"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::FlowOfFlowsNotFound(_)));
}
