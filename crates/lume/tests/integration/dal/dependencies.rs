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

//! Integration tests for dependency manifests.

use lume::error::ModelDbError;
use lume::models::NewDependency;

use crate::fixtures::sqlite_fixture;

fn manifest() -> Vec<NewDependency> {
    vec![
        NewDependency::new("numpy", "conda", "conda-forge", "1.26.4"),
        NewDependency::new("lume-model", "pip", "pypi", "1.7.0")
            .local_source("/wheels/lume_model-1.7.0.whl"),
        NewDependency::new("torch", "conda", "pytorch", "2.2.0"),
    ]
}

#[tokio::test]
async fn test_store_dependencies_returns_one_id_per_entry() {
    let fixture = sqlite_fixture().await;
    let model_id = fixture.model("Ada").await;
    let deployment_id = fixture.deployment(model_id, "v1").await;
    let conda = fixture.service.store_dependency_type("conda").await.unwrap();
    let pip = fixture.service.store_dependency_type("pip").await.unwrap();

    let ids = fixture
        .service
        .store_dependencies(&manifest(), deployment_id)
        .await
        .unwrap();
    assert_eq!(ids.len(), 3);

    let stored = fixture.service.get_dependencies(deployment_id).await.unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored.iter().map(|d| d.id).collect::<Vec<_>>(), ids);

    assert_eq!(stored[0].name, "numpy");
    assert_eq!(stored[0].dependency_type.id, conda);
    assert_eq!(stored[0].dependency_type.label, "conda");
    assert_eq!(stored[1].dependency_type.id, pip);
    assert_eq!(
        stored[1].local_source.as_deref(),
        Some("/wheels/lume_model-1.7.0.whl")
    );
    assert!(stored[2].local_source.is_none());
    assert!(stored.iter().all(|d| d.deployment_id == deployment_id));
}

#[tokio::test]
async fn test_unknown_dependency_type_stores_nothing() {
    let fixture = sqlite_fixture().await;
    let model_id = fixture.model("Ada").await;
    let deployment_id = fixture.deployment(model_id, "v1").await;
    fixture.service.store_dependency_type("conda").await.unwrap();

    let mut dependencies = manifest();
    dependencies.push(NewDependency::new("libfoo", "apt", "debian", "1.0"));

    let err = fixture
        .service
        .store_dependencies(&dependencies, deployment_id)
        .await
        .unwrap_err();
    // "pip" is unregistered too; the error names one of the unknown labels.
    assert!(matches!(
        err,
        ModelDbError::UnknownDependencyType { ref label } if label == "apt" || label == "pip"
    ));

    let err = fixture
        .service
        .get_dependencies(deployment_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::DeploymentNotFound(_)));
}

#[tokio::test]
async fn test_empty_manifest() {
    let fixture = sqlite_fixture().await;

    let ids = fixture.service.store_dependencies(&[], 1).await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_dependencies_require_existing_deployment() {
    let fixture = sqlite_fixture().await;
    fixture.service.store_dependency_type("conda").await.unwrap();
    fixture.service.store_dependency_type("pip").await.unwrap();

    let err = fixture
        .service
        .store_dependencies(&manifest(), 31337)
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::Database(_)));
}

#[tokio::test]
async fn test_get_dependencies_unknown_deployment() {
    let fixture = sqlite_fixture().await;

    let err = fixture.service.get_dependencies(12).await.unwrap_err();
    assert!(matches!(err, ModelDbError::DeploymentNotFound(_)));
}

#[tokio::test]
async fn test_dependency_types() {
    let fixture = sqlite_fixture().await;

    let id = fixture.service.store_dependency_type("conda").await.unwrap();
    let dependency_type = fixture.service.get_dependency_type("conda").await.unwrap();
    assert_eq!(dependency_type.id, id);
    assert_eq!(dependency_type.label, "conda");

    let err = fixture
        .service
        .store_dependency_type("conda")
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::Database(_)));

    let err = fixture.service.get_dependency_type("apt").await.unwrap_err();
    assert!(matches!(err, ModelDbError::UnknownDependencyType { .. }));
}
