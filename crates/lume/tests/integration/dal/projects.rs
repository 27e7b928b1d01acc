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

use lume::error::ModelDbError;
use lume::models::NewProject;
use lume::ProjectCriteria;

use crate::fixtures::sqlite_fixture;

#[tokio::test]
async fn test_store_and_get_project() {
    let fixture = sqlite_fixture().await;

    let name = fixture
        .service
        .store_project(NewProject::new("injector", "Injector surrogates"))
        .await
        .unwrap();
    assert_eq!(name, "injector");

    let project = fixture
        .service
        .get_project(ProjectCriteria::new().project_name("injector"))
        .await
        .unwrap();
    assert_eq!(project.description, "Injector surrogates");
}

#[tokio::test]
async fn test_duplicate_project_name_rejected() {
    let fixture = sqlite_fixture().await;
    fixture.project("injector").await;

    let err = fixture
        .service
        .store_project(NewProject::new("injector", "again"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::Database(_)));
}

#[tokio::test]
async fn test_get_project_not_found() {
    let fixture = sqlite_fixture().await;

    let err = fixture
        .service
        .get_project(ProjectCriteria::new().project_name("nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::ProjectNotFound(_)));
}
