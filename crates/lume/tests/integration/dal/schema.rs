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

//! Integration tests for schema application.

use lume::models::NewModel;
use lume::ModelCriteria;

use crate::fixtures::sqlite_fixture;

#[tokio::test]
async fn test_apply_schema_is_idempotent() {
    let fixture = sqlite_fixture().await;

    let model_id = fixture
        .service
        .store_model(NewModel::new("Ada", "slac", "lcls", "cu_hxr", "kept"))
        .await
        .unwrap();

    fixture.service.apply_schema().await.unwrap();
    fixture.service.apply_schema().await.unwrap();

    let model = fixture
        .service
        .get_model(ModelCriteria::new().model_id(model_id))
        .await
        .unwrap();
    assert_eq!(model.description, "kept");
}
