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

//! Integration tests for model storage and lookup.

use chrono::Utc;
use lume::error::ModelDbError;
use lume::{Criteria, ModelCriteria, ValidationError};

use crate::fixtures::sqlite_fixture;

#[tokio::test]
async fn test_store_then_get_model() {
    let fixture = sqlite_fixture().await;
    let before = Utc::now();

    let model_id = fixture.model("Ada").await;
    let model = fixture
        .service
        .get_model(ModelCriteria::new().model_id(model_id))
        .await
        .expect("Failed to get model");

    assert_eq!(model.model_id, model_id);
    assert_eq!(model.author, "Ada");
    assert_eq!(model.laboratory, "slac");
    assert_eq!(model.facility, "lcls");
    assert_eq!(model.beampath, "cu_hxr");
    assert!(model.created >= before - chrono::Duration::seconds(1));
}

#[tokio::test]
async fn test_get_model_by_identifying_fields() {
    let fixture = sqlite_fixture().await;

    let _other = fixture.model("Grace").await;
    let model_id = fixture.model("Ada").await;
    let model = fixture
        .service
        .get_model(
            ModelCriteria::new()
                .author("Ada")
                .laboratory("slac")
                .facility("lcls")
                .beampath("cu_hxr"),
        )
        .await
        .expect("Failed to get model");

    assert_eq!(model.model_id, model_id);
    assert_eq!(model.author, "Ada");
}

#[tokio::test]
async fn test_model_ids_are_distinct() {
    let fixture = sqlite_fixture().await;

    let first = fixture.model("Ada").await;
    let second = fixture.model("Grace").await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_get_model_not_found() {
    let fixture = sqlite_fixture().await;

    let err = fixture
        .service
        .get_model(ModelCriteria::new().model_id(999))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::ModelNotFound(ref c) if c.contains("model_id=999")));

    let err = fixture
        .service
        .get_model(ModelCriteria::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ModelDbError::ModelNotFound(_)));
}

#[tokio::test]
async fn test_multiple_matches_return_lowest_id() {
    let fixture = sqlite_fixture().await;

    let first = fixture.model("Ada").await;
    let _second = fixture.model("Ada").await;
    let _other = fixture.model("Grace").await;

    let model = fixture
        .service
        .get_model(ModelCriteria::new().author("Ada"))
        .await
        .unwrap();
    assert_eq!(model.model_id, first);
}

#[tokio::test]
async fn test_filter_from_pairs() {
    let fixture = sqlite_fixture().await;
    fixture.model("Ada").await;
    let grace = fixture.model("Grace").await;

    let criteria =
        ModelCriteria::try_from_pairs([("author", "Grace"), ("facility", "lcls")]).unwrap();
    let model = fixture.service.get_model(criteria).await.unwrap();
    assert_eq!(model.model_id, grace);
}

#[tokio::test]
async fn test_invalid_criteria_rejected_before_query() {
    let err = ModelCriteria::try_from_pairs([("colour", "blue")]).unwrap_err();
    assert!(matches!(err, ValidationError::UnknownColumn { entity: "model", .. }));

    let err = ModelCriteria::try_from_pairs([("model_id", "one")]).unwrap_err();
    let err: ModelDbError = err.into();
    assert!(matches!(err, ModelDbError::Validation(ValidationError::InvalidValue { .. })));
}
