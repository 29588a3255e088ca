// ABOUTME: Integration tests for the save and load flows against an in-memory program API
// ABOUTME: Validation gates the network call; collaborator errors propagate with typed codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Mutex;

use async_trait::async_trait;
use pierre_program_builder::builder::{ProgramBuilderStore, ProgramInfoUpdate};
use pierre_program_builder::client::{load_program, save_program, ProgramApi};
use pierre_program_builder::errors::{ApiError, ApiResult};
use pierre_program_builder::models::{
    DiscoveryFeed, Exercise, ExerciseQuery, ProgramDetail, ProgramQuery, ProgramSummary,
    PublicUser,
};
use pierre_program_builder::pagination::Page;
use pierre_program_builder::transform::{decode_program_detail, SaveProgramPayload};
use pierre_program_builder::ErrorCode;

use common::{init_test_logging, populated_store, program_detail_json};

/// Records save requests and answers from canned data
#[derive(Default)]
struct FakeProgramApi {
    saved: Mutex<Vec<SaveProgramPayload>>,
    reject_with: Option<u16>,
}

impl FakeProgramApi {
    fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            ..Self::default()
        }
    }

    fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

#[async_trait]
impl ProgramApi for FakeProgramApi {
    async fn save_full_program(&self, payload: &SaveProgramPayload) -> ApiResult<ProgramDetail> {
        if let Some(status) = self.reject_with {
            return Err(ApiError::status(
                "/api/v1/core/programs/save-full/",
                status,
                r#"{"weeks":["This field is required."]}"#,
            ));
        }
        self.saved.lock().unwrap().push(payload.clone());
        let mut detail = decode_program_detail(program_detail_json()).unwrap();
        detail.id = payload.id.unwrap_or(900);
        detail.title.clone_from(&payload.title);
        Ok(detail)
    }

    async fn get_program(&self, program_id: i64) -> ApiResult<ProgramDetail> {
        if program_id == 41 {
            Ok(decode_program_detail(program_detail_json()).unwrap())
        } else {
            Err(ApiError::status(
                format!("/api/v1/core/programs/{program_id}/"),
                404,
                r#"{"detail":"Not found."}"#,
            ))
        }
    }

    async fn list_public_programs(&self, _query: &ProgramQuery) -> ApiResult<Page<ProgramSummary>> {
        Ok(Page::empty())
    }

    async fn discovery_feed(&self) -> ApiResult<DiscoveryFeed> {
        Ok(DiscoveryFeed::default())
    }

    async fn search_exercises(&self, _query: &ExerciseQuery) -> ApiResult<Page<Exercise>> {
        Ok(Page::from_items(vec![Exercise::new(12, "Back Squat")]))
    }

    async fn get_public_user(&self, user_id: i64) -> ApiResult<PublicUser> {
        Err(ApiError::Unauthorized {
            endpoint: format!("/api/v1/accounts/users/{user_id}/"),
        })
    }
}

#[tokio::test]
async fn test_valid_program_is_saved_once() {
    let (store, _) = populated_store();
    let api = FakeProgramApi::default();

    let saved = save_program(&store, &api).await.unwrap();

    assert_eq!(saved.id, 900);
    assert_eq!(saved.title, "Base Strength");
    assert_eq!(api.save_count(), 1);
    let sent = &api.saved.lock().unwrap()[0];
    assert_eq!(sent.temp_id, store.program().temp_id);
    assert_eq!(sent.weeks.len(), 2);
}

#[tokio::test]
async fn test_invalid_program_never_reaches_the_api() {
    init_test_logging();
    let mut store = ProgramBuilderStore::new();
    store.update_program_info(ProgramInfoUpdate::title("No Weeks Yet"));
    let api = FakeProgramApi::default();

    let err = save_program(&store, &api).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert_eq!(err.validation_messages(), ["At least one week is required"]);
    assert_eq!(api.save_count(), 0);
}

#[tokio::test]
async fn test_backend_rejection_keeps_status_and_body() {
    let (store, _) = populated_store();
    let api = FakeProgramApi::rejecting(400);

    let err = save_program(&store, &api).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.details["status"], 400);
    assert!(err.details["body"].as_str().unwrap().contains("weeks"));
}

#[tokio::test]
async fn test_expired_token_maps_to_auth_required() {
    let (store, _) = populated_store();
    let api = FakeProgramApi::rejecting(401);

    let err = save_program(&store, &api).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AuthRequired);
}

#[tokio::test]
async fn test_load_program_adapts_detail_for_editing() {
    init_test_logging();
    let api = FakeProgramApi::default();

    let program = load_program(&api, 41).await.unwrap();

    assert_eq!(program.id, Some(41));
    assert_eq!(program.weeks[0].week_number, 1);
    assert!(program.weeks[0].temp_id.is_temporary());

    let store = ProgramBuilderStore::with_program(program);
    let resaved = save_program(&store, &api).await.unwrap();
    assert_eq!(resaved.id, 41);
}

#[tokio::test]
async fn test_load_missing_program_is_not_found() {
    init_test_logging();
    let api = FakeProgramApi::default();
    let err = load_program(&api, 7).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_trait_objects_drive_the_flows() {
    let (store, _) = populated_store();
    let api: Box<dyn ProgramApi> = Box::new(FakeProgramApi::default());
    assert!(save_program(&store, api.as_ref()).await.is_ok());
    assert_eq!(api.search_exercises(&ExerciseQuery::default()).await.unwrap().count, 1);
}
