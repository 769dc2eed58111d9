//! # 楽器ハンドラ
//!
//! `instruments` テーブルの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/instruments` - 一覧（ID 昇順）
//! - `POST /api/instruments` - 作成（201 + `Location`）
//! - `PUT /api/instruments/{id}` - 名前の更新
//! - `DELETE /api/instruments/{id}` - 削除（204）

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use bancada_domain::instrument::{Instrument, InstrumentId};
use bancada_shared::ErrorResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::json_body;
use crate::{error::ApiError, usecase::InstrumentUseCaseImpl};

/// 楽器 API の共有状態
pub struct InstrumentState {
    pub usecase: InstrumentUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 楽器の作成・更新リクエスト
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct InstrumentRequest {
    pub name: Option<String>,
}

/// 楽器 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct InstrumentDto {
    pub id:   i32,
    pub name: String,
}

impl From<&Instrument> for InstrumentDto {
    fn from(instrument: &Instrument) -> Self {
        Self {
            id:   instrument.id().as_i32(),
            name: instrument.name().as_str().to_string(),
        }
    }
}

fn parse_id(path: Result<Path<i32>, PathRejection>) -> Result<InstrumentId, ApiError> {
    path.map(|Path(id)| InstrumentId::new(id))
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

// --- ハンドラ ---

/// GET /api/instruments
#[utoipa::path(
    get,
    path = "/api/instruments",
    tag = "instruments",
    responses(
        (status = 200, description = "楽器一覧", body = Vec<InstrumentDto>),
        (status = 500, description = "内部エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_instruments(
    State(state): State<Arc<InstrumentState>>,
) -> Result<impl IntoResponse, ApiError> {
    let instruments = state.usecase.list_instruments().await?;

    let items: Vec<InstrumentDto> = instruments.iter().map(InstrumentDto::from).collect();
    Ok(Json(items))
}

/// POST /api/instruments
///
/// ## レスポンス
///
/// - `201 Created`: 作成された楽器（`Location: /api/instruments/{id}`）
/// - `400 Bad Request`: 名前が未入力
#[utoipa::path(
    post,
    path = "/api/instruments",
    tag = "instruments",
    request_body = InstrumentRequest,
    responses(
        (status = 201, description = "作成成功", body = InstrumentDto,
            headers(("Location" = String, description = "作成した楽器の URI"))),
        (status = 400, description = "バリデーションエラー", body = ErrorResponse),
        (status = 500, description = "内部エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_instrument(
    State(state): State<Arc<InstrumentState>>,
    payload: Result<Json<InstrumentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = json_body(payload)?;

    let instrument = state.usecase.create_instrument(req.name).await?;

    let location = format!("/api/instruments/{}", instrument.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(InstrumentDto::from(&instrument)),
    ))
}

/// PUT /api/instruments/{id}
#[utoipa::path(
    put,
    path = "/api/instruments/{id}",
    tag = "instruments",
    params(("id" = i32, Path, description = "楽器 ID")),
    request_body = InstrumentRequest,
    responses(
        (status = 200, description = "更新後の楽器", body = InstrumentDto),
        (status = 400, description = "バリデーションエラー", body = ErrorResponse),
        (status = 404, description = "楽器が存在しない", body = ErrorResponse),
        (status = 500, description = "内部エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_instrument(
    State(state): State<Arc<InstrumentState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<InstrumentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(path)?;
    let req = json_body(payload)?;

    let instrument = state.usecase.update_instrument(id, req.name).await?;

    Ok(Json(InstrumentDto::from(&instrument)))
}

/// DELETE /api/instruments/{id}
#[utoipa::path(
    delete,
    path = "/api/instruments/{id}",
    tag = "instruments",
    params(("id" = i32, Path, description = "楽器 ID")),
    responses(
        (status = 204, description = "削除成功"),
        (status = 404, description = "楽器が存在しない", body = ErrorResponse),
        (status = 500, description = "内部エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_instrument(
    State(state): State<Arc<InstrumentState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(path)?;

    state.usecase.delete_instrument(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
