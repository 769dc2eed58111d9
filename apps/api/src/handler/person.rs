//! # 人物検証ハンドラ
//!
//! `POST /validar-pessoa`（別名 `/validarpessoa`）で氏名・生年月日・メールアドレスを検証し、
//! 年齢と許可メールリストへの登録有無を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use bancada_domain::{
    clock::Clock,
    person::{self, EmailAllowList, PersonSubmission, PersonValidation},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::json_body;
use crate::error::ApiError;

/// 人物検証 API の共有状態
pub struct PersonState {
    pub clock:          Arc<dyn Clock>,
    pub allowed_emails: Arc<EmailAllowList>,
}

/// 人物検証リクエスト
///
/// 生年月日は `yyyy-MM-dd`、`dd/MM/yyyy`、`dd-MM-yyyy`、`yyyy/MM/dd`、ISO 8601 の日時
/// または `yyyy-MM-dd HH:mm:ss`。
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonRequest {
    pub name:       Option<String>,
    pub birth_date: Option<String>,
    pub email:      Option<String>,
}

/// 人物検証レスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonValidationDto {
    pub message:     String,
    pub name:        String,
    pub age:         u32,
    pub is_adult:    bool,
    pub email_found: bool,
}

impl From<PersonValidation> for PersonValidationDto {
    fn from(validation: PersonValidation) -> Self {
        Self {
            message:     validation.message.to_string(),
            name:        validation.name,
            age:         validation.age,
            is_adult:    validation.is_adult,
            email_found: validation.email_found,
        }
    }
}

/// POST /validar-pessoa
#[utoipa::path(
    post,
    path = "/validar-pessoa",
    tag = "person",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "検証成功", body = PersonValidationDto),
        (status = 400, description = "未入力・日付不正・未来の生年月日", body = bancada_shared::ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn validate_person(
    State(state): State<Arc<PersonState>>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Json<PersonValidationDto>, ApiError> {
    let req = json_body(payload)?;
    let submission = PersonSubmission {
        name:       req.name.unwrap_or_default(),
        birth_date: req.birth_date.unwrap_or_default(),
        email:      req.email.unwrap_or_default(),
    };

    let validation = person::validate(&submission, state.clock.today(), &state.allowed_emails)?;

    Ok(Json(validation.into()))
}

/// POST /validarpessoa
///
/// `/validar-pessoa` の別名。
#[utoipa::path(
    post,
    path = "/validarpessoa",
    tag = "person",
    request_body = PersonRequest,
    responses(
        (status = 200, description = "検証成功", body = PersonValidationDto),
        (status = 400, description = "未入力・日付不正・未来の生年月日", body = bancada_shared::ErrorResponse)
    )
)]
pub async fn validate_person_alias(
    state: State<Arc<PersonState>>,
    payload: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Json<PersonValidationDto>, ApiError> {
    validate_person(state, payload).await
}
