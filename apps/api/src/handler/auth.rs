//! # ログインハンドラ
//!
//! `POST /login` でメールアドレスとパスワードを照合する。
//! セッションやトークンは発行しない。

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use bancada_domain::user::UserProfile;
use bancada_shared::ErrorResponse;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::json_body;
use crate::{
    error::ApiError,
    usecase::{AuthUseCaseImpl, LoginInput},
};

/// ログイン API の共有状態
pub struct AuthState {
    pub usecase: AuthUseCaseImpl,
}

/// ログインリクエスト
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub email:    Option<String>,
    pub password: Option<String>,
}

/// ログイン成功時のユーザー情報
///
/// パスワードハッシュは含まない。
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserResponse {
    pub id:         i32,
    pub full_name:  String,
    pub birth_date: Option<NaiveDate>,
    pub sex:        Option<String>,
    pub email:      String,
}

impl From<UserProfile> for LoginUserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id:         profile.id,
            full_name:  profile.full_name,
            birth_date: profile.birth_date,
            sex:        profile.sex,
            email:      profile.email,
        }
    }
}

/// POST /login
///
/// ユーザー不存在とパスワード不一致はどちらも同じ 401 を返す。
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "ログイン成功", body = LoginUserResponse),
        (status = 400, description = "未入力項目あり", body = ErrorResponse),
        (status = 401, description = "認証失敗", body = ErrorResponse),
        (status = 500, description = "内部エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<Arc<AuthState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginUserResponse>, ApiError> {
    let req = json_body(payload)?;

    let profile = state
        .usecase
        .login(LoginInput {
            email:    req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(profile.into()))
}
