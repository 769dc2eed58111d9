//! # API エラー定義
//!
//! ハンドラが返すエラーと、RFC 9457 形式のレスポンスへの変換を定義する。
//!
//! ```text
//! DomainError / InfraError
//!        ↓ From
//! ApiError
//!        ↓ IntoResponse
//! StatusCode + ErrorResponse(JSON)
//! ```
//!
//! 500 系のレスポンスは固定の detail のみを返し、原因はログにだけ出力する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bancada_domain::DomainError;
use bancada_infra::InfraError;
use bancada_shared::ErrorResponse;
use thiserror::Error;

/// 認証失敗時の detail
///
/// ユーザー不存在とパスワード不一致を区別しない。
pub const AUTHENTICATION_FAILED_DETAIL: &str = "メールアドレスまたはパスワードが正しくありません";

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 入力値の検証エラー（400）
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// クエリ文字列やパスパラメータの形式不正（400）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// リソースが存在しない（404）
    #[error("{0}")]
    NotFound(String),

    /// 認証失敗（401）
    #[error("認証に失敗しました")]
    AuthenticationFailed,

    /// データベースエラー（500）
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            e @ DomainError::NotFound { .. } => Self::NotFound(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            ApiError::Validation(msg) => ErrorResponse::validation_error(msg),
            ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            ApiError::NotFound(msg) => ErrorResponse::not_found(msg),
            ApiError::AuthenticationFailed => {
                ErrorResponse::unauthorized(AUTHENTICATION_FAILED_DETAIL)
            }
            ApiError::Database(e) => {
                tracing::error!(
                    error.category = "infrastructure",
                    error.kind = e.kind_name(),
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
