//! # Bancada 共有ユーティリティ
//!
//! api クレートから使用される横断的なユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - トレーシング関連は `observability` feature、OpenAPI スキーマは
//!   `openapi` feature を有効にした場合のみコンパイルする

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
