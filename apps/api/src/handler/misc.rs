//! # 固定値エンドポイント
//!
//! 入力を取らず、常に同じ値を返す。

use axum::Json;

/// `/soma` の左辺
pub const SOMA_A: i32 = 5;
/// `/soma` の右辺
pub const SOMA_B: i32 = 10;

pub const TEXTO: &str = "Olá, mundo!";
pub const PONG: &str = "pong";

/// 固定の 2 数の和を返す
#[utoipa::path(
    get,
    path = "/soma",
    tag = "samples",
    responses(
        (status = 200, description = "5 + 10 の結果", body = i32)
    )
)]
pub async fn soma() -> Json<i32> {
    Json(SOMA_A + SOMA_B)
}

#[utoipa::path(
    get,
    path = "/texto",
    tag = "samples",
    responses(
        (status = 200, description = "固定の挨拶文", body = String, content_type = "text/plain")
    )
)]
pub async fn texto() -> &'static str {
    TEXTO
}

#[utoipa::path(
    get,
    path = "/ping",
    tag = "samples",
    responses(
        (status = 200, description = "疎通確認", body = String, content_type = "text/plain")
    )
)]
pub async fn ping() -> &'static str {
    PONG
}
