//! # 抽選ハンドラ

use axum::Json;
use bancada_domain::lottery;

/// GET /lottery
///
/// 1〜60 から重複なしで選んだ 6 個の番号を昇順で返す。
#[utoipa::path(
    get,
    path = "/lottery",
    tag = "samples",
    responses(
        (status = 200, description = "昇順の抽選番号", body = Vec<u8>)
    )
)]
pub async fn draw_lottery() -> Json<Vec<u8>> {
    Json(lottery::draw(&mut rand::rng()).into_vec())
}
