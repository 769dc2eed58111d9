//! # 数値比較ハンドラ
//!
//! `GET /comparar?primeiro=3&segundo=9` で 2 つの整数を比較する。
//! 応答のキーはポルトガル語のまま返す。

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use bancada_domain::comparison::{self, ComparisonResult};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

/// 比較対象のクエリパラメータ
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompareQuery {
    /// 1 つ目の整数
    pub primeiro: i32,
    /// 2 つ目の整数
    pub segundo:  i32,
}

/// 比較結果 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ComparisonDto {
    pub mensagem: String,
    pub primeiro: i32,
    pub segundo:  i32,
    pub maior:    i32,
    pub menor:    i32,
}

impl From<ComparisonResult> for ComparisonDto {
    fn from(result: ComparisonResult) -> Self {
        Self {
            mensagem: result.mensagem.to_string(),
            primeiro: result.primeiro,
            segundo:  result.segundo,
            maior:    result.maior,
            menor:    result.menor,
        }
    }
}

/// GET /comparar
///
/// パラメータの欠落や整数として解釈できない値は 400。
#[utoipa::path(
    get,
    path = "/comparar",
    tag = "samples",
    params(CompareQuery),
    responses(
        (status = 200, description = "比較結果", body = ComparisonDto),
        (status = 400, description = "クエリパラメータ不正", body = bancada_shared::ErrorResponse)
    )
)]
pub async fn compare_numbers(
    query: Result<Query<CompareQuery>, QueryRejection>,
) -> Result<Json<ComparisonDto>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    Ok(Json(comparison::compare(query.primeiro, query.segundo).into()))
}
