//! # 天気予報ハンドラ
//!
//! `GET /weatherforecast` で翌日からの予報を返す。

use std::sync::Arc;

use axum::{Json, extract::State};
use bancada_domain::{
    clock::Clock,
    forecast::{self, ForecastEntry},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 天気予報 API の共有状態
pub struct ForecastState {
    pub clock: Arc<dyn Clock>,
}

/// 天気予報 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDto {
    pub date:          NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary:       String,
}

impl From<&ForecastEntry> for ForecastDto {
    fn from(entry: &ForecastEntry) -> Self {
        Self {
            date:          entry.date(),
            temperature_c: entry.temperature_c(),
            temperature_f: entry.temperature_f(),
            summary:       entry.summary().to_string(),
        }
    }
}

/// GET /weatherforecast
#[utoipa::path(
    get,
    path = "/weatherforecast",
    tag = "samples",
    responses(
        (status = 200, description = "翌日からの天気予報", body = Vec<ForecastDto>)
    )
)]
pub async fn get_weather_forecast(
    State(state): State<Arc<ForecastState>>,
) -> Json<Vec<ForecastDto>> {
    let entries = forecast::generate(state.clock.today(), &mut rand::rng());

    Json(entries.iter().map(ForecastDto::from).collect())
}
