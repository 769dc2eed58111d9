//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//! 各ハンドラはサブモジュールに配置し、ここで re-export する。
//!
//! ```text
//! handler.rs
//! └── handler/
//!     ├── auth.rs         # POST /login
//!     ├── comparison.rs   # GET /comparar
//!     ├── forecast.rs     # GET /weatherforecast
//!     ├── health.rs       # GET /health, /health/ready
//!     ├── instrument.rs   # /api/instruments
//!     ├── lottery.rs      # GET /lottery
//!     ├── misc.rs         # GET /soma, /texto, /ping
//!     └── person.rs       # POST /validar-pessoa, /validarpessoa
//! ```

pub mod auth;
pub mod comparison;
pub mod forecast;
pub mod health;
pub mod instrument;
pub mod lottery;
pub mod misc;
pub mod person;

use axum::{Json, extract::rejection::JsonRejection};
pub use auth::{AuthState, login};
pub use comparison::compare_numbers;
pub use forecast::{ForecastState, get_weather_forecast};
pub use health::{ReadinessState, health_check, readiness_check};
pub use instrument::{
    InstrumentState,
    create_instrument,
    delete_instrument,
    list_instruments,
    update_instrument,
};
pub use lottery::draw_lottery;
pub use misc::{ping, soma, texto};
pub use person::{PersonState, validate_person, validate_person_alias};

use crate::error::ApiError;

/// JSON ボディの抽出失敗を RFC 9457 形式の 400 に揃える
///
/// axum 標準のリジェクションはプレーンテキストを返すため、
/// ハンドラは `Result<Json<T>, JsonRejection>` で受け取りこの関数を通す。
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}
