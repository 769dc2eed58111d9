//! # OpenAPI 仕様定義
//!
//! utoipa を使用して API の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得でき、`GET /openapi.json` で公開する。

use axum::Json;
use utoipa::OpenApi;

use crate::handler::{
    auth,
    comparison,
    forecast,
    health,
    instrument,
    lottery,
    misc,
    person,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bancada API",
        version = "0.1.0",
        description = "サンプルエンドポイント・人物検証・楽器管理・ログインを提供する API"
    ),
    paths(
        // health
        health::health_check,
        health::readiness_check,
        // samples
        forecast::get_weather_forecast,
        lottery::draw_lottery,
        comparison::compare_numbers,
        misc::soma,
        misc::texto,
        misc::ping,
        // person
        person::validate_person,
        person::validate_person_alias,
        // instruments
        instrument::list_instruments,
        instrument::create_instrument,
        instrument::update_instrument,
        instrument::delete_instrument,
        // auth
        auth::login,
    ),
    components(schemas(
        bancada_shared::ErrorResponse,
        bancada_shared::HealthResponse,
        bancada_shared::ReadinessResponse,
        bancada_shared::ReadinessStatus,
        bancada_shared::CheckStatus,
        forecast::ForecastDto,
        comparison::ComparisonDto,
        person::PersonRequest,
        person::PersonValidationDto,
        instrument::InstrumentRequest,
        instrument::InstrumentDto,
        auth::LoginRequest,
        auth::LoginUserResponse,
    )),
    tags(
        (name = "health", description = "ヘルスチェック"),
        (name = "samples", description = "入力を加工して返すサンプルエンドポイント"),
        (name = "person", description = "人物情報の検証"),
        (name = "instruments", description = "楽器の管理"),
        (name = "auth", description = "ログイン"),
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_全エンドポイントがopenapiに含まれる() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/health",
            "/health/ready",
            "/weatherforecast",
            "/lottery",
            "/comparar",
            "/soma",
            "/texto",
            "/ping",
            "/validar-pessoa",
            "/validarpessoa",
            "/api/instruments",
            "/api/instruments/{id}",
            "/login",
        ] {
            assert!(paths.contains_key(path), "{path} が含まれていない");
        }
    }

    #[test]
    fn test_openapiがjsonにシリアライズできる() {
        let json = ApiDoc::openapi().to_json().unwrap();

        assert!(json.contains("Bancada API"));
    }
}
