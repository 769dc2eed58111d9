//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post, put},
};
use bancada_domain::clock::Clock;
use bancada_infra::{
    PasswordChecker,
    repository::{InstrumentRepository, UserRepository},
};
use bancada_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::ApiConfig,
    handler::{
        AuthState,
        ForecastState,
        InstrumentState,
        PersonState,
        ReadinessState,
        compare_numbers,
        create_instrument,
        delete_instrument,
        draw_lottery,
        get_weather_forecast,
        health_check,
        list_instruments,
        login,
        ping,
        readiness_check,
        soma,
        texto,
        update_instrument,
        validate_person,
        validate_person_alias,
    },
    openapi::openapi_json,
    usecase::{AuthUseCaseImpl, InstrumentUseCaseImpl},
};

/// ルーターが依存するコンポーネント
///
/// `main.rs` では PostgreSQL 実装、テストではモックを渡す。
pub struct AppDependencies {
    pub readiness_state:       Arc<ReadinessState>,
    pub instrument_repository: Arc<dyn InstrumentRepository>,
    pub user_repository:       Arc<dyn UserRepository>,
    pub password_checker:      Arc<dyn PasswordChecker>,
    pub clock:                 Arc<dyn Clock>,
}

/// State の組み立てとルーター定義を行う
pub fn build_app(config: &ApiConfig, deps: AppDependencies) -> Router {
    let forecast_state = Arc::new(ForecastState {
        clock: deps.clock.clone(),
    });
    let person_state = Arc::new(PersonState {
        clock:          deps.clock,
        allowed_emails: Arc::new(config.allowed_emails.clone()),
    });
    let instrument_state = Arc::new(InstrumentState {
        usecase: InstrumentUseCaseImpl::new(deps.instrument_repository),
    });
    let auth_state = Arc::new(AuthState {
        usecase: AuthUseCaseImpl::new(deps.user_repository, deps.password_checker),
    });

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(deps.readiness_state),
        )
        .route("/openapi.json", get(openapi_json))
        .route("/lottery", get(draw_lottery))
        .route("/comparar", get(compare_numbers))
        .route("/soma", get(soma))
        .route("/texto", get(texto))
        .route("/ping", get(ping))
        .merge(
            Router::new()
                .route("/weatherforecast", get(get_weather_forecast))
                .with_state(forecast_state),
        )
        .merge(
            Router::new()
                .route("/validar-pessoa", post(validate_person))
                .route("/validarpessoa", post(validate_person_alias))
                .with_state(person_state),
        )
        .merge(
            Router::new()
                .route(
                    "/api/instruments",
                    get(list_instruments).post(create_instrument),
                )
                .route(
                    "/api/instruments/{id}",
                    put(update_instrument).delete(delete_instrument),
                )
                .with_state(instrument_state),
        )
        .merge(
            Router::new()
                .route("/login", post(login))
                .with_state(auth_state),
        )
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// 設定されたオリジンのみを許可する CORS レイヤー
///
/// ヘッダー値として不正なオリジンは警告を出して無視する。
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "CORS オリジンを解釈できないため無視します");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
