//! # Bancada API サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `CORS_ALLOWED_ORIGINS` | No | カンマ区切りの許可オリジン |
//! | `ALLOWED_EMAILS` | No | カンマ区切りの許可メールアドレス |
//! | `LOG_FORMAT` | No | `json` または `pretty` |
//! | `RUST_LOG` | No | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo run -p bancada-api
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use bancada_api::{
    app_builder::{AppDependencies, build_app},
    config::ApiConfig,
    handler::ReadinessState,
};
use bancada_domain::clock::SystemClock;
use bancada_infra::{
    Argon2PasswordChecker,
    db,
    repository::{PostgresInstrumentRepository, PostgresUserRepository},
};
use bancada_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

const SERVICE_NAME: &str = "bancada-api";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env(SERVICE_NAME);
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;
    tracing::info!(
        allowed_emails = config.allowed_emails.len(),
        "API サーバーを起動します: {}",
        config.bind_address()
    );

    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    let deps = AppDependencies {
        readiness_state:       Arc::new(ReadinessState::new(pool.clone())),
        instrument_repository: Arc::new(PostgresInstrumentRepository::new(pool.clone())),
        user_repository:       Arc::new(PostgresUserRepository::new(pool)),
        password_checker:      Arc::new(Argon2PasswordChecker::new()),
        clock:                 Arc::new(SystemClock),
    };
    let app = build_app(&config, deps);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("{} にバインドできません", config.bind_address()))?;
    tracing::info!("API サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
