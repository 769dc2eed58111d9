//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト |
//! |--------|------|-----------|
//! | `DATABASE_URL` | **Yes** | なし |
//! | `API_HOST` | No | `0.0.0.0` |
//! | `API_PORT` | No | `8080` |
//! | `CORS_ALLOWED_ORIGINS` | No | `http://localhost:5173,https://localhost:5173` |
//! | `ALLOWED_EMAILS` | No | 組み込みの 5 アドレス |

use bancada_domain::person::EmailAllowList;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:5173,https://localhost:5173";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} が設定されていません")]
    MissingVar(&'static str),

    #[error("API_PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),
}

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:                 String,
    /// ポート番号
    pub port:                 u16,
    /// データベース接続 URL
    pub database_url:         String,
    /// CORS で許可するオリジン
    pub cors_allowed_origins: Vec<String>,
    /// 人物検証で照合するメールアドレス
    pub allowed_emails:       EmailAllowList,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 空文字列の値は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?;
        let host = get("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("API_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let cors_allowed_origins = split_list(
            &get("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGINS.to_string()),
        );
        let allowed_emails = match get("ALLOWED_EMAILS") {
            Some(raw) => split_list(&raw).into_iter().collect(),
            None => EmailAllowList::default(),
        };

        Ok(Self {
            host,
            port,
            database_url,
            cors_allowed_origins,
            allowed_emails,
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// カンマ区切りの値を分割し、空要素を除く
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
