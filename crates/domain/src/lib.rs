//! # Bancada ドメイン層
//!
//! HTTP ハンドラから呼び出される純粋なドメインロジックを定義する。
//!
//! ## 設計方針
//!
//! - **I/O を持たない**: データベースやネットワークには一切触れない
//! - **注入可能な副作用**: 現在時刻は [`clock::Clock`]、乱数は `rand::Rng`
//!   として外部から受け取り、テストで固定できるようにする
//! - **ドメインエラー**: 入力不正・不存在は [`DomainError`] で表現する
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//!   ↘ shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダ
//! - [`comparison`] - 2 つの整数の比較
//! - [`error`] - ドメインエラー
//! - [`forecast`] - 天気予報の生成
//! - [`instrument`] - 楽器エンティティ
//! - [`lottery`] - 抽選番号の生成
//! - [`password`] - パスワード値オブジェクト
//! - [`person`] - 人物情報の検証
//! - [`user`] - ユーザーエンティティ（読み取り専用）

pub mod clock;
pub mod comparison;
pub mod error;
pub mod forecast;
pub mod instrument;
pub mod lottery;
pub mod password;
pub mod person;
pub mod user;

pub use error::DomainError;

/// ログ出力時にマスクした値を示すプレースホルダ
pub const REDACTED: &str = "[REDACTED]";
