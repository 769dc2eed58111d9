//! # リポジトリ実装
//!
//! PostgreSQL のテーブルへのアクセスをトレイトの背後に隠す。
//! ユースケース層はトレイトにのみ依存し、テストではモックに差し替える。

pub mod instrument_repository;
pub mod user_repository;

pub use instrument_repository::{InstrumentRepository, PostgresInstrumentRepository};
pub use user_repository::{PostgresUserRepository, UserRepository};
