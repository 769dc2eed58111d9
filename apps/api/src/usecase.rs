//! # ユースケース層
//!
//! データベースを伴う操作のビジネスロジックを実装する。
//!
//! - リポジトリとパスワードチェッカーは `Arc<dyn Trait>` で外部から注入
//! - ハンドラは薄く保ち、入力検証と結果の判定はユースケースに集約
//!
//! DB を使わない操作（天気予報、抽選、比較、人物検証）はドメイン関数を
//! ハンドラから直接呼び出す。

pub mod auth;
pub mod instrument;

pub use auth::{AuthUseCaseImpl, LoginInput};
pub use instrument::InstrumentUseCaseImpl;
