//! # Bancada API
//!
//! サンプルエンドポイント、人物検証、楽器 CRUD、ログインを提供する HTTP API。
//!
//! ## モジュール構成
//!
//! - [`app_builder`]: State の組み立てとルーター定義
//! - [`config`]: 環境変数からの設定読み込み
//! - [`error`]: API エラーと RFC 9457 レスポンスへの変換
//! - [`handler`]: HTTP ハンドラ
//! - [`openapi`]: OpenAPI ドキュメント
//! - [`usecase`]: DB を伴う操作のビジネスロジック

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;
