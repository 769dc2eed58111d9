//! # 認証ユースケース
//!
//! メールアドレスとパスワードを `users` テーブルの行と照合する。
//! トークンやセッションは発行せず、照合結果のプロフィールのみを返す。
//!
//! ## タイミング攻撃対策
//!
//! ユーザーが存在しない場合もダミーハッシュで検証を実行し、
//! 処理時間を均一化する。呼び出し側からはユーザー不存在とパスワード不一致を
//! 区別できない。

use std::sync::Arc;

use bancada_domain::{DomainError, password::PlainPassword, user::UserProfile};
use bancada_infra::{PasswordChecker, repository::UserRepository};

use crate::error::ApiError;

/// ログイン入力
///
/// JSON で省略された項目は `None`。
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub email:    Option<String>,
    pub password: Option<String>,
}

/// 認証ユースケースの実装
pub struct AuthUseCaseImpl {
    user_repository:  Arc<dyn UserRepository>,
    password_checker: Arc<dyn PasswordChecker>,
}

impl AuthUseCaseImpl {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_checker: Arc<dyn PasswordChecker>,
    ) -> Self {
        Self {
            user_repository,
            password_checker,
        }
    }

    /// 資格情報を照合し、成功時はユーザープロフィールを返す
    ///
    /// # Errors
    ///
    /// - `Validation`: email または password が未入力
    /// - `AuthenticationFailed`: ユーザー不存在、パスワード不一致、保存ハッシュの形式不正
    /// - `Database`: ユーザー検索の失敗
    pub async fn login(&self, input: LoginInput) -> Result<UserProfile, ApiError> {
        let email = required(input.email, "email")?;
        let password = PlainPassword::new(required(input.password, "password")?);

        let Some(user) = self.user_repository.find_by_email(&email).await? else {
            self.password_checker.verify_dummy(&password);
            tracing::info!(reason = "user_not_found", "ログイン失敗");
            return Err(ApiError::AuthenticationFailed);
        };

        match self.password_checker.verify(&password, user.password_hash()) {
            Ok(result) if result.is_match() => {
                tracing::info!(user.id = user.id(), "ログイン成功");
                Ok(user.into_profile())
            }
            Ok(_) => {
                tracing::info!(user.id = user.id(), reason = "password_mismatch", "ログイン失敗");
                Err(ApiError::AuthenticationFailed)
            }
            Err(e) => {
                tracing::warn!(
                    user.id = user.id(),
                    error.kind = e.kind_name(),
                    "保存されたパスワードハッシュを検証できません: {}",
                    e
                );
                Err(ApiError::AuthenticationFailed)
            }
        }
    }
}

/// 空白のみの値も未入力として扱う
fn required(value: Option<String>, field: &str) -> Result<String, DomainError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| DomainError::Validation(format!("{field} は必須です")))
}
