//! # UserRepository
//!
//! `users` テーブルの読み取りを担当するリポジトリ。
//! ユーザーの作成・更新は外部システムの責務であり、ここでは扱わない。

use async_trait::async_trait;
use bancada_domain::{password::PasswordHash, user::User};
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// メールアドレスの完全一致でユーザーを検索する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(user))`: ユーザーが見つかった場合
    /// - `Ok(None)`: ユーザーが見つからない場合
    /// - `Err(_)`: データベースエラー
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, InfraError>;
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id:            i32,
    full_name:     String,
    birth_date:    Option<NaiveDate>,
    sex:           Option<String>,
    email:         String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::from_db(
            row.id,
            row.full_name,
            row.birth_date,
            row.sex,
            row.email,
            PasswordHash::new(row.password_hash),
        )
    }
}

/// PostgreSQL 実装の UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, InfraError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, birth_date, sex, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }
}
