//! # InstrumentRepository
//!
//! `instruments` テーブルの CRUD を担当するリポジトリ。
//!
//! 各操作は単一の SQL 文で完結し、自動コミットされる。
//! 作成・更新は `RETURNING` で確定後の行を受け取る。

use async_trait::async_trait;
use bancada_domain::instrument::{Instrument, InstrumentId, InstrumentName};
use sqlx::PgPool;

use crate::error::InfraError;

/// 楽器リポジトリトレイト
#[async_trait]
pub trait InstrumentRepository: Send + Sync {
    /// すべての楽器を ID の昇順で取得する
    async fn find_all(&self) -> Result<Vec<Instrument>, InfraError>;

    /// 楽器を作成し、採番された ID を含む行を返す
    async fn insert(&self, name: &InstrumentName) -> Result<Instrument, InfraError>;

    /// 楽器名を更新する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(instrument))`: 更新後の行
    /// - `Ok(None)`: 該当する行がない
    async fn update(
        &self,
        id: InstrumentId,
        name: &InstrumentName,
    ) -> Result<Option<Instrument>, InfraError>;

    /// 楽器を削除する
    ///
    /// 該当する行を削除した場合は `true`、存在しなかった場合は `false` を返す。
    async fn delete(&self, id: InstrumentId) -> Result<bool, InfraError>;
}

#[derive(Debug, sqlx::FromRow)]
struct InstrumentRow {
    id:   i32,
    name: String,
}

impl TryFrom<InstrumentRow> for Instrument {
    type Error = InfraError;

    fn try_from(row: InstrumentRow) -> Result<Self, Self::Error> {
        let name = InstrumentName::new(row.name)
            .map_err(|e| InfraError::unexpected(format!("instruments.id={}: {e}", row.id)))?;
        Ok(Instrument::from_db(InstrumentId::new(row.id), name))
    }
}

/// PostgreSQL 実装の InstrumentRepository
#[derive(Debug, Clone)]
pub struct PostgresInstrumentRepository {
    pool: PgPool,
}

impl PostgresInstrumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InstrumentRepository for PostgresInstrumentRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Instrument>, InfraError> {
        let rows = sqlx::query_as::<_, InstrumentRow>(
            r#"
            SELECT id, name
            FROM instruments
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Instrument::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, name: &InstrumentName) -> Result<Instrument, InfraError> {
        let row = sqlx::query_as::<_, InstrumentRow>(
            r#"
            INSERT INTO instruments (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Instrument::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(
        &self,
        id: InstrumentId,
        name: &InstrumentName,
    ) -> Result<Option<Instrument>, InfraError> {
        let row = sqlx::query_as::<_, InstrumentRow>(
            r#"
            UPDATE instruments
            SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id.as_i32())
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Instrument::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: InstrumentId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM instruments
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
