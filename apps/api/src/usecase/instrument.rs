//! # 楽器ユースケース
//!
//! `instruments` テーブルの一覧・作成・更新・削除を扱う。

use std::sync::Arc;

use bancada_domain::{
    DomainError,
    instrument::{Instrument, InstrumentId, InstrumentName},
};
use bancada_infra::repository::InstrumentRepository;

use crate::error::ApiError;

const ENTITY_TYPE: &str = "Instrument";

/// 楽器ユースケースの実装
pub struct InstrumentUseCaseImpl {
    instrument_repository: Arc<dyn InstrumentRepository>,
}

impl InstrumentUseCaseImpl {
    pub fn new(instrument_repository: Arc<dyn InstrumentRepository>) -> Self {
        Self {
            instrument_repository,
        }
    }

    /// すべての楽器を ID 昇順で取得する
    pub async fn list_instruments(&self) -> Result<Vec<Instrument>, ApiError> {
        Ok(self.instrument_repository.find_all().await?)
    }

    /// 楽器を作成する
    ///
    /// 名前は前後の空白を除去して保存する。空の場合は `Validation`。
    pub async fn create_instrument(&self, name: Option<String>) -> Result<Instrument, ApiError> {
        let name = InstrumentName::new(name.unwrap_or_default())?;

        let instrument = self.instrument_repository.insert(&name).await?;
        tracing::info!(instrument.id = %instrument.id(), "楽器を作成しました");
        Ok(instrument)
    }

    /// 楽器名を更新する
    ///
    /// 対象が存在しない場合は `NotFound`。
    pub async fn update_instrument(
        &self,
        id: InstrumentId,
        name: Option<String>,
    ) -> Result<Instrument, ApiError> {
        let name = InstrumentName::new(name.unwrap_or_default())?;

        self.instrument_repository
            .update(id, &name)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// 楽器を削除する
    ///
    /// 対象が存在しない場合は `NotFound`。
    pub async fn delete_instrument(&self, id: InstrumentId) -> Result<(), ApiError> {
        if !self.instrument_repository.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(instrument.id = %id, "楽器を削除しました");
        Ok(())
    }
}

fn not_found(id: InstrumentId) -> ApiError {
    DomainError::NotFound {
        entity_type: ENTITY_TYPE,
        id:          id.to_string(),
    }
    .into()
}
