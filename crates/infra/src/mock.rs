//! # テスト用モックリポジトリ
//!
//! ユースケーステストとルーターテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! bancada-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use bancada_domain::{
    instrument::{Instrument, InstrumentId, InstrumentName},
    user::User,
};

use crate::{
    error::InfraError,
    repository::{InstrumentRepository, UserRepository},
};

// ===== MockInstrumentRepository =====

/// `SERIAL` 列と同じく 1 から採番するインメモリ実装
///
/// [`fail_with_database_error`](Self::fail_with_database_error) を呼ぶと
/// 以降の操作はすべて DB エラーを返す。
#[derive(Clone, Default)]
pub struct MockInstrumentRepository {
    state: Arc<Mutex<MockInstrumentState>>,
    fail:  Arc<AtomicBool>,
}

#[derive(Default)]
struct MockInstrumentState {
    instruments: Vec<Instrument>,
    last_id:     i32,
}

impl MockInstrumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 名前を指定して行を追加し、採番した楽器を返す
    pub fn add(&self, name: &str) -> Instrument {
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let instrument = Instrument::from_db(
            InstrumentId::new(state.last_id),
            InstrumentName::new(name).unwrap(),
        );
        state.instruments.push(instrument.clone());
        instrument
    }

    pub fn fail_with_database_error(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), InfraError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }
}

#[async_trait]
impl InstrumentRepository for MockInstrumentRepository {
    async fn find_all(&self) -> Result<Vec<Instrument>, InfraError> {
        self.check()?;
        let mut instruments = self.state.lock().unwrap().instruments.clone();
        instruments.sort_by_key(Instrument::id);
        Ok(instruments)
    }

    async fn insert(&self, name: &InstrumentName) -> Result<Instrument, InfraError> {
        self.check()?;
        Ok(self.add(name.as_str()))
    }

    async fn update(
        &self,
        id: InstrumentId,
        name: &InstrumentName,
    ) -> Result<Option<Instrument>, InfraError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let Some(slot) = state.instruments.iter_mut().find(|i| i.id() == id) else {
            return Ok(None);
        };
        *slot = Instrument::from_db(id, name.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: InstrumentId) -> Result<bool, InfraError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let before = state.instruments.len();
        state.instruments.retain(|i| i.id() != id);
        Ok(state.instruments.len() < before)
    }
}

// ===== MockUserRepository =====

#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
    fail:  Arc<AtomicBool>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn fail_with_database_error(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, InfraError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email() == email)
            .cloned())
    }
}
