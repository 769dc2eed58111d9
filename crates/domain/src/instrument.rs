//! # 楽器
//!
//! `instruments` テーブルの 1 行を表すエンティティ。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`InstrumentId`] | 楽器 ID | DB が採番する主キー |
//! | [`InstrumentName`] | 楽器名 | 前後の空白を除去した空でない文字列 |
//! | [`Instrument`] | 楽器 | ID と名前の組 |
//!
//! ## 不変条件
//!
//! - ID は DB が採番し、以後変更されない
//! - 名前は前後の空白を除去した状態で保持し、空にはならない

use derive_more::Display;

use crate::DomainError;

/// 楽器 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct InstrumentId(i32);

impl InstrumentId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// 楽器名
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct InstrumentName(String);

impl InstrumentName {
    /// 楽器名を作成する
    ///
    /// # エラー
    ///
    /// 空文字列または空白のみの場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation("name は必須です".to_string()));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 楽器エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    id:   InstrumentId,
    name: InstrumentName,
}

impl Instrument {
    /// DB の行から復元する
    pub fn from_db(id: InstrumentId, name: InstrumentName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> InstrumentId {
        self.id
    }

    pub fn name(&self) -> &InstrumentName {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Piano", "Piano")]
    #[case("  Violino  ", "Violino")]
    #[case("Flauta doce", "Flauta doce")]
    fn test_楽器名は前後の空白を除去して保持する(#[case] input: &str, #[case] expected: &str) {
        let name = InstrumentName::new(input).unwrap();
        assert_eq!(name.as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_空の楽器名はバリデーションエラー(#[case] input: &str) {
        assert_eq!(
            InstrumentName::new(input),
            Err(DomainError::Validation("name は必須です".to_string()))
        );
    }

    #[test]
    fn test_楽器idは数値として表示される() {
        assert_eq!(InstrumentId::new(42).to_string(), "42");
    }

    #[test]
    fn test_dbの行から楽器を復元できる() {
        let instrument = Instrument::from_db(
            InstrumentId::new(1),
            InstrumentName::new("Piano").unwrap(),
        );

        assert_eq!(instrument.id().as_i32(), 1);
        assert_eq!(instrument.name().as_str(), "Piano");
    }
}
