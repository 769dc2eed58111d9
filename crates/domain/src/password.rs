//! # パスワード
//!
//! ログイン時に扱うパスワード関連の値オブジェクト。
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`PlainPassword`] | 平文パスワード | ログインリクエストの入力値 |
//! | [`PasswordHash`] | パスワードハッシュ | `users.password_hash` に保存された PHC 文字列 |
//! | [`PasswordVerifyResult`] | 検証結果 | 照合の成否 |

use crate::REDACTED;

/// 平文パスワード
///
/// Debug 出力では値をマスクする。
#[derive(Clone)]
pub struct PlainPassword(String);

impl std::fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PlainPassword").field(&REDACTED).finish()
    }
}

impl PlainPassword {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// パスワードハッシュ（Argon2id の PHC 文字列）
///
/// ハッシュ値もログに残さないよう、Debug 出力ではマスクする。
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PasswordHash").field(&REDACTED).finish()
    }
}

impl PasswordHash {
    /// DB から読み込んだハッシュ文字列をラップする
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// パスワード検証結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordVerifyResult {
    Match,
    Mismatch,
}

impl PasswordVerifyResult {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

impl From<bool> for PasswordVerifyResult {
    fn from(matched: bool) -> Self {
        if matched { Self::Match } else { Self::Mismatch }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_値を文字列として取り出せる() {
        assert_eq!(PlainPassword::new("segredo123").as_str(), "segredo123");
        assert_eq!(
            PasswordHash::new("$argon2id$v=19$...").as_str(),
            "$argon2id$v=19$..."
        );
    }

    #[test]
    fn test_平文パスワードのdebug出力はマスクされる() {
        let debug = format!("{:?}", PlainPassword::new("segredo"));
        assert!(debug.contains(REDACTED));
        assert!(!debug.contains("segredo"));
    }

    #[test]
    fn test_パスワードハッシュのdebug出力はマスクされる() {
        let debug = format!("{:?}", PasswordHash::new("$argon2id$v=19$abc"));
        assert!(!debug.contains("argon2id"));
    }

    #[rstest]
    #[case(true, PasswordVerifyResult::Match)]
    #[case(false, PasswordVerifyResult::Mismatch)]
    fn test_boolから検証結果へ変換できる(
        #[case] matched: bool,
        #[case] expected: PasswordVerifyResult,
    ) {
        let result = PasswordVerifyResult::from(matched);
        assert_eq!(result, expected);
        assert_eq!(result.is_match(), matched);
    }
}
