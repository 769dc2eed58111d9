//! # パスワード検証
//!
//! `users.password_hash` に保存された Argon2id の PHC 文字列と
//! 入力されたパスワードを照合する。
//!
//! 照合時のパラメータ（メモリ・反復回数・並列度）は PHC 文字列から読み取るため、
//! チェッカー側の既定値は検証結果に影響しない。

use argon2::{Argon2, PasswordVerifier as _, password_hash::PasswordHash as Argon2PasswordHash};
use bancada_domain::password::{PasswordHash, PasswordVerifyResult, PlainPassword};

use crate::InfraError;

/// ユーザーが存在しない場合の検証に使うダミーハッシュ
///
/// 実データと同じパラメータ（m=65536, t=1, p=1）の有効な Argon2id 形式。
pub const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=65536,t=1,p=1$AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// パスワード検証を担当するトレイト
pub trait PasswordChecker: Send + Sync {
    /// パスワードを検証する
    ///
    /// # Errors
    ///
    /// - 保存されたハッシュが PHC 形式として解釈できない場合
    fn verify(
        &self,
        password: &PlainPassword,
        hash: &PasswordHash,
    ) -> Result<PasswordVerifyResult, InfraError>;

    /// ダミーハッシュで検証を実行する（タイミング攻撃対策）
    ///
    /// ユーザーが存在しない場合も実際の検証と同等の時間を消費する。
    fn verify_dummy(&self, password: &PlainPassword) {
        let dummy_hash = PasswordHash::new(DUMMY_PASSWORD_HASH);
        let _ = self.verify(password, &dummy_hash);
    }
}

/// Argon2id によるパスワード検証の実装
#[derive(Default)]
pub struct Argon2PasswordChecker {
    argon2: Argon2<'static>,
}

impl Argon2PasswordChecker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordChecker for Argon2PasswordChecker {
    fn verify(
        &self,
        password: &PlainPassword,
        hash: &PasswordHash,
    ) -> Result<PasswordVerifyResult, InfraError> {
        let parsed = Argon2PasswordHash::new(hash.as_str())
            .map_err(|e| InfraError::unexpected(format!("不正なハッシュ形式: {e}")))?;

        let matched = self
            .argon2
            .verify_password(password.as_str().as_bytes(), &parsed)
            .is_ok();

        Ok(PasswordVerifyResult::from(matched))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // テスト用フィクスチャと同じハッシュ（password123）
    const TEST_HASH: &str = "$argon2id$v=19$m=65536,t=1,p=1$olntqw+EoVpwH4B1vUAI0A$5yCA1izLODgz8nQOInDGwbuQB/AS0sIQDwpmIilve5M";

    #[rstest]
    #[case("password123", PasswordVerifyResult::Match)]
    #[case("wrongpassword", PasswordVerifyResult::Mismatch)]
    #[case("", PasswordVerifyResult::Mismatch)]
    fn test_パスワードを照合できる(
        #[case] input: &str,
        #[case] expected: PasswordVerifyResult,
    ) {
        let checker = Argon2PasswordChecker::new();

        let result = checker
            .verify(&PlainPassword::new(input), &PasswordHash::new(TEST_HASH))
            .unwrap();

        assert_eq!(result, expected);
    }

    #[test]
    fn test_不正なハッシュ形式はエラー() {
        let checker = Argon2PasswordChecker::new();
        let password = PlainPassword::new("password123");
        let invalid_hash = PasswordHash::new("password123");

        let result = checker.verify(&password, &invalid_hash);

        assert!(result.is_err());
    }

    #[test]
    fn test_ダミーハッシュは有効な形式として解釈できる() {
        assert!(Argon2PasswordHash::new(DUMMY_PASSWORD_HASH).is_ok());
    }

    #[test]
    fn test_ダミーハッシュはどのパスワードとも一致しない() {
        let checker = Argon2PasswordChecker::new();

        let result = checker
            .verify(
                &PlainPassword::new("password123"),
                &PasswordHash::new(DUMMY_PASSWORD_HASH),
            )
            .unwrap();

        assert_eq!(result, PasswordVerifyResult::Mismatch);
    }
}
