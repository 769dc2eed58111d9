//! # ユーザー
//!
//! `users` テーブルの行を表すエンティティ。
//! このシステムはユーザーを作成・更新せず、ログイン時の照合にのみ読み取る。
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`User`] | ユーザー | パスワードハッシュを含む完全な行 |
//! | [`UserProfile`] | ユーザープロフィール | ログイン成功時に返す公開可能な項目 |

use chrono::NaiveDate;

use crate::password::PasswordHash;

/// ユーザーエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:            i32,
    full_name:     String,
    birth_date:    Option<NaiveDate>,
    sex:           Option<String>,
    email:         String,
    password_hash: PasswordHash,
}

impl User {
    /// DB の行から復元する
    pub fn from_db(
        id: i32,
        full_name: String,
        birth_date: Option<NaiveDate>,
        sex: Option<String>,
        email: String,
        password_hash: PasswordHash,
    ) -> Self {
        Self {
            id,
            full_name,
            birth_date,
            sex,
            email,
            password_hash,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// パスワードハッシュを除いたプロフィールに変換する
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            id:         self.id,
            full_name:  self.full_name,
            birth_date: self.birth_date,
            sex:        self.sex,
            email:      self.email,
        }
    }
}

/// ログイン成功時に返すユーザー情報
///
/// パスワードハッシュは含まない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id:         i32,
    pub full_name:  String,
    pub birth_date: Option<NaiveDate>,
    pub sex:        Option<String>,
    pub email:      String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_プロフィールにはパスワードハッシュ以外の項目が引き継がれる() {
        let birth_date = NaiveDate::from_ymd_opt(1990, 5, 20).unwrap();
        let user = User::from_db(
            7,
            "Maria Silva".to_string(),
            Some(birth_date),
            Some("F".to_string()),
            "maria@exemplo.com".to_string(),
            PasswordHash::new("$argon2id$v=19$hash"),
        );

        let profile = user.into_profile();

        assert_eq!(
            profile,
            UserProfile {
                id:         7,
                full_name:  "Maria Silva".to_string(),
                birth_date: Some(birth_date),
                sex:        Some("F".to_string()),
                email:      "maria@exemplo.com".to_string(),
            }
        );
    }
}
