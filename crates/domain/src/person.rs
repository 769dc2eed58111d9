//! # 人物情報の検証
//!
//! 氏名・生年月日・メールアドレスを受け取り、年齢と成人判定、
//! 登録済みメールアドレスかどうかを返す。永続化はしない。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`PersonSubmission`] | 人物情報 | 検証対象の入力値 |
//! | [`PersonValidation`] | 検証結果 | 年齢・成人判定・メール登録有無 |
//! | [`EmailAllowList`] | 許可メールリスト | 起動時に一度だけ読み込む読み取り専用のリスト |
//!
//! ## 生年月日の書式
//!
//! 次の順に解釈を試み、最初に成功したものを採用する。
//!
//! 1. RFC 3339 のタイムスタンプ（`2000-01-01T10:00:00Z`）
//! 2. タイムゾーンなしのタイムスタンプ（`2000-01-01T10:00:00` または
//!    `2000-01-01 10:00:00`、小数秒可）
//! 3. `yyyy/MM/dd`
//! 4. `dd/MM/yyyy`
//! 5. `yyyy-MM-dd`
//! 6. `dd-MM-yyyy`

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::DomainError;

/// 成人とみなす年齢
pub const ADULT_AGE: u32 = 18;

/// 検証成功時のメッセージ
pub const SUCCESS_MESSAGE: &str = "Pessoa validada com sucesso";

/// 日付のみの書式（試行順）
const DATE_FORMATS: [&str; 4] = ["%Y/%m/%d", "%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y"];

/// タイムゾーンなしのタイムスタンプ書式（試行順）
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// 許可メールリストの既定値
pub const DEFAULT_ALLOWED_EMAILS: [&str; 5] = [
    "joao@exemplo.com",
    "maria@exemplo.com",
    "pedro@exemplo.com",
    "ana@exemplo.com",
    "carlos@exemplo.com",
];

/// 検証対象の人物情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSubmission {
    pub name:       String,
    pub birth_date: String,
    pub email:      String,
}

/// 人物情報の検証結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonValidation {
    pub message:     &'static str,
    pub name:        String,
    pub age:         u32,
    pub is_adult:    bool,
    pub email_found: bool,
}

/// 許可メールリスト
///
/// 比較は前後の空白を除去し、大文字小文字を区別せずに行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAllowList(HashSet<String>);

impl EmailAllowList {
    /// メールアドレスがリストに含まれるか
    pub fn contains(&self, email: &str) -> bool {
        self.0.contains(&normalize_email(email))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for EmailAllowList {
    fn default() -> Self {
        DEFAULT_ALLOWED_EMAILS.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for EmailAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|email| normalize_email(email.as_ref()))
                .filter(|email| !email.is_empty())
                .collect(),
        )
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 生年月日の文字列を日付として解釈する
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, DomainError> {
    let input = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.date_naive());
    }
    if let Some(timestamp) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return Ok(timestamp.date());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .ok_or_else(|| {
            DomainError::Validation(format!("birthDate を日付として解釈できません: {input}"))
        })
}

/// `today` 時点の満年齢
///
/// 生年月日が `today` より後の場合は `None`。
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(birth_date)
}

/// 人物情報を検証する
///
/// # エラー
///
/// - 氏名・生年月日・メールアドレスのいずれかが空（空白のみを含む）
/// - 生年月日をどの書式でも解釈できない
/// - 生年月日が `today` より後
pub fn validate(
    submission: &PersonSubmission,
    today: NaiveDate,
    allow_list: &EmailAllowList,
) -> Result<PersonValidation, DomainError> {
    let name = require("name", &submission.name)?;
    let birth_date = require("birthDate", &submission.birth_date)?;
    let email = require("email", &submission.email)?;

    let birth_date = parse_birth_date(birth_date)?;
    let age = age_on(birth_date, today).ok_or_else(|| {
        DomainError::Validation(format!("birthDate が未来の日付です: {birth_date}"))
    })?;

    Ok(PersonValidation {
        message: SUCCESS_MESSAGE,
        name: name.to_string(),
        age,
        is_adult: age >= ADULT_AGE,
        email_found: allow_list.contains(email),
    })
}

fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} は必須です")));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[fixture]
    fn allow_list() -> EmailAllowList {
        EmailAllowList::default()
    }

    fn submission(name: &str, birth_date: &str, email: &str) -> PersonSubmission {
        PersonSubmission {
            name:       name.to_string(),
            birth_date: birth_date.to_string(),
            email:      email.to_string(),
        }
    }

    #[rstest]
    #[case("2000-01-01T10:30:00Z", date(2000, 1, 1))]
    #[case("2000-01-01T23:30:00-03:00", date(2000, 1, 1))]
    #[case("2000-01-01T10:30:00", date(2000, 1, 1))]
    #[case("2000-01-01T10:30:00.123", date(2000, 1, 1))]
    #[case("2000-01-01 10:30:00", date(2000, 1, 1))]
    #[case("2000-01-01 10:30:00.5", date(2000, 1, 1))]
    #[case("2000/03/04", date(2000, 3, 4))]
    #[case("04/03/2000", date(2000, 3, 4))]
    #[case("2000-03-04", date(2000, 3, 4))]
    #[case("04-03-2000", date(2000, 3, 4))]
    #[case("  2000-03-04  ", date(2000, 3, 4))]
    fn test_生年月日は複数の書式で解釈できる(#[case] input: &str, #[case] expected: NaiveDate) {
        assert_eq!(parse_birth_date(input), Ok(expected));
    }

    #[rstest]
    #[case("amanhã")]
    #[case("31/02/2000")]
    #[case("2000-13-01")]
    #[case("20000101")]
    fn test_解釈できない生年月日はバリデーションエラー(#[case] input: &str) {
        assert!(matches!(
            parse_birth_date(input),
            Err(DomainError::Validation(_))
        ));
    }

    #[rstest]
    #[case(date(2000, 1, 1), date(2025, 6, 15), 25)]
    #[case(date(2000, 6, 15), date(2025, 6, 15), 25)]
    #[case(date(2000, 6, 16), date(2025, 6, 15), 24)]
    #[case(date(2000, 2, 29), date(2025, 2, 28), 24)]
    #[case(date(2025, 6, 15), date(2025, 6, 15), 0)]
    fn test_満年齢は誕生日を迎えていなければ1引く(
        #[case] birth_date: NaiveDate,
        #[case] today: NaiveDate,
        #[case] expected: u32,
    ) {
        assert_eq!(age_on(birth_date, today), Some(expected));
    }

    #[test]
    fn test_未来の生年月日は年齢を計算できない() {
        assert_eq!(age_on(date(2030, 1, 1), date(2025, 1, 1)), None);
    }

    #[rstest]
    fn test_2000年1月1日生まれは2025年に25歳で成人(allow_list: EmailAllowList) {
        // Given
        let input = submission("Ana", "2000-01-01", "ana@exemplo.com");

        // When
        let result = validate(&input, date(2025, 3, 10), &allow_list).unwrap();

        // Then
        assert_eq!(
            result,
            PersonValidation {
                message:     SUCCESS_MESSAGE,
                name:        "Ana".to_string(),
                age:         25,
                is_adult:    true,
                email_found: true,
            }
        );
    }

    #[rstest]
    #[case("2007-03-10", 18, true)]
    #[case("2007-03-11", 17, false)]
    fn test_成人判定は18歳以上(
        allow_list: EmailAllowList,
        #[case] birth_date: &str,
        #[case] expected_age: u32,
        #[case] expected_adult: bool,
    ) {
        let input = submission("Pedro", birth_date, "pedro@exemplo.com");

        let result = validate(&input, date(2025, 3, 10), &allow_list).unwrap();

        assert_eq!(result.age, expected_age);
        assert_eq!(result.is_adult, expected_adult);
    }

    #[rstest]
    #[case("MARIA@EXEMPLO.COM", true)]
    #[case("  maria@exemplo.com ", true)]
    #[case("maria@exemplo.com.br", false)]
    #[case("desconhecido@exemplo.com", false)]
    fn test_メールアドレスは大文字小文字を区別せず完全一致で照合する(
        allow_list: EmailAllowList,
        #[case] email: &str,
        #[case] expected: bool,
    ) {
        let input = submission("Maria", "1990-05-20", email);

        let result = validate(&input, date(2025, 3, 10), &allow_list).unwrap();

        assert_eq!(result.email_found, expected);
    }

    #[rstest]
    #[case(submission("", "2000-01-01", "ana@exemplo.com"), "name は必須です")]
    #[case(submission("Ana", "   ", "ana@exemplo.com"), "birthDate は必須です")]
    #[case(submission("Ana", "2000-01-01", ""), "email は必須です")]
    fn test_必須項目が空ならバリデーションエラー(
        allow_list: EmailAllowList,
        #[case] input: PersonSubmission,
        #[case] expected: &str,
    ) {
        let result = validate(&input, date(2025, 3, 10), &allow_list);

        assert_eq!(result, Err(DomainError::Validation(expected.to_string())));
    }

    #[rstest]
    fn test_未来の生年月日はバリデーションエラー(allow_list: EmailAllowList) {
        let input = submission("Ana", "2030-01-01", "ana@exemplo.com");

        let result = validate(&input, date(2025, 3, 10), &allow_list);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_許可メールリストは空要素を除外して正規化する() {
        let list: EmailAllowList = ["  A@B.com ", "", "c@d.com", "a@b.com"].into_iter().collect();

        assert_eq!(list.len(), 2);
        assert!(list.contains("a@b.com"));
        assert!(list.contains("C@D.COM"));
    }

    #[test]
    fn test_許可メールリストの既定値は5件() {
        assert_eq!(EmailAllowList::default().len(), DEFAULT_ALLOWED_EMAILS.len());
    }
}
