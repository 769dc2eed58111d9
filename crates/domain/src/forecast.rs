//! # 天気予報
//!
//! ランダムな天気予報を生成する。永続化はしない。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`ForecastEntry`] | 予報 | 1 日分の予報（摂氏・華氏・概要） |
//!
//! 概要テキストは [`SUMMARIES`] の固定リストから選ぶ。
//! リストはプロセス起動後に変化しないため、並行リクエストから共有して読み取ってよい。

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use rand::{Rng, seq::IndexedRandom};

/// 1 回のリクエストで生成する予報の日数
pub const FORECAST_DAYS: u64 = 5;

/// 摂氏温度の範囲
pub const TEMPERATURE_C_RANGE: RangeInclusive<i32> = -20..=55;

/// 予報の概要テキスト
pub const SUMMARIES: [&str; 10] = [
    "Congelante",
    "Revigorante",
    "Frio",
    "Ameno",
    "Quente",
    "Agradável",
    "Calor",
    "Escalante",
    "Torrente",
    "Abrasador",
];

/// 1 日分の天気予報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastEntry {
    date:          NaiveDate,
    temperature_c: i32,
    summary:       &'static str,
}

impl ForecastEntry {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: &'static str) -> Self {
        Self {
            date,
            temperature_c,
            summary,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn temperature_c(&self) -> i32 {
        self.temperature_c
    }

    /// 華氏温度（`round(C * 9 / 5 + 32)`）
    pub fn temperature_f(&self) -> i32 {
        (f64::from(self.temperature_c) * 9.0 / 5.0 + 32.0).round() as i32
    }

    pub fn summary(&self) -> &'static str {
        self.summary
    }
}

/// `today` の翌日から [`FORECAST_DAYS`] 日分の予報を生成する
///
/// i 番目（1 始まり）の予報の日付は `today + i 日`。
/// 日付がカレンダーの上限を超える場合、その日以降は生成しない。
pub fn generate<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Vec<ForecastEntry> {
    (1..=FORECAST_DAYS)
        .map_while(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| {
            let temperature_c = rng.random_range(TEMPERATURE_C_RANGE);
            let summary = SUMMARIES.choose(&mut *rng).copied().unwrap_or(SUMMARIES[0]);
            ForecastEntry::new(date, temperature_c, summary)
        })
        .collect()
}
