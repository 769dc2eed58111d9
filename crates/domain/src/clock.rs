//! # Clock（時刻プロバイダ）
//!
//! 天気予報の日付や年齢計算で使う「今日」を差し替え可能にするための抽象化。
//! ハンドラから `Local::now()` を直接呼ばず、テストで固定日付を注入する。

use chrono::{DateTime, Local, NaiveDate, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// サーバーのローカルタイムゾーンにおける今日の日付
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定日付を返すテスト用実装
///
/// `today()` はタイムゾーンに依存せず、コンストラクタで渡した日付をそのまま返す。
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.today.and_time(chrono::NaiveTime::MIN).and_utc()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
