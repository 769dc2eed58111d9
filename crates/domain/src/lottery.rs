//! # 抽選番号
//!
//! 1〜60 から重複なしで 6 個の番号を選び、昇順に並べて返す。
//!
//! 非復元抽出（`rand::seq::index::sample`）を使うため、
//! 棄却サンプリングのような再試行は発生しない。

use rand::Rng;

/// 抽選する番号の個数
pub const DRAW_SIZE: usize = 6;

/// 番号の最小値
pub const MIN_NUMBER: u8 = 1;

/// 番号の最大値
pub const MAX_NUMBER: u8 = 60;

/// 抽選結果
///
/// # 不変条件
///
/// - 要素数は [`DRAW_SIZE`]
/// - 各要素は [`MIN_NUMBER`]〜[`MAX_NUMBER`] の範囲内
/// - 要素は互いに異なり、昇順に並んでいる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotteryDraw(Vec<u8>);

impl LotteryDraw {
    /// 昇順に並んだ番号のスライス
    pub fn numbers(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

/// 番号を抽選する
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> LotteryDraw {
    let population = usize::from(MAX_NUMBER - MIN_NUMBER) + 1;

    let mut numbers: Vec<u8> = rand::seq::index::sample(rng, population, DRAW_SIZE)
        .into_iter()
        .map(|index| MIN_NUMBER + index as u8)
        .collect();
    numbers.sort_unstable();

    LotteryDraw(numbers)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2024)]
    #[case(u64::MAX)]
    fn test_draw_は6個の番号を返す(#[case] seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);

        let result = draw(&mut rng);

        assert_eq!(result.numbers().len(), DRAW_SIZE);
    }

    #[test]
    fn test_draw_の番号は重複せず範囲内で昇順() {
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..1_000 {
            let result = draw(&mut rng);
            let numbers = result.numbers();

            let unique: HashSet<&u8> = numbers.iter().collect();
            assert_eq!(unique.len(), DRAW_SIZE, "重複がないこと: {numbers:?}");
            assert!(
                numbers
                    .iter()
                    .all(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n)),
                "範囲内であること: {numbers:?}"
            );
            assert!(
                numbers.windows(2).all(|w| w[0] < w[1]),
                "昇順であること: {numbers:?}"
            );
        }
    }

    #[test]
    fn test_draw_は境界値の番号も選ばれうる() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = HashSet::new();

        for _ in 0..2_000 {
            seen.extend(draw(&mut rng).into_vec());
        }

        assert!(seen.contains(&MIN_NUMBER));
        assert!(seen.contains(&MAX_NUMBER));
    }
}
