//! # 数値比較
//!
//! 2 つの整数を比較し、大小関係とメッセージを返す。

/// 2 つの数が等しい場合のメッセージ
pub const EQUAL_MESSAGE: &str = "Os números são iguais";

/// 2 つの数が異なる場合のメッセージ
pub const DIFFERENT_MESSAGE: &str = "Os números são diferentes";

/// 比較結果
///
/// 引数の順序は `maior` / `menor` に影響しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub mensagem: &'static str,
    pub primeiro: i32,
    pub segundo:  i32,
    pub maior:    i32,
    pub menor:    i32,
}

/// 2 つの整数を比較する
pub fn compare(primeiro: i32, segundo: i32) -> ComparisonResult {
    let mensagem = if primeiro == segundo {
        EQUAL_MESSAGE
    } else {
        DIFFERENT_MESSAGE
    };

    ComparisonResult {
        mensagem,
        primeiro,
        segundo,
        maior: primeiro.max(segundo),
        menor: primeiro.min(segundo),
    }
}
