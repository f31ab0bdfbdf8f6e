//! ask コマンドの enum（Command Pattern）

/// ask の実行モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskCommand {
    /// ヘルプ表示
    Help,
    /// バージョン表示
    Version,
    /// 固定リクエストで補完を 1 回実行
    Complete,
}
