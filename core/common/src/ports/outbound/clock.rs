//! 時刻取得 Outbound ポート
//!
//! レスポンスの `created` に使う。テストでは固定時刻を返す実装を渡す。

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在時刻を Unix 秒で返す
    fn now_unix(&self) -> i64;
}
