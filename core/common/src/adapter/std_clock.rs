//! 標準時刻実装（chrono の Utc を委譲）

use crate::ports::outbound::Clock;

/// システム時刻を使う Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now_unix(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
