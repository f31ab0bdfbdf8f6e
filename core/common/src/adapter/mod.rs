//! アダプター（外界の I/O を trait で抽象化）
//!
//! ドライバは ports::outbound の trait 経由でのみ HTTP・時刻・ID に触れる。
//! 実装は標準実装（Std* / Reqwest*）やテスト用のモックを注入する。

pub mod reqwest_transport;
pub mod std_clock;
pub mod std_id_generator;

pub use reqwest_transport::ReqwestTransport;
pub use std_clock::StdClock;
pub use std_id_generator::StdIdGenerator;
