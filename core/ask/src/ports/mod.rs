//! Ports & Adapters のポート定義
//!
//! - inbound: main/cli がアプリを呼び出す入り口
//! - outbound: アプリがレスポンスを外界へ書き出すための trait

pub mod inbound;
pub mod outbound;
