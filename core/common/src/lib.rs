//! 補完ルーティング共通ライブラリ
//!
//! `ask` コマンドから使われる。モデル識別子でプロバイダを選び、ローカル推論サーバへ 1 回だけ補完を要求する。

/// エラーハンドリング
pub mod error;

/// ドメイン型
pub mod domain;

/// 補完ルーティングとプロバイダ
pub mod llm;

/// Outbound ポート
pub mod ports;

/// 標準アダプター
pub mod adapter;

/// ログ初期化
pub mod logging;
