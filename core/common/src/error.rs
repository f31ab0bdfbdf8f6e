//! エラーハンドリング
//!
//! 失敗の種類ごとに sysexits 風の終了コードを持つ。main は `exit_code()` をそのままプロセスの終了コードに使う。

/// 終了コード: 引数・入力不正 (EX_USAGE)
pub const EXIT_USAGE: i32 = 64;
/// 終了コード: 不正なデータ (EX_DATAERR)
pub const EXIT_DATAERR: i32 = 65;
/// 終了コード: 接続先が利用不可 (EX_UNAVAILABLE)
pub const EXIT_UNAVAILABLE: i32 = 69;
/// 終了コード: 内部エラー (EX_SOFTWARE)
pub const EXIT_SOFTWARE: i32 = 70;
/// 終了コード: 入出力エラー (EX_IOERR)
pub const EXIT_IOERR: i32 = 74;

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（モデル ID が解釈できない、メッセージが空、CLI の使い方の誤り）
    #[error("{0}")]
    InvalidArgument(String),
    /// HTTP 通信の失敗（接続拒否・非 2xx・サーバが返したエラー）
    #[error("{0}")]
    Http(String),
    /// JSON のシリアライズ/パース失敗（不正なレスポンス）
    #[error("{0}")]
    Json(String),
    /// 標準出力などの I/O 失敗
    #[error("{0}")]
    Io(String),
    /// その他
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => EXIT_USAGE,
            Self::Json(_) => EXIT_DATAERR,
            Self::Http(_) => EXIT_UNAVAILABLE,
            Self::Io(_) => EXIT_IOERR,
            Self::System(_) => EXIT_SOFTWARE,
        }
    }

    /// 使い方の誤り（main で Usage を表示するか判定する）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
