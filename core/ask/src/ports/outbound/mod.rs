//! Outbound ポート: アプリが外界（標準出力）を使うための trait

pub mod response_writer;

pub use response_writer::ResponseWriter;
