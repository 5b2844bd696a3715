//! # Submit Error
//!
//! 3ステップワークフローの各ステップが返すエラー型
//!
//! 元実装はログ出力とnull値で失敗を伝えていたが、
//! ここでは明示的なタグ付きエラー値として表現する。

use thiserror::Error;

/// ステップ失敗のエラー型
///
/// HTTPステータス起因の失敗とローカル起因の失敗（読めないファイル、
/// 壊れたレスポンス、通信エラー）を区別する
#[derive(Debug, Error)]
pub enum SubmitError {
    /// サーバーが期待外のステータスコードを返した
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// 成功レスポンスに必須フィールドが欠けている
    #[error("response missing `{field}`")]
    MissingField { field: &'static str },

    /// レスポンスボディがパースできない
    #[error("malformed response body: {reason}")]
    MalformedResponse { reason: String },

    /// ローカルファイルが読み込めない
    #[error("file is not readable: {path}")]
    FileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 通信の失敗やその他の予期しない失敗
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
