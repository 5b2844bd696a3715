//! # File Repository Trait
//!
//! ローカルファイルの検査と読み込みを抽象化

use async_trait::async_trait;

use crate::domain::entities::upload_request::FileDescriptor;
use crate::domain::error::SubmitError;

/// ファイルリポジトリ
///
/// 提出ファイルの記述子導出と本体読み込みを担当するリポジトリ
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// ローカルファイルから記述子を導出する
    ///
    /// # Arguments
    ///
    /// * `path` - 読み取り可能なローカルファイルのパス
    ///
    /// # Returns
    ///
    /// ファイル名・バイトサイズ・コンテンツタイプの記述子
    ///
    /// # Errors
    ///
    /// ファイルが存在しないか読み取れない場合にエラーを返す
    async fn describe(&self, path: &str) -> Result<FileDescriptor, SubmitError>;

    /// ファイル本体を読み込む
    ///
    /// ファイルハンドルは呼び出しの間だけ保持され、
    /// 結果にかかわらず呼び出し後に解放される
    ///
    /// # Errors
    ///
    /// ファイルが読み取れない場合にエラーを返す
    async fn read_bytes(&self, path: &str) -> Result<Vec<u8>, SubmitError>;
}
