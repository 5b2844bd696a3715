//! # Upload Repository Trait
//!
//! ファイル本体のアップロードを抽象化

use async_trait::async_trait;

use crate::domain::entities::upload_request::UploadTarget;
use crate::domain::error::SubmitError;

/// アップロードリポジトリ
///
/// Notifierが返した事前認可済みURLへのアップロードを担当するリポジトリ。
/// URLそのものが認可を持つため追加の認証は行わない
#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// ファイル本体をマルチパートでアップロードする
    ///
    /// # Arguments
    ///
    /// * `target` - Notifierが返したアップロード先
    /// * `file_name` - 元のファイル名（マルチパートのfilenameとして送信）
    /// * `bytes` - ファイル本体
    ///
    /// # Returns
    ///
    /// サーバーが割り当てたファイルID
    ///
    /// # Errors
    ///
    /// ステータスが201以外の場合、またはレスポンスから
    /// ファイルIDが読み取れない場合にエラーを返す
    async fn upload(
        &self,
        target: &UploadTarget,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<u64, SubmitError>;
}
