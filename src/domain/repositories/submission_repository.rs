//! # Submission Repository Trait
//!
//! 提出APIへのアクセスを抽象化

use async_trait::async_trait;

use crate::domain::entities::upload_request::{FileDescriptor, UploadRequest, UploadTarget};
use crate::domain::error::SubmitError;

/// 提出リポジトリ
///
/// コース/課題/学生の3つ組に紐づくAPI呼び出し
/// （アップロード意図の宣言と提出への添付）を担当するリポジトリ
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// アップロード意図をサーバーへ宣言する
    ///
    /// # Arguments
    ///
    /// * `request` - コース/課題/学生を特定するアップロード要求
    /// * `file` - 宣言するファイルの記述子（名前・サイズ・コンテンツタイプ）
    ///
    /// # Returns
    ///
    /// サーバーが発行したアップロード先
    ///
    /// # Errors
    ///
    /// ステータスが200以外の場合、またはレスポンスに
    /// `upload_url` が欠けている場合にエラーを返す
    async fn request_upload_slot(
        &self,
        request: &UploadRequest,
        file: &FileDescriptor,
    ) -> Result<UploadTarget, SubmitError>;

    /// アップロード済みファイルを学生の提出へ添付する
    ///
    /// # Arguments
    ///
    /// * `request` - コース/課題/学生を特定するアップロード要求
    /// * `file_id` - アップロード時にサーバーが割り当てたファイルID
    ///
    /// # Errors
    ///
    /// ステータスが200以外の場合にエラーを返す
    async fn attach_file(
        &self,
        request: &UploadRequest,
        file_id: u64,
    ) -> Result<(), SubmitError>;
}
