//! # Submit File Use Case
//!
//! 1人の学生に対する提出ユースケース
//!
//! notify → upload → attach を順に実行し、途中で失敗した場合は
//! 失敗した段階をタグ付けした結果レコードを返す。
//! エラーは呼び出し元へ伝播させない（バッチ隔離の前提）。

use std::sync::Arc;

use log::{info, warn};

use crate::domain::entities::submission_outcome::{SubmissionOutcome, WorkflowStage};
use crate::domain::entities::upload_request::UploadRequest;
use crate::domain::error::SubmitError;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::repositories::submission_repository::SubmissionRepository;
use crate::domain::repositories::upload_repository::UploadRepository;

/// 提出ユースケース
///
/// 3ステップは必ずこの順で実行される。アップロード先や
/// ファイルIDが得られなかった時点でその学生のワークフローは終了する
pub struct SubmitFileUseCase<S, U, F>
where
    S: SubmissionRepository,
    U: UploadRepository,
    F: FileRepository,
{
    submission_repository: Arc<S>,
    upload_repository: Arc<U>,
    file_repository: Arc<F>,
}

impl<S, U, F> SubmitFileUseCase<S, U, F>
where
    S: SubmissionRepository,
    U: UploadRepository,
    F: FileRepository,
{
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `submission_repository` - 提出リポジトリ（notify / attach）
    /// * `upload_repository` - アップロードリポジトリ
    /// * `file_repository` - ファイルリポジトリ
    pub fn new(
        submission_repository: Arc<S>,
        upload_repository: Arc<U>,
        file_repository: Arc<F>,
    ) -> Self {
        Self {
            submission_repository,
            upload_repository,
            file_repository,
        }
    }

    /// 1人の学生のワークフローを実行する
    ///
    /// # Arguments
    ///
    /// * `request` - コース/課題/学生/ファイルパスのアップロード要求
    ///
    /// # Returns
    ///
    /// 成功・失敗を含む結果レコード（エラーは伝播しない）
    pub async fn execute(&self, request: &UploadRequest) -> SubmissionOutcome {
        // 記述子はnotify時にローカルファイルから導出する
        let descriptor = match self.file_repository.describe(&request.file_path).await {
            Ok(descriptor) => descriptor,
            Err(error) => return fail(request, WorkflowStage::Notify, error),
        };

        let target = match self
            .submission_repository
            .request_upload_slot(request, &descriptor)
            .await
        {
            Ok(target) => target,
            Err(error) => return fail(request, WorkflowStage::Notify, error),
        };
        info!(
            "Notified upload of {} ({} bytes) for student {}",
            descriptor.file_name, descriptor.size_bytes, request.student_id
        );

        let bytes = match self.file_repository.read_bytes(&request.file_path).await {
            Ok(bytes) => bytes,
            Err(error) => return fail(request, WorkflowStage::Upload, error),
        };

        let file_id = match self
            .upload_repository
            .upload(&target, &descriptor.file_name, bytes)
            .await
        {
            Ok(file_id) => file_id,
            Err(error) => return fail(request, WorkflowStage::Upload, error),
        };
        info!(
            "Uploaded {} as file {} for student {}",
            descriptor.file_name, file_id, request.student_id
        );

        if let Err(error) = self.submission_repository.attach_file(request, file_id).await {
            return fail(request, WorkflowStage::Attach, error);
        }
        info!(
            "Attached file {} to submission of student {}",
            file_id, request.student_id
        );

        SubmissionOutcome::attached(request.student_id.clone(), file_id)
    }
}

/// 失敗した段階をログに残し、結果レコードへ変換する
fn fail(request: &UploadRequest, stage: WorkflowStage, error: SubmitError) -> SubmissionOutcome {
    warn!(
        "{} failed for student {}: {}",
        stage, request.student_id, error
    );
    SubmissionOutcome::failed(request.student_id.clone(), stage, &error)
}
