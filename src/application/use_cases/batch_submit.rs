//! # Batch Submit Use Case
//!
//! 学生リストへの一括提出ユースケース
//!
//! 学生は厳密に1人ずつ順番に処理される。1人の失敗は結果レコードに
//! 閉じ込められ、残りの学生の処理は継続する（グローバルなロールバックはない）。

use std::sync::Arc;

use log::{info, warn};

use crate::application::dto::submit_job::SubmitJob;
use crate::application::use_cases::submit_file::SubmitFileUseCase;
use crate::domain::entities::submission_outcome::{BatchSummary, SubmissionStatus};
use crate::domain::entities::upload_request::UploadRequest;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::repositories::submission_repository::SubmissionRepository;
use crate::domain::repositories::upload_repository::UploadRepository;

/// 一括提出ユースケース
pub struct BatchSubmitUseCase<S, U, F>
where
    S: SubmissionRepository,
    U: UploadRepository,
    F: FileRepository,
{
    submit_use_case: Arc<SubmitFileUseCase<S, U, F>>,
}

impl<S, U, F> BatchSubmitUseCase<S, U, F>
where
    S: SubmissionRepository,
    U: UploadRepository,
    F: FileRepository,
{
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `submit_use_case` - 学生1人分の提出ユースケース
    pub fn new(submit_use_case: Arc<SubmitFileUseCase<S, U, F>>) -> Self {
        Self { submit_use_case }
    }

    /// ジョブ内の全学生に対してワークフローを実行する
    ///
    /// # Arguments
    ///
    /// * `job` - 提出ジョブ（コース/課題/学生リスト/ファイルパス）
    /// * `batch_id` - このバッチ実行の識別子
    ///
    /// # Returns
    ///
    /// 学生ごとの結果レコードを含むサマリー
    pub async fn execute(&self, job: &SubmitJob, batch_id: &str) -> BatchSummary {
        let mut outcomes = Vec::with_capacity(job.student_ids.len());

        for student_id in &job.student_ids {
            let request = UploadRequest::new(
                job.course_id.clone(),
                job.assignment_id.clone(),
                student_id.clone(),
                job.file_path.clone(),
            );

            let outcome = self.submit_use_case.execute(&request).await;

            match &outcome.status {
                SubmissionStatus::Attached { file_id } => {
                    info!(
                        "Student {}: file {} attached (batch {})",
                        student_id, file_id, batch_id
                    );
                }
                SubmissionStatus::Failed { stage, reason } => {
                    warn!(
                        "Student {}: {} failed (batch {}): {}",
                        student_id, stage, batch_id, reason
                    );
                }
            }

            outcomes.push(outcome);
        }

        BatchSummary::new(batch_id.to_string(), outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::entities::submission_outcome::WorkflowStage;
    use crate::domain::entities::upload_request::{FileDescriptor, UploadTarget};
    use crate::domain::error::SubmitError;

    /// 特定の学生のnotifyだけを失敗させるスタブ
    struct FailOneSubmissionRepository {
        fail_for_student: Option<String>,
        attached_students: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SubmissionRepository for FailOneSubmissionRepository {
        async fn request_upload_slot(
            &self,
            request: &UploadRequest,
            _file: &FileDescriptor,
        ) -> Result<UploadTarget, SubmitError> {
            if self.fail_for_student.as_deref() == Some(request.student_id.as_str()) {
                return Err(SubmitError::UnexpectedStatus {
                    status: 404,
                    body: "{\"errors\":\"submission not found\"}".to_string(),
                });
            }
            Ok(UploadTarget::new(
                "https://uploads.example.com/slot/1".to_string(),
                None,
            ))
        }

        async fn attach_file(
            &self,
            request: &UploadRequest,
            _file_id: u64,
        ) -> Result<(), SubmitError> {
            self.attached_students
                .lock()
                .unwrap()
                .push(request.student_id.clone());
            Ok(())
        }
    }

    struct StubUploadRepository;

    #[async_trait]
    impl UploadRepository for StubUploadRepository {
        async fn upload(
            &self,
            _target: &UploadTarget,
            _file_name: &str,
            _bytes: Vec<u8>,
        ) -> Result<u64, SubmitError> {
            Ok(42)
        }
    }

    struct StubFileRepository;

    #[async_trait]
    impl FileRepository for StubFileRepository {
        async fn describe(&self, _path: &str) -> Result<FileDescriptor, SubmitError> {
            Ok(FileDescriptor::new(
                "report.pdf".to_string(),
                2048,
                "application/pdf".to_string(),
            )
            .unwrap())
        }

        async fn read_bytes(&self, _path: &str) -> Result<Vec<u8>, SubmitError> {
            Ok(vec![1, 2, 3])
        }
    }

    fn build_use_case(
        fail_for_student: Option<&str>,
    ) -> (
        BatchSubmitUseCase<FailOneSubmissionRepository, StubUploadRepository, StubFileRepository>,
        Arc<FailOneSubmissionRepository>,
    ) {
        let submissions = Arc::new(FailOneSubmissionRepository {
            fail_for_student: fail_for_student.map(ToString::to_string),
            attached_students: Mutex::new(Vec::new()),
        });
        let submit = Arc::new(SubmitFileUseCase::new(
            submissions.clone(),
            Arc::new(StubUploadRepository),
            Arc::new(StubFileRepository),
        ));
        (BatchSubmitUseCase::new(submit), submissions)
    }

    fn test_job() -> SubmitJob {
        SubmitJob::new(
            "8195723".to_string(),
            "100".to_string(),
            vec!["55".to_string(), "56".to_string(), "57".to_string()],
            "/tmp/report.pdf".to_string(),
        )
    }

    #[tokio::test]
    async fn test_batch_all_students_succeed() {
        let (use_case, submissions) = build_use_case(None);

        let summary = use_case.execute(&test_job(), "batch-001").await;

        assert_eq!(summary.batch_id, "batch-001");
        assert_eq!(summary.len(), 3);
        assert!(summary.is_success());
        assert_eq!(
            *submissions.attached_students.lock().unwrap(),
            vec!["55", "56", "57"]
        );
    }

    #[tokio::test]
    async fn test_batch_isolates_single_failure() {
        // 2人目だけ失敗しても残りの学生は3ステップを完了すること
        let (use_case, submissions) = build_use_case(Some("56"));

        let summary = use_case.execute(&test_job(), "batch-002").await;

        assert_eq!(summary.len(), 3);
        assert_eq!(summary.attached_count(), 2);
        assert_eq!(summary.failed_count(), 1);

        assert!(summary.outcomes[0].is_attached());
        assert!(!summary.outcomes[1].is_attached());
        assert!(summary.outcomes[2].is_attached());

        match &summary.outcomes[1].status {
            SubmissionStatus::Failed { stage, reason } => {
                assert_eq!(*stage, WorkflowStage::Notify);
                assert!(reason.contains("404"));
            }
            other => panic!("expected failure for student 56, got {:?}", other),
        }

        // 失敗した学生はattachまで到達しない
        assert_eq!(
            *submissions.attached_students.lock().unwrap(),
            vec!["55", "57"]
        );
    }

    #[tokio::test]
    async fn test_batch_empty_student_list() {
        let (use_case, _submissions) = build_use_case(None);
        let job = SubmitJob::new(
            "8195723".to_string(),
            "100".to_string(),
            vec![],
            "/tmp/report.pdf".to_string(),
        );

        let summary = use_case.execute(&job, "batch-003").await;

        assert!(summary.is_empty());
        assert!(summary.is_success());
    }

    #[tokio::test]
    async fn test_batch_outcomes_preserve_student_order() {
        let (use_case, _submissions) = build_use_case(None);

        let summary = use_case.execute(&test_job(), "batch-004").await;

        let ids: Vec<&str> = summary
            .outcomes
            .iter()
            .map(|o| o.student_id.as_str())
            .collect();
        assert_eq!(ids, vec!["55", "56", "57"]);
    }
}
