//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;
use std::time::Duration;

use crate::adapter::canvas::client::ReqwestTransport;
use crate::adapter::config::Config;
use crate::adapter::repositories::canvas_submission_repository::CanvasSubmissionRepository;
use crate::adapter::repositories::http_upload_repository::HttpUploadRepository;
use crate::adapter::repositories::local_file_repository::LocalFileRepository;
use crate::application::dto::submit_job::SubmitJob;
use crate::application::use_cases::batch_submit::BatchSubmitUseCase;
use crate::application::use_cases::submit_file::SubmitFileUseCase;
use crate::domain::entities::submission_outcome::SubmissionStatus;
use crate::domain::repositories::file_repository::FileRepository;

use super::cli::Args;

/// カンマ区切りの学生ID入力をリストに変換する
/// 空要素と前後の空白は取り除かれる
pub fn parse_student_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Submission Workflow
pub struct SubmissionWorkflow {
    config: Config,
}

impl SubmissionWorkflow {
    /// Create a new workflow instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the submission workflow
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting submission uploader...");
        info!("Dry run: {}", args.dry_run);

        // コースは設定ファイル由来、--course指定があればそちらを優先
        let course_id = args
            .course
            .clone()
            .unwrap_or_else(|| self.config.course_id.clone());

        println!("✓ Using configuration:");
        println!("  API base: {}", self.config.api_base_url);
        println!("  Course: {}", course_id);
        println!("  Assignment: {}", args.assignment);

        let student_ids = parse_student_ids(&args.students);
        if student_ids.is_empty() {
            println!("⚠ No student ids given. Exiting.");
            return Ok(());
        }
        println!("✓ Parsed {} student id(s)", student_ids.len());

        // ~/grades/report.pdf のような入力を許す
        let file_path = shellexpand::tilde(&args.file).to_string();

        let file_repository = Arc::new(LocalFileRepository::new());

        if args.dry_run {
            return Self::execute_dry_run(&file_repository, &student_ids, &file_path).await;
        }

        // 実トランスポートの構築はdry-runでない場合のみ
        let transport = Arc::new(ReqwestTransport::new(Duration::from_secs(
            self.config.request_timeout_secs,
        ))?);
        println!("✓ Created HTTP transport");

        let submission_repository = Arc::new(CanvasSubmissionRepository::new(
            transport.clone(),
            &self.config,
        ));
        let upload_repository = Arc::new(HttpUploadRepository::new(transport));

        let submit_use_case = Arc::new(SubmitFileUseCase::new(
            submission_repository,
            upload_repository,
            file_repository,
        ));
        let batch_use_case = BatchSubmitUseCase::new(submit_use_case);

        let job = SubmitJob::new(course_id, args.assignment.clone(), student_ids, file_path);
        let batch_id = uuid::Uuid::new_v4().to_string();

        let summary = batch_use_case.execute(&job, &batch_id).await;

        for outcome in &summary.outcomes {
            match &outcome.status {
                SubmissionStatus::Attached { file_id } => {
                    println!(
                        "✓ Student {}: file {} attached",
                        outcome.student_id, file_id
                    );
                }
                SubmissionStatus::Failed { stage, reason } => {
                    println!(
                        "✗ Student {}: {} failed: {}",
                        outcome.student_id, stage, reason
                    );
                }
            }
        }

        println!(
            "✓ Submitted {}/{} students ({} failed)",
            summary.attached_count(),
            summary.len(),
            summary.failed_count()
        );

        Ok(())
    }

    /// ネットワークを使わずに提出内容だけを表示する
    async fn execute_dry_run(
        file_repository: &Arc<LocalFileRepository>,
        student_ids: &[String],
        file_path: &str,
    ) -> Result<()> {
        match file_repository.describe(file_path).await {
            Ok(descriptor) => {
                println!("✓ Dry-run mode (not actually uploading)");
                println!(
                    "  File: {} ({} bytes, {})",
                    descriptor.file_name, descriptor.size_bytes, descriptor.content_type
                );
                println!("  Would submit to {} student(s):", student_ids.len());
                for student_id in student_ids {
                    println!("    - Student {}", student_id);
                }
            }
            Err(error) => {
                println!("⚠ Cannot read file {}: {}", file_path, error);
            }
        }

        Ok(())
    }
}
