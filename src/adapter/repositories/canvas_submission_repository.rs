//! Canvas Submission Repository Implementation
//!
//! SubmissionRepositoryの提出API実装
//!
//! コース/課題/学生の3つ組にスコープされたエンドポイントへ、
//! Bearer認証付きでnotify（POST）とattach（PUT）を行う。

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::adapter::canvas::client::CanvasTransport;
use crate::adapter::canvas::models::{notify_form_fields, submission_update_body, NotifyResponse};
use crate::adapter::config::Config;
use crate::domain::entities::upload_request::{FileDescriptor, UploadRequest, UploadTarget};
use crate::domain::error::SubmitError;
use crate::domain::repositories::submission_repository::SubmissionRepository;

/// 提出APIリポジトリ
pub struct CanvasSubmissionRepository {
    transport: Arc<dyn CanvasTransport>,
    api_base_url: String,
    access_token: String,
}

impl CanvasSubmissionRepository {
    /// 新しいリポジトリを作成
    pub fn new(transport: Arc<dyn CanvasTransport>, config: &Config) -> Self {
        Self {
            transport,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        }
    }

    /// 学生の提出エンドポイントのURL
    fn submission_url(&self, request: &UploadRequest) -> String {
        format!(
            "{}/api/v1/courses/{}/assignments/{}/submissions/{}",
            self.api_base_url, request.course_id, request.assignment_id, request.student_id
        )
    }
}

#[async_trait]
impl SubmissionRepository for CanvasSubmissionRepository {
    async fn request_upload_slot(
        &self,
        request: &UploadRequest,
        file: &FileDescriptor,
    ) -> Result<UploadTarget, SubmitError> {
        let url = format!("{}/comments/files", self.submission_url(request));

        let response = self
            .transport
            .post_form(&url, &self.access_token, notify_form_fields(file))
            .await?;

        if response.status != 200 {
            warn!(
                "Notify returned status {} for student {}: {}",
                response.status, request.student_id, response.body
            );
            return Err(SubmitError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            });
        }

        let parsed: NotifyResponse =
            serde_json::from_str(&response.body).map_err(|e| SubmitError::MalformedResponse {
                reason: e.to_string(),
            })?;

        parsed.into_target()
    }

    async fn attach_file(
        &self,
        request: &UploadRequest,
        file_id: u64,
    ) -> Result<(), SubmitError> {
        let url = self.submission_url(request);

        let response = self
            .transport
            .put_json(&url, &self.access_token, submission_update_body(file_id))
            .await?;

        if response.status != 200 {
            warn!(
                "Submission update returned status {} for student {}: {}",
                response.status, request.student_id, response.body
            );
            return Err(SubmitError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::canvas::client::{ApiResponse, MockCanvasTransport};

    fn test_config() -> Config {
        Config {
            api_base_url: "https://canvas.example.com/".to_string(),
            access_token: "token-123".to_string(),
            course_id: "8195723".to_string(),
            request_timeout_secs: 30,
        }
    }

    fn test_request() -> UploadRequest {
        UploadRequest::new(
            "8195723".to_string(),
            "100".to_string(),
            "55".to_string(),
            "/tmp/report.pdf".to_string(),
        )
    }

    fn test_descriptor() -> FileDescriptor {
        FileDescriptor::new(
            "report.pdf".to_string(),
            2048,
            "application/pdf".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_notify_posts_descriptor_to_comments_files_endpoint() {
        let mut transport = MockCanvasTransport::new();
        transport
            .expect_post_form()
            .withf(|url, token, fields| {
                url == "https://canvas.example.com/api/v1/courses/8195723/assignments/100/submissions/55/comments/files"
                    && token == "token-123"
                    && fields.contains(&("name".to_string(), "report.pdf".to_string()))
                    && fields.contains(&("size".to_string(), "2048".to_string()))
                    && fields
                        .contains(&("content_type".to_string(), "application/pdf".to_string()))
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(ApiResponse {
                    status: 200,
                    body: r#"{"upload_url":"https://uploads.example.com/slot/1","upload_params":{"file_param":"file"}}"#
                        .to_string(),
                })
            });

        let repo = CanvasSubmissionRepository::new(Arc::new(transport), &test_config());
        let target = repo
            .request_upload_slot(&test_request(), &test_descriptor())
            .await
            .unwrap();

        assert_eq!(target.upload_url, "https://uploads.example.com/slot/1");
        assert_eq!(target.file_param, "file");
    }

    #[tokio::test]
    async fn test_notify_non_200_is_error() {
        let mut transport = MockCanvasTransport::new();
        transport.expect_post_form().times(1).returning(|_, _, _| {
            Ok(ApiResponse {
                status: 403,
                body: "{\"errors\":\"forbidden\"}".to_string(),
            })
        });

        let repo = CanvasSubmissionRepository::new(Arc::new(transport), &test_config());
        let result = repo
            .request_upload_slot(&test_request(), &test_descriptor())
            .await;

        match result {
            Err(SubmitError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, 403);
                assert!(body.contains("forbidden"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_notify_malformed_body_is_error() {
        let mut transport = MockCanvasTransport::new();
        transport.expect_post_form().times(1).returning(|_, _, _| {
            Ok(ApiResponse {
                status: 200,
                body: "<html>not json</html>".to_string(),
            })
        });

        let repo = CanvasSubmissionRepository::new(Arc::new(transport), &test_config());
        let result = repo
            .request_upload_slot(&test_request(), &test_descriptor())
            .await;

        assert!(matches!(
            result,
            Err(SubmitError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_attach_puts_nested_file_ids() {
        let mut transport = MockCanvasTransport::new();
        transport
            .expect_put_json()
            .withf(|url, token, body| {
                url == "https://canvas.example.com/api/v1/courses/8195723/assignments/100/submissions/55"
                    && token == "token-123"
                    && body["submission_type"] == "online_upload"
                    && body["comment"]["file_ids"] == serde_json::json!([[314_159]])
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(ApiResponse {
                    status: 200,
                    body: "{}".to_string(),
                })
            });

        let repo = CanvasSubmissionRepository::new(Arc::new(transport), &test_config());
        let result = repo.attach_file(&test_request(), 314_159).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_attach_non_200_is_error() {
        let mut transport = MockCanvasTransport::new();
        transport.expect_put_json().times(1).returning(|_, _, _| {
            Ok(ApiResponse {
                status: 500,
                body: "internal error".to_string(),
            })
        });

        let repo = CanvasSubmissionRepository::new(Arc::new(transport), &test_config());
        let result = repo.attach_file(&test_request(), 1).await;

        assert!(matches!(
            result,
            Err(SubmitError::UnexpectedStatus { status: 500, .. })
        ));
    }
}
