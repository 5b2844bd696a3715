//! HTTP Upload Repository Implementation
//!
//! UploadRepositoryのマルチパートHTTP実装
//!
//! アップロードURLはnotifyの時点で認可済みのため、認証ヘッダは付けない。
//! ステータスが201であることを確認してからボディをパースする。

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::adapter::canvas::client::CanvasTransport;
use crate::adapter::canvas::models::UploadedFile;
use crate::domain::entities::upload_request::UploadTarget;
use crate::domain::error::SubmitError;
use crate::domain::repositories::upload_repository::UploadRepository;

/// マルチパートアップロードリポジトリ
pub struct HttpUploadRepository {
    transport: Arc<dyn CanvasTransport>,
}

impl HttpUploadRepository {
    /// 新しいリポジトリを作成
    pub fn new(transport: Arc<dyn CanvasTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl UploadRepository for HttpUploadRepository {
    async fn upload(
        &self,
        target: &UploadTarget,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<u64, SubmitError> {
        let response = self
            .transport
            .post_multipart(&target.upload_url, &target.file_param, file_name, bytes)
            .await?;

        // 201以外のボディは信用できないため、先にステータスを確認する
        if response.status != 201 {
            warn!(
                "Upload returned status {}: {}",
                response.status, response.body
            );
            return Err(SubmitError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            });
        }

        let uploaded: UploadedFile =
            serde_json::from_str(&response.body).map_err(|e| SubmitError::MalformedResponse {
                reason: e.to_string(),
            })?;

        Ok(uploaded.id)
    }
}
