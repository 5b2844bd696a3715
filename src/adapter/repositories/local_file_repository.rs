//! Local File Repository Implementation
//!
//! FileRepositoryのファイルシステム実装

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::upload_request::FileDescriptor;
use crate::domain::error::SubmitError;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::services::content_type::ContentTypeService;

/// ファイルシステムベースのファイルリポジトリ
pub struct LocalFileRepository;

impl LocalFileRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 記述子を導出する（同期処理）
    fn describe_sync(path: &str) -> Result<FileDescriptor, SubmitError> {
        let expanded = shellexpand::tilde(path);
        let path_buf = PathBuf::from(expanded.as_ref());

        let metadata = fs::metadata(&path_buf).map_err(|source| SubmitError::FileUnreadable {
            path: path.to_string(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(SubmitError::FileUnreadable {
                path: path.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "not a regular file",
                ),
            });
        }

        let file_name = path_buf
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        let content_type = ContentTypeService::guess(&file_name).to_string();

        FileDescriptor::new(file_name, metadata.len(), content_type).map_err(SubmitError::Other)
    }

    /// ファイル本体を読み込む（同期処理）
    ///
    /// ハンドルはこの関数のスコープに閉じ、結果にかかわらず解放される
    fn read_bytes_sync(path: &str) -> Result<Vec<u8>, SubmitError> {
        let expanded = shellexpand::tilde(path);

        fs::read(expanded.as_ref()).map_err(|source| SubmitError::FileUnreadable {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl FileRepository for LocalFileRepository {
    async fn describe(&self, path: &str) -> Result<FileDescriptor, SubmitError> {
        // 同期I/Oなので、tokio::task::spawn_blockingでラップ
        let path = path.to_string();
        tokio::task::spawn_blocking(move || Self::describe_sync(&path))
            .await
            .map_err(|e| SubmitError::Other(anyhow::anyhow!("Failed to spawn blocking task: {}", e)))?
    }

    async fn read_bytes(&self, path: &str) -> Result<Vec<u8>, SubmitError> {
        let path = path.to_string();
        tokio::task::spawn_blocking(move || Self::read_bytes_sync(&path))
            .await
            .map_err(|e| SubmitError::Other(anyhow::anyhow!("Failed to spawn blocking task: {}", e)))?
    }
}

impl Default for LocalFileRepository {
    fn default() -> Self {
        Self::new()
    }
}
