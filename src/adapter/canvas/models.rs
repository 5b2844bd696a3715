//! Canvas Wire Models
//!
//! 3ステップワークフローの通信ペイロード型

use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::upload_request::{FileDescriptor, UploadTarget};
use crate::domain::error::SubmitError;

/// notify成功時（200）のレスポンス
#[derive(Debug, Deserialize)]
pub struct NotifyResponse {
    pub upload_url: Option<String>,
    #[serde(default)]
    pub upload_params: Option<UploadParams>,
}

/// notifyレスポンスの `upload_params` オブジェクト
#[derive(Debug, Default, Deserialize)]
pub struct UploadParams {
    pub file_param: Option<String>,
}

impl NotifyResponse {
    /// ドメインのUploadTargetへ変換する
    ///
    /// `upload_url` が欠けていればエラー、
    /// `upload_params.file_param` が欠けていれば "file" にフォールバックする
    pub fn into_target(self) -> Result<UploadTarget, SubmitError> {
        let upload_url = self.upload_url.ok_or(SubmitError::MissingField {
            field: "upload_url",
        })?;
        let file_param = self.upload_params.and_then(|params| params.file_param);

        Ok(UploadTarget::new(upload_url, file_param))
    }
}

/// upload成功時（201）のレスポンス
#[derive(Debug, Deserialize)]
pub struct UploadedFile {
    pub id: u64,
}

/// notifyのフォームボディを組み立てる
pub fn notify_form_fields(file: &FileDescriptor) -> Vec<(String, String)> {
    vec![
        ("name".to_string(), file.file_name.clone()),
        ("size".to_string(), file.size_bytes.to_string()),
        ("content_type".to_string(), file.content_type.clone()),
    ]
}

/// 提出更新のPUTボディを組み立てる
///
/// ファイルIDはコメント用の「1要素リストのリスト」として入れ子になる
pub fn submission_update_body(file_id: u64) -> serde_json::Value {
    json!({
        "submission_type": "online_upload",
        "comment": {
            "file_ids": [[file_id]]
        }
    })
}
