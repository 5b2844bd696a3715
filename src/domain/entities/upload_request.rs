//! # Upload Request Entities
//!
//! 提出アップロードのドメインエンティティ

use anyhow::Result;

/// 1人の学生に対するアップロード要求
///
/// コース・課題・学生の3つ組と提出ファイルのパスを保持する。
/// 識別子はすべて不透明な文字列として扱い、呼び出しごとに構築される
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub course_id: String,
    pub assignment_id: String,
    pub student_id: String,
    pub file_path: String,
}

impl UploadRequest {
    /// 新しいアップロード要求を作成
    pub fn new(
        course_id: String,
        assignment_id: String,
        student_id: String,
        file_path: String,
    ) -> Self {
        Self {
            course_id,
            assignment_id,
            student_id,
            file_path,
        }
    }
}

/// 提出ファイルの記述子
///
/// notify時にローカルファイルから導出される。
/// コンテンツタイプが判定できない場合は汎用バイナリ型にフォールバックする
#[derive(Debug, Clone, PartialEq)]
pub struct FileDescriptor {
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

impl FileDescriptor {
    /// 新しいファイル記述子を作成
    ///
    /// # Errors
    ///
    /// ファイル名が空の場合にエラーを返す
    pub fn new(file_name: String, size_bytes: u64, content_type: String) -> Result<Self> {
        if file_name.is_empty() {
            anyhow::bail!("file name cannot be empty");
        }

        Ok(Self {
            file_name,
            size_bytes,
            content_type,
        })
    }
}

/// アップロード先
///
/// Notifierが返すアップロードURLとフォームフィールド名。
/// Uploaderが即座に消費し、それ以降は保持されない
#[derive(Debug, Clone, PartialEq)]
pub struct UploadTarget {
    pub upload_url: String,
    pub file_param: String,
}

impl UploadTarget {
    /// サーバーが `upload_params.file_param` を省略した場合のフィールド名
    pub const DEFAULT_FILE_PARAM: &'static str = "file";

    /// 新しいアップロード先を作成
    ///
    /// # Arguments
    ///
    /// * `upload_url` - サーバーが発行した事前認可済みのアップロードURL
    /// * `file_param` - ファイル本体のフォームフィールド名（省略時は "file"）
    pub fn new(upload_url: String, file_param: Option<String>) -> Self {
        Self {
            upload_url,
            file_param: file_param
                .unwrap_or_else(|| Self::DEFAULT_FILE_PARAM.to_string()),
        }
    }
}
