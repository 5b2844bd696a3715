//! # Content Type Service
//!
//! 拡張子からコンテンツタイプを推測するサービス

use std::path::Path;

/// コンテンツタイプ推測サービス
///
/// ファイル名の拡張子からベストエフォートで推測し、
/// 判定できない場合は `application/octet-stream` にフォールバックする
pub struct ContentTypeService;

impl ContentTypeService {
    /// 拡張子が未知または欠落している場合のフォールバック
    pub const FALLBACK: &'static str = "application/octet-stream";

    /// ファイル名からコンテンツタイプを推測する
    ///
    /// # Arguments
    ///
    /// * `file_name` - 拡張子を含むファイル名
    ///
    /// # Returns
    ///
    /// 推測されたMIMEタイプ
    pub fn guess(file_name: &str) -> &'static str {
        match Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Some("txt") | Some("md") => "text/plain",
            Some("csv") => "text/csv",
            Some("html") | Some("htm") => "text/html",
            Some("json") => "application/json",
            Some("zip") => "application/zip",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            _ => Self::FALLBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_pdf() {
        assert_eq!(ContentTypeService::guess("report.pdf"), "application/pdf");
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        assert_eq!(ContentTypeService::guess("REPORT.PDF"), "application/pdf");
    }

    #[test]
    fn test_guess_image() {
        assert_eq!(ContentTypeService::guess("scan.jpeg"), "image/jpeg");
        assert_eq!(ContentTypeService::guess("scan.png"), "image/png");
    }

    #[test]
    fn test_guess_no_extension_falls_back() {
        assert_eq!(
            ContentTypeService::guess("feedback-notes"),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_guess_unknown_extension_falls_back() {
        assert_eq!(
            ContentTypeService::guess("archive.xyz"),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_guess_trailing_dot_falls_back() {
        assert_eq!(
            ContentTypeService::guess("report."),
            "application/octet-stream"
        );
    }
}
