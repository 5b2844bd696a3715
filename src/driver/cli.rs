//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// 提出ファイルをLMSの課題提出へアップロードするCLI
///
/// 学生IDが1つなら単一提出、カンマ区切りで複数ならバッチ提出
#[derive(Parser, Debug, Clone)]
#[command(name = "gradepost")]
#[command(about = "Upload a feedback file to LMS assignment submissions", long_about = None)]
pub struct Args {
    /// Assignment identifier
    #[arg(short, long)]
    pub assignment: String,

    /// Student identifier(s), comma-separated for batch submission
    #[arg(short, long)]
    pub students: String,

    /// Path of the file to submit
    #[arg(short, long)]
    pub file: String,

    /// Course identifier override (defaults to the configured course)
    #[arg(long)]
    pub course: Option<String>,

    /// Dry run mode - don't actually upload
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path
    #[arg(short, long, default_value = "./.gradepost/config.json")]
    pub config: String,
}
