//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **SubmitFileUseCase**: 1人の学生に対する notify → upload → attach
//! - **BatchSubmitUseCase**: 学生リストへの順次実行と失敗の隔離

pub mod batch_submit;
pub mod submit_file;
