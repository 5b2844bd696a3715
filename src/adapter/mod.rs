//! Adapter Layer
//!
//! 外部システム（提出API, ファイルシステム）との統合

pub mod canvas;
pub mod config;
pub mod repositories;
