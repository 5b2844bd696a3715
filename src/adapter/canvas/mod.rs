//! Canvas Adapter Modules
//!
//! 提出API統合のためのアダプターモジュール

pub mod client;
pub mod models;
