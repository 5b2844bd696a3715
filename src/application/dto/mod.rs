//! # DTO
//!
//! Driver層からUse Caseへ渡すData Transfer Object

pub mod submit_job;
