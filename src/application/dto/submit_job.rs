//! # Submit Job DTO
//!
//! 1回の提出ジョブを表すData Transfer Object

/// 提出ジョブ
///
/// 固定のコース/課題/ファイルと、対象の学生識別子リスト。
/// 学生が1人なら単一提出、複数ならバッチ提出として扱われる
#[derive(Debug, Clone)]
pub struct SubmitJob {
    /// コース識別子
    pub course_id: String,
    /// 課題識別子
    pub assignment_id: String,
    /// 対象の学生識別子（処理順に並ぶ）
    pub student_ids: Vec<String>,
    /// 提出するローカルファイルのパス
    pub file_path: String,
}

impl SubmitJob {
    /// 新しい提出ジョブを作成
    pub fn new(
        course_id: String,
        assignment_id: String,
        student_ids: Vec<String>,
        file_path: String,
    ) -> Self {
        Self {
            course_id,
            assignment_id,
            student_ids,
            file_path,
        }
    }
}
