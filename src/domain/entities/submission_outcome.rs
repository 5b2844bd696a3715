//! # Submission Outcome Entities
//!
//! 学生ごとの提出結果を表すバリューオブジェクト
//!
//! ワークフローは学生ごとに `NOTIFIED → UPLOADED → ATTACHED` と進み、
//! いずれかの段階で失敗するとその学生だけが早期終了する。
//! 結果はログ出力ではなく明示的なレコードとして収集する。

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::error::SubmitError;

/// 3ステップワークフローの段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    /// アップロード意図の宣言
    Notify,
    /// ファイル本体のアップロード
    Upload,
    /// 提出への添付
    Attach,
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowStage::Notify => "notify",
            WorkflowStage::Upload => "upload",
            WorkflowStage::Attach => "attach",
        };
        write!(f, "{}", name)
    }
}

/// 1人の学生の提出ステータス
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    /// 3ステップすべて完了し、ファイルが提出に添付された
    Attached { file_id: u64 },
    /// いずれかの段階で失敗した（後続の学生には影響しない）
    Failed { stage: WorkflowStage, reason: String },
}

/// 学生ごとの提出結果レコード
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub student_id: String,
    pub status: SubmissionStatus,
    pub finished_at: DateTime<Utc>,
}

impl SubmissionOutcome {
    /// 成功の結果レコードを作成
    pub fn attached(student_id: String, file_id: u64) -> Self {
        Self {
            student_id,
            status: SubmissionStatus::Attached { file_id },
            finished_at: Utc::now(),
        }
    }

    /// 失敗の結果レコードを作成
    ///
    /// # Arguments
    ///
    /// * `student_id` - 失敗した学生の識別子
    /// * `stage` - 失敗した段階
    /// * `error` - 失敗の原因
    pub fn failed(student_id: String, stage: WorkflowStage, error: &SubmitError) -> Self {
        Self {
            student_id,
            status: SubmissionStatus::Failed {
                stage,
                reason: error.to_string(),
            },
            finished_at: Utc::now(),
        }
    }

    /// 3ステップすべて完了したかどうか
    #[inline]
    pub fn is_attached(&self) -> bool {
        matches!(self.status, SubmissionStatus::Attached { .. })
    }
}

/// バッチ実行のサマリー
///
/// バッチ内の全学生の結果レコードを保持する
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub batch_id: String,
    pub outcomes: Vec<SubmissionOutcome>,
}

impl BatchSummary {
    /// 新しいサマリーを作成
    pub fn new(batch_id: String, outcomes: Vec<SubmissionOutcome>) -> Self {
        Self { batch_id, outcomes }
    }

    /// 添付まで完了した学生の数を返す
    pub fn attached_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_attached()).count()
    }

    /// いずれかの段階で失敗した学生の数を返す
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.attached_count()
    }

    /// バッチが完全に成功したかチェックします。
    ///
    /// # 戻り値
    ///
    /// 失敗数が0の場合に `true`
    ///
    /// # 例
    ///
    /// ```
    /// use gradepost::domain::entities::submission_outcome::{
    ///     BatchSummary, SubmissionOutcome, WorkflowStage,
    /// };
    /// use gradepost::domain::error::SubmitError;
    ///
    /// // 成功ケース
    /// let success = BatchSummary::new(
    ///     "batch-001".to_string(),
    ///     vec![SubmissionOutcome::attached("55".to_string(), 1234)],
    /// );
    /// assert!(success.is_success());
    ///
    /// // 部分的な失敗
    /// let error = SubmitError::UnexpectedStatus {
    ///     status: 403,
    ///     body: "forbidden".to_string(),
    /// };
    /// let partial = BatchSummary::new(
    ///     "batch-002".to_string(),
    ///     vec![
    ///         SubmissionOutcome::attached("55".to_string(), 1234),
    ///         SubmissionOutcome::failed("56".to_string(), WorkflowStage::Notify, &error),
    ///     ],
    /// );
    /// assert!(!partial.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// バッチ内の学生数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// バッチが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
