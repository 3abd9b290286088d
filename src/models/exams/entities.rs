use chrono::{DateTime, Utc};
use serde::Serialize;

// 考试实体
#[derive(Debug, Clone, Serialize)]
pub struct Exam {
    #[serde(rename = "exam_id")]
    pub id: i64,
    pub created_by: i64,
    pub category_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewExam {
    pub created_by: i64,
    pub category_id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ExamUpdate {
    pub category_id: i64,
    pub title: String,
    pub description: String,
}

// 正确答案，只允许 A/B/C/D
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::A => "A",
            AnswerKey::B => "B",
            AnswerKey::C => "C",
            AnswerKey::D => "D",
        }
    }
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnswerKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(AnswerKey::A),
            "B" => Ok(AnswerKey::B),
            "C" => Ok(AnswerKey::C),
            "D" => Ok(AnswerKey::D),
            _ => Err(format!("Invalid answer key: '{s}'. Must be one of A, B, C, D")),
        }
    }
}

// 题目（管理端可见答案）
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    #[serde(rename = "question_id")]
    pub id: i64,
    pub exam_id: i64,
    #[serde(rename = "question")]
    pub question_text: String,
    #[serde(rename = "option_A")]
    pub option_a: String,
    #[serde(rename = "option_B")]
    pub option_b: String,
    #[serde(rename = "option_C")]
    pub option_c: String,
    #[serde(rename = "option_D")]
    pub option_d: String,
    pub answer_key: AnswerKey,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 候选人看到的题目，不含答案
#[derive(Debug, Clone, Serialize)]
pub struct CandidateQuestion {
    pub question_id: i64,
    #[serde(rename = "question")]
    pub question_text: String,
    #[serde(rename = "option_A")]
    pub option_a: String,
    #[serde(rename = "option_B")]
    pub option_b: String,
    #[serde(rename = "option_C")]
    pub option_c: String,
    #[serde(rename = "option_D")]
    pub option_d: String,
}

impl From<Question> for CandidateQuestion {
    fn from(q: Question) -> Self {
        Self {
            question_id: q.id,
            question_text: q.question_text,
            option_a: q.option_a,
            option_b: q.option_b,
            option_c: q.option_c,
            option_d: q.option_d,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub answer_key: AnswerKey,
}

// 考试分类
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    #[serde(rename = "category_id")]
    pub id: i64,
    pub category: String,
}

/// 考试列表项：附带分类名、创建者与题目数量
#[derive(Debug, Clone, Serialize)]
pub struct ExamListItem {
    #[serde(flatten)]
    pub exam: Exam,
    pub category: Option<String>,
    pub creator_username: Option<String>,
    pub question_count: u64,
}

// 考试报告，每个候选人每场考试一份
#[derive(Debug, Clone, Serialize)]
pub struct ExamReport {
    #[serde(rename = "report_id")]
    pub id: i64,
    pub exam_id: i64,
    pub candidate_id: i64,
    pub score: f64,
    pub is_completed: bool,
    pub report_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 管理端考试详情中的报告，带候选人姓名与邮箱
#[derive(Debug, Clone, Serialize)]
pub struct ExamReportWithCandidate {
    #[serde(flatten)]
    pub report: ExamReport,
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExamDetail {
    #[serde(flatten)]
    pub exam: ExamListItem,
    pub questions: Vec<Question>,
    pub reports: Vec<ExamReportWithCandidate>,
    pub total_questions: usize,
    pub total_assigned: usize,
    pub total_completed: usize,
}

/// 候选人视角的考试报告，带考试标题与分类
#[derive(Debug, Clone, Serialize)]
pub struct CandidateExamReport {
    #[serde(flatten)]
    pub report: ExamReport,
    pub exam_title: String,
    pub exam_category: Option<String>,
}

/// 已完成考试的汇总
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ExamSummary {
    pub average_score: Option<f64>,
    pub total_exams: u64,
}

/// 分配给候选人的考试
#[derive(Debug, Clone, Serialize)]
pub struct AssignedExam {
    #[serde(flatten)]
    pub exam: Exam,
    pub category: Option<String>,
    pub question_count: u64,
    pub score: f64,
    pub is_completed: bool,
    pub report_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateExamDetail {
    pub exam: ExamListItem,
    pub questions: Vec<CandidateQuestion>,
    pub total_questions: usize,
    pub previous_attempts: Vec<ExamReport>,
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedAnswer {
    pub question_id: i64,
    pub selected_option: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExamResult {
    pub report_id: i64,
    pub candidate_id: i64,
    pub exam_id: i64,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score: f64,
    pub is_completed: bool,
    pub submission_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_key_parse() {
        assert_eq!("a".parse::<AnswerKey>(), Ok(AnswerKey::A));
        assert_eq!(" D ".parse::<AnswerKey>(), Ok(AnswerKey::D));
        assert!("E".parse::<AnswerKey>().is_err());
        assert!("AB".parse::<AnswerKey>().is_err());
    }

    #[test]
    fn test_candidate_question_hides_answer() {
        let question = Question {
            id: 9,
            exam_id: 1,
            question_text: "2 + 2?".into(),
            option_a: "3".into(),
            option_b: "4".into(),
            option_c: "5".into(),
            option_d: "22".into(),
            answer_key: AnswerKey::B,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(CandidateQuestion::from(question)).expect("json");
        assert!(value.get("answer_key").is_none());
        assert_eq!(value["option_B"], "4");
        assert_eq!(value["question_id"], 9);
    }
}
