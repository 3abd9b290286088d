use serde::Deserialize;

use super::entities::{AnswerKey, ExamUpdate, NewExam, NewQuestion, SubmittedAnswer};
use crate::models::common::{ErrorCode, FieldError, fields, require};

fn parse_answer_key(value: String) -> Result<AnswerKey, FieldError> {
    value
        .parse::<AnswerKey>()
        .map_err(|msg| FieldError::new(ErrorCode::AnswerKeyInvalid, msg))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateExamRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub created_by: Option<i64>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub category_id: Option<i64>,
    #[serde(deserialize_with = "fields::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub description: Option<String>,
}

impl CreateExamRequest {
    pub fn into_new_exam(self) -> Result<NewExam, FieldError> {
        Ok(NewExam {
            created_by: require(self.created_by, "created_by")?,
            category_id: require(self.category_id, "category_id")?,
            title: require(self.title, "title")?,
            description: require(self.description, "description")?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateExamRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub exam_id: Option<i64>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub category_id: Option<i64>,
    #[serde(deserialize_with = "fields::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub description: Option<String>,
}

impl UpdateExamRequest {
    pub fn into_update(self) -> Result<(i64, ExamUpdate), FieldError> {
        let exam_id = require(self.exam_id, "exam_id")?;
        Ok((
            exam_id,
            ExamUpdate {
                category_id: require(self.category_id, "category_id")?,
                title: require(self.title, "title")?,
                description: require(self.description, "description")?,
            },
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExamIdRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub exam_id: Option<i64>,
}

/// 单道题目的字段，新增与修改共用
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuestionPayload {
    #[serde(alias = "question_text", deserialize_with = "fields::text")]
    pub question: Option<String>,
    #[serde(rename = "option_A", alias = "option_a", deserialize_with = "fields::text")]
    pub option_a: Option<String>,
    #[serde(rename = "option_B", alias = "option_b", deserialize_with = "fields::text")]
    pub option_b: Option<String>,
    #[serde(rename = "option_C", alias = "option_c", deserialize_with = "fields::text")]
    pub option_c: Option<String>,
    #[serde(rename = "option_D", alias = "option_d", deserialize_with = "fields::text")]
    pub option_d: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub answer_key: Option<String>,
}

impl QuestionPayload {
    pub fn into_new_question(self) -> Result<NewQuestion, FieldError> {
        let question_text = require(self.question, "question")?;
        let option_a = require(self.option_a, "option_A")?;
        let option_b = require(self.option_b, "option_B")?;
        let option_c = require(self.option_c, "option_C")?;
        let option_d = require(self.option_d, "option_D")?;
        let answer_key = parse_answer_key(require(self.answer_key, "answer_key")?)?;

        Ok(NewQuestion {
            question_text,
            option_a,
            option_b,
            option_c,
            option_d,
            answer_key,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddQuestionRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub exam_id: Option<i64>,
    #[serde(flatten)]
    pub question: QuestionPayload,
}

impl AddQuestionRequest {
    pub fn into_parts(self) -> Result<(i64, NewQuestion), FieldError> {
        let exam_id = require(self.exam_id, "exam_id")?;
        Ok((exam_id, self.question.into_new_question()?))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddQuestionsRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub exam_id: Option<i64>,
    pub questions: Option<Vec<QuestionPayload>>,
}

impl AddQuestionsRequest {
    /// 任意一道题不合法则整体拒绝，错误信息带上题目序号
    pub fn into_parts(self) -> Result<(i64, Vec<NewQuestion>), FieldError> {
        let exam_id = require(self.exam_id, "exam_id")?;
        let payloads = require(self.questions, "questions")?;
        if payloads.is_empty() {
            return Err(FieldError::new(
                ErrorCode::BadRequest,
                "Field 'questions' must contain at least one question",
            ));
        }

        let mut questions = Vec::with_capacity(payloads.len());
        for (index, payload) in payloads.into_iter().enumerate() {
            let question = payload.into_new_question().map_err(|e| {
                FieldError::new(e.code, format!("Question #{}: {}", index + 1, e.message))
            })?;
            questions.push(question);
        }
        Ok((exam_id, questions))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateQuestionRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub question_id: Option<i64>,
    #[serde(flatten)]
    pub question: QuestionPayload,
}

impl UpdateQuestionRequest {
    pub fn into_parts(self) -> Result<(i64, NewQuestion), FieldError> {
        let question_id = require(self.question_id, "question_id")?;
        Ok((question_id, self.question.into_new_question()?))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuestionIdRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub question_id: Option<i64>,
}

/// 分配考试、候选人查看考试详情共用
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateExamRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub exam_id: Option<i64>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub candidate_id: Option<i64>,
}

impl CandidateExamRequest {
    pub fn into_ids(self) -> Result<(i64, i64), FieldError> {
        let candidate_id = require(self.candidate_id, "candidate_id")?;
        let exam_id = require(self.exam_id, "exam_id")?;
        Ok((candidate_id, exam_id))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCategoryRequest {
    #[serde(alias = "category_name", deserialize_with = "fields::text")]
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnswerPayload {
    #[serde(deserialize_with = "fields::positive_int")]
    pub question_id: Option<i64>,
    #[serde(deserialize_with = "fields::text")]
    pub selected_option: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmitExamRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub candidate_id: Option<i64>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub exam_id: Option<i64>,
    pub answers: Option<Vec<AnswerPayload>>,
}

impl SubmitExamRequest {
    pub fn into_parts(self) -> Result<(i64, i64, Vec<SubmittedAnswer>), FieldError> {
        let candidate_id = require(self.candidate_id, "candidate_id")?;
        let exam_id = require(self.exam_id, "exam_id")?;
        let payloads = require(self.answers, "answers")?;

        let mut answers = Vec::with_capacity(payloads.len());
        for (index, payload) in payloads.into_iter().enumerate() {
            match (payload.question_id, payload.selected_option) {
                (Some(question_id), Some(selected_option)) => answers.push(SubmittedAnswer {
                    question_id,
                    selected_option,
                }),
                _ => {
                    return Err(FieldError::new(
                        ErrorCode::BadRequest,
                        format!(
                            "Answer #{} must include question_id and selected_option",
                            index + 1
                        ),
                    ));
                }
            }
        }
        Ok((candidate_id, exam_id, answers))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExamReportRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub candidate_id: Option<i64>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub exam_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question_json(key: &str) -> serde_json::Value {
        json!({
            "question": "Capital of Indonesia?",
            "option_A": "Jakarta",
            "option_B": "Bandung",
            "option_C": "Surabaya",
            "option_D": "Medan",
            "answer_key": key
        })
    }

    #[test]
    fn test_add_question_flattens_payload() {
        let mut body = question_json("a");
        body["exam_id"] = json!(2);
        let req: AddQuestionRequest = serde_json::from_value(body).expect("deserialize");
        let (exam_id, question) = req.into_parts().expect("valid");
        assert_eq!(exam_id, 2);
        assert_eq!(question.answer_key, AnswerKey::A);
        assert_eq!(question.option_d, "Medan");
    }

    #[test]
    fn test_invalid_answer_key_code() {
        let mut body = question_json("E");
        body["exam_id"] = json!(2);
        let req: AddQuestionRequest = serde_json::from_value(body).expect("deserialize");
        assert_eq!(req.into_parts().unwrap_err().code, ErrorCode::AnswerKeyInvalid);
    }

    #[test]
    fn test_bulk_reports_failing_index() {
        let mut broken = question_json("B");
        broken.as_object_mut().expect("object").remove("option_C");
        let req: AddQuestionsRequest = serde_json::from_value(json!({
            "exam_id": 1,
            "questions": [question_json("A"), broken]
        }))
        .expect("deserialize");
        let err = req.into_parts().unwrap_err();
        assert!(err.message.starts_with("Question #2"));
        assert!(err.message.contains("option_C"));
    }

    #[test]
    fn test_bulk_rejects_empty_list() {
        let req: AddQuestionsRequest =
            serde_json::from_value(json!({"exam_id": 1, "questions": []})).expect("json");
        assert!(req.into_parts().is_err());
    }

    #[test]
    fn test_submit_rejects_malformed_answer() {
        let req: SubmitExamRequest = serde_json::from_value(json!({
            "candidate_id": 1,
            "exam_id": 2,
            "answers": [{"question_id": 1, "selected_option": "A"}, {"question_id": 2}]
        }))
        .expect("deserialize");
        assert!(req.into_parts().unwrap_err().message.contains("#2"));
    }

    #[test]
    fn test_submit_accepts_empty_answers() {
        let req: SubmitExamRequest =
            serde_json::from_value(json!({"candidate_id": 1, "exam_id": 2, "answers": []}))
                .expect("deserialize");
        let (_, _, answers) = req.into_parts().expect("valid");
        assert!(answers.is_empty());
    }
}
