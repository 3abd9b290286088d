//! 考试题目实体

use sea_orm::entity::prelude::*;
use tracing::warn;

use crate::models::exams::entities::AnswerKey;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub exam_id: i64,
    #[sea_orm(column_type = "Text")]
    pub question_text: String,
    #[sea_orm(column_type = "Text")]
    pub option_a: String,
    #[sea_orm(column_type = "Text")]
    pub option_b: String,
    #[sea_orm(column_type = "Text")]
    pub option_c: String,
    #[sea_orm(column_type = "Text")]
    pub option_d: String,
    pub answer_key: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exams::Entity",
        from = "Column::ExamId",
        to = "super::exams::Column::Id"
    )]
    Exam,
}

impl Related<super::exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 存储的答案无法识别时返回 None 并记录告警
    pub fn parsed_answer_key(&self) -> Option<AnswerKey> {
        let parsed = self.answer_key.parse::<AnswerKey>().ok();
        if parsed.is_none() {
            warn!(
                "Question {} has an invalid stored answer key {:?}",
                self.id, self.answer_key
            );
        }
        parsed
    }

    pub fn into_question(self) -> crate::models::exams::entities::Question {
        use crate::models::exams::entities::Question;

        let answer_key = self.parsed_answer_key().unwrap_or(AnswerKey::A);
        Question {
            id: self.id,
            exam_id: self.exam_id,
            question_text: self.question_text,
            option_a: self.option_a,
            option_b: self.option_b,
            option_c: self.option_c,
            option_d: self.option_d,
            // 仅用于展示，评分时脏数据的题目不计入
            answer_key,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
