//! 面试安排实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "interview_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub candidate_id: i64,
    pub candidate_position_id: i64,
    pub interview_date: String,
    pub interview_time: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub meeting_link: Option<String>,
    // 最多三位面试官，按顺序占用
    pub admin_id_1: Option<i64>,
    pub admin_id_2: Option<i64>,
    pub admin_id_3: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::candidates::Entity",
        from = "Column::CandidateId",
        to = "super::candidates::Column::Id"
    )]
    Candidate,
    #[sea_orm(
        belongs_to = "super::candidate_positions::Entity",
        from = "Column::CandidatePositionId",
        to = "super::candidate_positions::Column::Id"
    )]
    Application,
}

impl Related<super::candidates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Candidate.def()
    }
}

impl Related<super::candidate_positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn admin_ids(&self) -> Vec<i64> {
        [self.admin_id_1, self.admin_id_2, self.admin_id_3]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn into_schedule(self) -> crate::models::interviews::entities::InterviewSchedule {
        let admin_ids = self.admin_ids();
        crate::models::interviews::entities::InterviewSchedule {
            id: self.id,
            candidate_id: self.candidate_id,
            candidate_position_id: self.candidate_position_id,
            interview_date: self.interview_date,
            interview_time: self.interview_time,
            notes: self.notes,
            meeting_link: self.meeting_link,
            admin_ids,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
