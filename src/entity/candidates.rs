//! 候选人实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "candidates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub full_name: Option<String>,
    pub age: i32,
    pub birthdate: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::candidate_positions::Entity")]
    Applications,
    #[sea_orm(has_many = "super::exam_reports::Entity")]
    ExamReports,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::candidate_positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl Related<super::exam_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamReports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_candidate(self) -> crate::models::candidates::entities::Candidate {
        use crate::models::candidates::entities::Candidate;

        Candidate {
            id: self.id,
            user_id: self.user_id,
            full_name: self.full_name,
            age: self.age,
            birthdate: self.birthdate,
            gender: self.gender,
            email: self.email,
            phone_number: self.phone_number,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
