//! 职位实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "positions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub position_name: String,
    #[sea_orm(column_name = "type")]
    pub position_type: String,
    pub work: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::candidate_positions::Entity")]
    Applications,
}

impl Related<super::candidate_positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_position(self) -> crate::models::positions::entities::Position {
        crate::models::positions::entities::Position {
            id: self.id,
            position_name: self.position_name,
            position_type: self.position_type,
            work: self.work,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
