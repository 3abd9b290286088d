//! 学习资料实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "study_materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_by: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub file_url: String,
    pub thumbnail: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::study_materials_candidates::Entity")]
    Assignments,
}

impl Related<super::study_materials_candidates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_study_material(self) -> crate::models::study_materials::entities::StudyMaterial {
        crate::models::study_materials::entities::StudyMaterial {
            id: self.id,
            created_by: self.created_by,
            title: self.title,
            description: self.description,
            file_url: self.file_url,
            thumbnail: self.thumbnail,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
