//! 学习资料与分配记录存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::candidates::{Column as CandidateColumn, Entity as Candidates};
use crate::entity::study_materials::{
    ActiveModel, Column, Entity as StudyMaterials, Model as StudyMaterialModel,
};
use crate::entity::study_materials_candidates::{
    ActiveModel as AssignmentActiveModel, Column as AssignmentColumn,
    Entity as StudyMaterialsCandidates,
};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{RecruitError, Result};
use crate::models::study_materials::entities::{
    AssignedStudyMaterial, StudyAssignmentResult, StudyMaterial, StudyMaterialAssignee,
    StudyMaterialDetail, StudyMaterialInput, StudyMaterialListItem,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn create_study_material_impl(
        &self,
        created_by: i64,
        input: StudyMaterialInput,
    ) -> Result<StudyMaterial> {
        if self.get_user_by_id_impl(created_by).await?.is_none() {
            return Err(RecruitError::not_found(format!("User {created_by} not found")));
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            created_by: Set(created_by),
            title: Set(input.title),
            description: Set(input.description),
            file_url: Set(input.file_url),
            thumbnail: Set(input.thumbnail),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("创建学习资料失败: {e}")))?;

        Ok(result.into_study_material())
    }

    pub async fn list_study_materials_impl(&self) -> Result<Vec<StudyMaterialListItem>> {
        let materials = StudyMaterials::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询学习资料失败: {e}")))?;
        if materials.is_empty() {
            return Ok(Vec::new());
        }

        let creators = self.creator_names(&materials).await?;
        let material_ids: Vec<i64> = materials.iter().map(|m| m.id).collect();
        let counts: HashMap<i64, u64> = StudyMaterialsCandidates::find()
            .select_only()
            .column(AssignmentColumn::StudyId)
            .column_as(AssignmentColumn::Id.count(), "assigned_count")
            .filter(AssignmentColumn::StudyId.is_in(material_ids))
            .group_by(AssignmentColumn::StudyId)
            .into_tuple::<(i64, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("统计分配数量失败: {e}")))?
            .into_iter()
            .map(|(id, count)| (id, count.max(0) as u64))
            .collect();

        Ok(materials
            .into_iter()
            .map(|m| StudyMaterialListItem {
                created_by_name: creators.get(&m.created_by).cloned(),
                assigned_count: counts.get(&m.id).copied().unwrap_or(0),
                material: m.into_study_material(),
            })
            .collect())
    }

    /// 资料详情，附带已分配的候选人
    pub async fn get_study_material_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<StudyMaterialDetail>> {
        let Some(material) = StudyMaterials::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询学习资料失败: {e}")))?
        else {
            return Ok(None);
        };

        let creators = self.creator_names(std::slice::from_ref(&material)).await?;
        let assignments = StudyMaterialsCandidates::find()
            .filter(AssignmentColumn::StudyId.eq(id))
            .order_by_desc(AssignmentColumn::AccessDate)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询分配记录失败: {e}")))?;

        let candidate_ids: Vec<i64> = assignments.iter().map(|a| a.candidate_id).collect();
        let candidates = if candidate_ids.is_empty() {
            Vec::new()
        } else {
            Candidates::find()
                .filter(CandidateColumn::Id.is_in(candidate_ids))
                .find_also_related(Users)
                .all(&self.db)
                .await
                .map_err(|e| RecruitError::database_operation(format!("查询候选人失败: {e}")))?
        };
        let candidates: HashMap<i64, _> = candidates
            .into_iter()
            .map(|(candidate, user)| (candidate.id, (candidate, user)))
            .collect();

        let assigned_candidates = assignments
            .into_iter()
            .filter_map(|assignment| {
                let (candidate, user) = candidates.get(&assignment.candidate_id)?;
                Some(StudyMaterialAssignee {
                    candidate_id: candidate.id,
                    full_name: candidate.full_name.clone(),
                    email: candidate.email.clone(),
                    username: user.as_ref().map(|u| u.username.clone()),
                    access_date: crate::entity::to_datetime(assignment.access_date),
                })
            })
            .collect::<Vec<_>>();

        Ok(Some(StudyMaterialDetail {
            material: StudyMaterialListItem {
                created_by_name: creators.get(&material.created_by).cloned(),
                assigned_count: assigned_candidates.len() as u64,
                material: material.into_study_material(),
            },
            assigned_candidates,
        }))
    }

    pub async fn update_study_material_impl(
        &self,
        id: i64,
        input: StudyMaterialInput,
    ) -> Result<Option<StudyMaterial>> {
        let Some(existing) = StudyMaterials::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询学习资料失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.title = Set(input.title);
        model.description = Set(input.description);
        model.file_url = Set(input.file_url);
        model.thumbnail = Set(input.thumbnail);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("更新学习资料失败: {e}")))?;

        Ok(Some(result.into_study_material()))
    }

    /// 先删分配记录再删资料，同一事务
    pub async fn delete_study_material_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RecruitError::database_operation(format!("开启事务失败: {e}")))?;

        StudyMaterialsCandidates::delete_many()
            .filter(AssignmentColumn::StudyId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("删除分配记录失败: {e}")))?;

        let result = StudyMaterials::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("删除学习资料失败: {e}")))?;

        if result.rows_affected == 0 {
            // 未提交的事务在 drop 时回滚
            return Ok(false);
        }

        txn.commit()
            .await
            .map_err(|e| RecruitError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    /// 分配学习资料：已分配的刷新访问时间，未分配的新建
    pub async fn assign_study_materials_impl(
        &self,
        candidate_id: i64,
        study_ids: Vec<i64>,
    ) -> Result<StudyAssignmentResult> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RecruitError::database_operation(format!("开启事务失败: {e}")))?;

        if Candidates::find_by_id(candidate_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询候选人失败: {e}")))?
            .is_none()
        {
            return Err(RecruitError::not_found(format!(
                "Candidate {candidate_id} not found"
            )));
        }

        let found = StudyMaterials::find()
            .filter(Column::Id.is_in(study_ids.clone()))
            .count(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询学习资料失败: {e}")))?;
        if found != study_ids.len() as u64 {
            let existing: Vec<i64> = StudyMaterials::find()
                .select_only()
                .column(Column::Id)
                .filter(Column::Id.is_in(study_ids.clone()))
                .into_tuple()
                .all(&txn)
                .await
                .map_err(|e| {
                    RecruitError::database_operation(format!("查询学习资料失败: {e}"))
                })?;
            let missing: Vec<String> = study_ids
                .iter()
                .filter(|id| !existing.contains(id))
                .map(|id| id.to_string())
                .collect();
            return Err(RecruitError::not_found(format!(
                "Study materials not found: {}",
                missing.join(", ")
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let mut result = StudyAssignmentResult {
            candidate_id,
            ..Default::default()
        };

        for study_id in study_ids {
            let existing = StudyMaterialsCandidates::find()
                .filter(AssignmentColumn::StudyId.eq(study_id))
                .filter(AssignmentColumn::CandidateId.eq(candidate_id))
                .one(&txn)
                .await
                .map_err(|e| {
                    RecruitError::database_operation(format!("查询分配记录失败: {e}"))
                })?;

            match existing {
                Some(assignment) => {
                    let mut model: AssignmentActiveModel = assignment.into();
                    model.access_date = Set(now);
                    model.update(&txn).await.map_err(|e| {
                        RecruitError::database_operation(format!("更新分配记录失败: {e}"))
                    })?;
                    result.updated_study_ids.push(study_id);
                }
                None => {
                    AssignmentActiveModel {
                        study_id: Set(study_id),
                        candidate_id: Set(candidate_id),
                        access_date: Set(now),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await
                    .map_err(|e| {
                        RecruitError::database_operation(format!("创建分配记录失败: {e}"))
                    })?;
                    result.created_study_ids.push(study_id);
                }
            }
        }

        txn.commit()
            .await
            .map_err(|e| RecruitError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result)
    }

    /// 候选人已分配的学习资料，按分配时间倒序
    pub async fn list_candidate_study_materials_impl(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<AssignedStudyMaterial>> {
        self.assigned_materials(candidate_id, None).await
    }

    pub async fn get_candidate_study_material_impl(
        &self,
        candidate_id: i64,
        study_id: i64,
    ) -> Result<Option<AssignedStudyMaterial>> {
        Ok(self
            .assigned_materials(candidate_id, Some(study_id))
            .await?
            .pop())
    }

    async fn assigned_materials(
        &self,
        candidate_id: i64,
        study_id: Option<i64>,
    ) -> Result<Vec<AssignedStudyMaterial>> {
        let mut select = StudyMaterialsCandidates::find()
            .filter(AssignmentColumn::CandidateId.eq(candidate_id));
        if let Some(study_id) = study_id {
            select = select.filter(AssignmentColumn::StudyId.eq(study_id));
        }
        let rows = select
            .find_also_related(StudyMaterials)
            .order_by_desc(AssignmentColumn::AccessDate)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询分配记录失败: {e}")))?;

        let materials: Vec<(i64, StudyMaterialModel)> = rows
            .into_iter()
            .filter_map(|(assignment, material)| Some((assignment.access_date, material?)))
            .collect();
        let creators = self
            .creator_names(
                &materials
                    .iter()
                    .map(|(_, m)| m.clone())
                    .collect::<Vec<_>>(),
            )
            .await?;

        Ok(materials
            .into_iter()
            .map(|(access_date, material)| AssignedStudyMaterial {
                created_by_name: creators.get(&material.created_by).cloned(),
                access_date: crate::entity::to_datetime(access_date),
                material: material.into_study_material(),
            })
            .collect())
    }

    /// 创建者显示名：优先全名，其次用户名
    async fn creator_names(
        &self,
        materials: &[StudyMaterialModel],
    ) -> Result<HashMap<i64, String>> {
        let ids: Vec<i64> = materials.iter().map(|m| m.created_by).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(Users::find()
            .filter(UserColumn::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询用户失败: {e}")))?
            .into_iter()
            .map(|u| {
                let name = if u.full_name.trim().is_empty() {
                    u.username
                } else {
                    u.full_name
                };
                (u.id, name)
            })
            .collect())
    }
}
