//! 职位、状态与考试分类这类字典表

use super::SeaOrmStorage;
use crate::entity::categories::{
    ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as Categories,
};
use crate::entity::positions::{
    ActiveModel as PositionActiveModel, Column as PositionColumn, Entity as Positions,
};
use crate::entity::status::{
    ActiveModel as StatusActiveModel, Column as StatusColumn, Entity as StatusEntity,
};
use crate::errors::{RecruitError, Result};
use crate::models::{
    exams::entities::Category,
    positions::entities::{Position, PositionInput},
    statuses::entities::Status,
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_positions_impl(&self) -> Result<Vec<Position>> {
        let rows = Positions::find()
            .order_by_asc(PositionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询职位列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_position()).collect())
    }

    pub async fn get_position_impl(&self, id: i64) -> Result<Option<Position>> {
        let result = Positions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询职位失败: {e}")))?;

        Ok(result.map(|m| m.into_position()))
    }

    pub async fn create_position_impl(&self, input: PositionInput) -> Result<Position> {
        let now = chrono::Utc::now().timestamp();
        let model = PositionActiveModel {
            position_name: Set(input.position_name),
            position_type: Set(input.position_type),
            work: Set(input.work),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("创建职位失败: {e}")))?;

        Ok(result.into_position())
    }

    pub async fn update_position_impl(
        &self,
        id: i64,
        input: PositionInput,
    ) -> Result<Option<Position>> {
        let Some(existing) = Positions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询职位失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: PositionActiveModel = existing.into();
        model.position_name = Set(input.position_name);
        model.position_type = Set(input.position_type);
        model.work = Set(input.work);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("更新职位失败: {e}")))?;

        Ok(Some(result.into_position()))
    }

    /// 删除职位，相关应聘记录随外键级联删除
    pub async fn delete_position_impl(&self, id: i64) -> Result<bool> {
        let result = Positions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("删除职位失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_statuses_impl(&self) -> Result<Vec<Status>> {
        let rows = StatusEntity::find()
            .order_by_asc(StatusColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询状态列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_status()).collect())
    }

    pub async fn get_status_impl(&self, id: i64) -> Result<Option<Status>> {
        let result = StatusEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询状态失败: {e}")))?;

        Ok(result.map(|m| m.into_status()))
    }

    pub async fn create_status_impl(&self, status_name: String) -> Result<Status> {
        let now = chrono::Utc::now().timestamp();
        let model = StatusActiveModel {
            status_name: Set(status_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("创建状态失败: {e}")))?;

        Ok(result.into_status())
    }

    pub async fn update_status_impl(&self, id: i64, status_name: String) -> Result<Option<Status>> {
        let Some(existing) = StatusEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询状态失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: StatusActiveModel = existing.into();
        model.status_name = Set(status_name);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("更新状态失败: {e}")))?;

        Ok(Some(result.into_status()))
    }

    /// 删除状态，引用它的应聘记录状态置空
    pub async fn delete_status_impl(&self, id: i64) -> Result<bool> {
        let result = StatusEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("删除状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_categories_impl(&self) -> Result<Vec<Category>> {
        let rows = Categories::find()
            .order_by_asc(CategoryColumn::Category)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试分类失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_category()).collect())
    }

    pub async fn create_category_impl(&self, category: String) -> Result<Category> {
        let model = CategoryActiveModel {
            category: Set(category),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("创建考试分类失败: {e}")))?;

        Ok(result.into_category())
    }
}
