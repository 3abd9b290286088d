use super::SeaOrmStorage;
use crate::entity::prelude::{Exams, StudyMaterials};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{RecruitError, Result};
use crate::models::users::entities::{NewUser, User, UserRole, UserUpdate};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: NewUser) -> Result<User> {
        if self.get_user_by_username_impl(&req.username).await?.is_some() {
            return Err(RecruitError::conflict(format!(
                "Username '{}' already exists",
                req.username
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            username: Set(req.username),
            password: Set(req.password),
            full_name: Set(req.full_name),
            email: Set(req.email),
            role: Set(req.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 按角色列出用户
    pub async fn list_users_by_role_impl(&self, role: UserRole) -> Result<Vec<User>> {
        let users = Users::find()
            .filter(Column::Role.eq(role.as_str()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    /// 更新用户，改名时检查用户名是否被占用
    pub async fn update_user_impl(&self, id: i64, update: UserUpdate) -> Result<Option<User>> {
        let Some(existing) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询用户失败: {e}")))?
        else {
            return Ok(None);
        };

        if existing.username != update.username
            && let Some(other) = self.get_user_by_username_impl(&update.username).await?
            && other.id != id
        {
            return Err(RecruitError::conflict(format!(
                "Username '{}' already exists",
                update.username
            )));
        }

        let mut model: ActiveModel = existing.into();
        model.username = Set(update.username);
        model.full_name = Set(update.full_name);
        model.email = Set(update.email);
        model.role = Set(update.role.to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("更新用户失败: {e}")))?;

        Ok(Some(result.into_user()))
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        // 考试与学习资料挂在作者名下，先拒绝，避免连带成绩记录一起丢失
        let exams = Exams::find()
            .filter(crate::entity::exams::Column::CreatedBy.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("统计用户考试失败: {e}")))?;
        let materials = StudyMaterials::find()
            .filter(crate::entity::study_materials::Column::CreatedBy.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("统计用户学习资料失败: {e}")))?;
        if exams > 0 || materials > 0 {
            return Err(RecruitError::conflict(format!(
                "User still owns {exams} exam(s) and {materials} study material(s)"
            )));
        }

        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_users_by_role_impl(&self, role: UserRole) -> Result<u64> {
        Users::find()
            .filter(Column::Role.eq(role.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("统计用户数量失败: {e}")))
    }
}
