//! 面试安排存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::candidate_positions::{
    Column as ApplicationColumn, Entity as Applications, Model as ApplicationModel,
};
use crate::entity::candidates::Entity as Candidates;
use crate::entity::interview_schedules::{
    ActiveModel, Column, Entity as InterviewSchedules, Model as ScheduleModel,
};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{RecruitError, Result};
use crate::models::interviews::entities::{
    InterviewAdmin, InterviewDetail, InterviewSchedule, NewInterviewSchedule, ScheduleOutcome,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 安排面试：同一候选人同一应聘记录只保留一条安排，重复提交即改期
    pub async fn schedule_interview_impl(
        &self,
        req: NewInterviewSchedule,
    ) -> Result<(InterviewSchedule, ScheduleOutcome)> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RecruitError::database_operation(format!("开启事务失败: {e}")))?;

        if Candidates::find_by_id(req.candidate_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询候选人失败: {e}")))?
            .is_none()
        {
            return Err(RecruitError::not_found(format!(
                "Candidate {} not found",
                req.candidate_id
            )));
        }

        let application = Applications::find_by_id(req.candidate_position_id)
            .filter(ApplicationColumn::CandidateId.eq(req.candidate_id))
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询应聘记录失败: {e}")))?;
        if application.is_none() {
            return Err(RecruitError::not_found(format!(
                "Application {} not found for candidate {}",
                req.candidate_position_id, req.candidate_id
            )));
        }

        let existing = InterviewSchedules::find()
            .filter(Column::CandidateId.eq(req.candidate_id))
            .filter(Column::CandidatePositionId.eq(req.candidate_position_id))
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询面试安排失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();
        let mut admins = req.admin_ids.iter().copied();
        let (admin_1, admin_2, admin_3) = (admins.next(), admins.next(), admins.next());

        let (model, updated) = match existing {
            Some(schedule) => {
                let mut model: ActiveModel = schedule.into();
                model.interview_date = Set(req.interview_date);
                model.interview_time = Set(req.interview_time);
                model.notes = Set(req.notes);
                model.meeting_link = Set(req.meeting_link);
                model.admin_id_1 = Set(admin_1);
                model.admin_id_2 = Set(admin_2);
                model.admin_id_3 = Set(admin_3);
                model.updated_at = Set(now);
                let saved = model.update(&txn).await.map_err(|e| {
                    RecruitError::database_operation(format!("更新面试安排失败: {e}"))
                })?;
                (saved, true)
            }
            None => {
                let model = ActiveModel {
                    candidate_id: Set(req.candidate_id),
                    candidate_position_id: Set(req.candidate_position_id),
                    interview_date: Set(req.interview_date),
                    interview_time: Set(req.interview_time),
                    notes: Set(req.notes),
                    meeting_link: Set(req.meeting_link),
                    admin_id_1: Set(admin_1),
                    admin_id_2: Set(admin_2),
                    admin_id_3: Set(admin_3),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                let saved = model.insert(&txn).await.map_err(|e| {
                    RecruitError::database_operation(format!("创建面试安排失败: {e}"))
                })?;
                (saved, false)
            }
        };

        txn.commit()
            .await
            .map_err(|e| RecruitError::database_operation(format!("提交事务失败: {e}")))?;

        let outcome = ScheduleOutcome {
            schedule_id: model.id,
            updated,
        };
        Ok((model.into_schedule(), outcome))
    }

    /// 候选人的面试列表，日期倒序、同日按时间正序
    pub async fn list_candidate_interviews_impl(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<InterviewDetail>> {
        let schedules = InterviewSchedules::find()
            .filter(Column::CandidateId.eq(candidate_id))
            .order_by_desc(Column::InterviewDate)
            .order_by_asc(Column::InterviewTime)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询面试安排失败: {e}")))?;

        self.interview_details(schedules).await
    }

    pub async fn get_candidate_interview_impl(
        &self,
        candidate_id: i64,
        schedule_id: i64,
    ) -> Result<Option<InterviewDetail>> {
        let schedule = InterviewSchedules::find_by_id(schedule_id)
            .filter(Column::CandidateId.eq(candidate_id))
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询面试安排失败: {e}")))?;

        let Some(schedule) = schedule else {
            return Ok(None);
        };
        Ok(self.interview_details(vec![schedule]).await?.pop())
    }

    async fn interview_details(&self, schedules: Vec<ScheduleModel>) -> Result<Vec<InterviewDetail>> {
        if schedules.is_empty() {
            return Ok(Vec::new());
        }

        let application_ids: Vec<i64> = schedules.iter().map(|s| s.candidate_position_id).collect();
        let applications: Vec<ApplicationModel> = Applications::find()
            .filter(ApplicationColumn::Id.is_in(application_ids))
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询应聘记录失败: {e}")))?;
        let (positions, statuses) = self.lookup_names(&applications).await?;
        let applications: HashMap<i64, ApplicationModel> =
            applications.into_iter().map(|a| (a.id, a)).collect();

        let admin_ids: Vec<i64> = schedules.iter().flat_map(|s| s.admin_ids()).collect();
        let admins: HashMap<i64, InterviewAdmin> = if admin_ids.is_empty() {
            HashMap::new()
        } else {
            Users::find()
                .filter(UserColumn::Id.is_in(admin_ids))
                .all(&self.db)
                .await
                .map_err(|e| RecruitError::database_operation(format!("查询面试官失败: {e}")))?
                .into_iter()
                .map(|u| {
                    (
                        u.id,
                        InterviewAdmin {
                            id: u.id,
                            username: u.username,
                            full_name: u.full_name,
                        },
                    )
                })
                .collect()
        };

        Ok(schedules
            .into_iter()
            .map(|schedule| {
                let application = applications.get(&schedule.candidate_position_id);
                let position = application.and_then(|a| positions.get(&a.position_id));
                // 已删除的面试官账号直接跳过
                let interview_admins = schedule
                    .admin_ids()
                    .into_iter()
                    .filter_map(|id| admins.get(&id).cloned())
                    .collect();

                InterviewDetail {
                    position_id: application.map(|a| a.position_id),
                    position_name: position.map(|(name, _, _)| name.clone()),
                    position_type: position.map(|(_, kind, _)| kind.clone()),
                    work: position.map(|(_, _, work)| work.clone()),
                    date_of_application: application
                        .map(|a| crate::entity::to_datetime(a.date_of_application)),
                    status_name: application
                        .and_then(|a| a.status_id)
                        .and_then(|id| statuses.get(&id).cloned()),
                    admins: interview_admins,
                    schedule: schedule.into_schedule(),
                }
            })
            .collect())
    }
}
