use serde::Deserialize;

use super::entities::NewInterviewSchedule;
use crate::models::common::{ErrorCode, FieldError, check, fields, require};
use crate::utils::validate::{validate_date, validate_time};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleInterviewRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub candidate_id: Option<i64>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub candidate_position_id: Option<i64>,
    #[serde(deserialize_with = "fields::text")]
    pub interview_date: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub interview_time: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub meeting_link: Option<String>,
    #[serde(deserialize_with = "fields::id_list")]
    pub admin_ids: Option<Vec<i64>>,
}

impl ScheduleInterviewRequest {
    /// 面试官 ID 去重，数量上限由服务层按配置检查
    pub fn into_new_schedule(self) -> Result<NewInterviewSchedule, FieldError> {
        let candidate_id = require(self.candidate_id, "candidate_id")?;
        let candidate_position_id = require(self.candidate_position_id, "candidate_position_id")?;
        let interview_date = require(self.interview_date, "interview_date")?;
        let interview_time = require(self.interview_time, "interview_time")?;

        check(validate_date(&interview_date), ErrorCode::BadRequest)?;
        check(validate_time(&interview_time), ErrorCode::BadRequest)?;

        let mut admin_ids = self.admin_ids.unwrap_or_default();
        let mut seen = std::collections::HashSet::new();
        admin_ids.retain(|id| seen.insert(*id));

        Ok(NewInterviewSchedule {
            candidate_id,
            candidate_position_id,
            interview_date,
            interview_time,
            notes: self.notes.unwrap_or_default(),
            meeting_link: self.meeting_link,
            admin_ids,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateInterviewRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub candidate_id: Option<i64>,
    #[serde(alias = "id", deserialize_with = "fields::positive_int")]
    pub schedule_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_admin_ids_are_deduplicated() {
        let req: ScheduleInterviewRequest = serde_json::from_value(json!({
            "candidate_id": 1,
            "candidate_position_id": 2,
            "interview_date": "2025-03-10",
            "interview_time": "09:30",
            "admin_ids": [5, 6, 5, 7, 6]
        }))
        .expect("deserialize");
        let schedule = req.into_new_schedule().expect("valid");
        assert_eq!(schedule.admin_ids, vec![5, 6, 7]);
        assert_eq!(schedule.notes, "");
    }

    #[test]
    fn test_time_format_is_checked() {
        let req: ScheduleInterviewRequest = serde_json::from_value(json!({
            "candidate_id": 1,
            "candidate_position_id": 2,
            "interview_date": "2025-03-10",
            "interview_time": "25:00"
        }))
        .expect("deserialize");
        assert!(req.into_new_schedule().is_err());
    }
}
