use serde::Deserialize;

use super::entities::{ApplicationStatus, NewCandidate};
use crate::models::common::{ErrorCode, FieldError, check, fields, require};
use crate::utils::validate::{validate_date, validate_email, validate_phone_number};

// 新增候选人
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCandidateRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub user_id: Option<i64>,
    #[serde(deserialize_with = "fields::text")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub age: Option<i64>,
    #[serde(deserialize_with = "fields::text")]
    pub birthdate: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub phone_number: Option<String>,
}

impl CreateCandidateRequest {
    pub fn into_new_candidate(self) -> Result<NewCandidate, FieldError> {
        let user_id = require(self.user_id, "user_id")?;
        let age = require(self.age, "age")?;
        let birthdate = require(self.birthdate, "birthdate")?;
        let gender = require(self.gender, "gender")?;
        let email = require(self.email, "email")?;
        let phone_number = require(self.phone_number, "phone_number")?;

        let age = i32::try_from(age)
            .ok()
            .filter(|age| *age <= 150)
            .ok_or_else(|| FieldError::new(ErrorCode::BadRequest, "Age is out of range"))?;
        check(validate_date(&birthdate), ErrorCode::BadRequest)?;
        check(validate_email(&email), ErrorCode::UserEmailInvalid)?;
        check(validate_phone_number(&phone_number), ErrorCode::BadRequest)?;

        Ok(NewCandidate {
            user_id,
            full_name: self.full_name,
            age,
            birthdate,
            gender,
            email,
            phone_number,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateIdRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub candidate_id: Option<i64>,
}

// update_status 与 assign 共用
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationStatusRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub candidate_id: Option<i64>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub position_id: Option<i64>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub status_id: Option<i64>,
}

impl ApplicationStatusRequest {
    pub fn into_status(self) -> Result<ApplicationStatus, FieldError> {
        Ok(ApplicationStatus {
            candidate_id: require(self.candidate_id, "candidate_id")?,
            position_id: require(self.position_id, "position_id")?,
            status_id: require(self.status_id, "status_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_request() -> serde_json::Value {
        json!({
            "user_id": 3,
            "age": "27",
            "birthdate": "1998-04-12",
            "gender": "female",
            "email": "dewi@example.com",
            "phone_number": "+62 812 3456 789"
        })
    }

    #[test]
    fn test_full_name_is_optional() {
        let req: CreateCandidateRequest =
            serde_json::from_value(full_request()).expect("deserialize");
        let candidate = req.into_new_candidate().expect("valid");
        assert_eq!(candidate.age, 27);
        assert!(candidate.full_name.is_none());
    }

    #[test]
    fn test_birthdate_must_be_a_date() {
        let mut body = full_request();
        body["birthdate"] = json!("12/04/1998");
        let req: CreateCandidateRequest = serde_json::from_value(body).expect("deserialize");
        assert_eq!(req.into_new_candidate().unwrap_err().code, ErrorCode::BadRequest);
    }

    #[test]
    fn test_status_request_requires_all_ids() {
        let req: ApplicationStatusRequest =
            serde_json::from_value(json!({"candidate_id": 1, "position_id": 2})).expect("json");
        assert!(req.into_status().unwrap_err().message.contains("status_id"));
    }
}
