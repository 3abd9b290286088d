use serde::Serialize;

use crate::models::candidates::entities::CandidateProfile;
use crate::models::users::entities::{User, UserRole};

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub role: UserRole,
    pub token: String,
    pub expires_in: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: User,
}

#[derive(Debug, Serialize)]
pub struct CandidateProfileResponse {
    pub profile: CandidateProfile,
}
