use serde::Serialize;

use super::entities::User;

#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub admin: User,
}

#[derive(Debug, Serialize)]
pub struct AdminListResponse {
    pub admins: Vec<User>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: User,
}
