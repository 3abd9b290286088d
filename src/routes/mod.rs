pub mod auth;

pub mod data_admin;

pub mod candidates;

pub mod positions;

pub mod statuses;

pub mod exams;

pub mod study_materials;

pub mod interviews;

pub mod system;

pub use auth::configure_auth_routes;
pub use candidates::configure_candidate_routes;
pub use data_admin::configure_data_admin_routes;
pub use exams::configure_exam_routes;
pub use interviews::configure_interview_routes;
pub use positions::configure_position_routes;
pub use statuses::configure_status_routes;
pub use study_materials::configure_study_material_routes;
pub use system::configure_system_routes;
