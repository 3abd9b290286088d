//! 预导入模块，方便使用

pub use super::candidate_positions::{
    ActiveModel as CandidatePositionActiveModel, Entity as CandidatePositions,
    Model as CandidatePositionModel,
};
pub use super::candidates::{
    ActiveModel as CandidateActiveModel, Entity as Candidates, Model as CandidateModel,
};
pub use super::categories::{
    ActiveModel as CategoryActiveModel, Entity as Categories, Model as CategoryModel,
};
pub use super::exam_reports::{
    ActiveModel as ExamReportActiveModel, Entity as ExamReports, Model as ExamReportModel,
};
pub use super::exams::{ActiveModel as ExamActiveModel, Entity as Exams, Model as ExamModel};
pub use super::interview_schedules::{
    ActiveModel as InterviewScheduleActiveModel, Entity as InterviewSchedules,
    Model as InterviewScheduleModel,
};
pub use super::positions::{
    ActiveModel as PositionActiveModel, Entity as Positions, Model as PositionModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::status::{ActiveModel as StatusActiveModel, Entity as Status, Model as StatusModel};
pub use super::study_materials::{
    ActiveModel as StudyMaterialActiveModel, Entity as StudyMaterials,
    Model as StudyMaterialModel,
};
pub use super::study_materials_candidates::{
    ActiveModel as StudyAssignmentActiveModel, Entity as StudyMaterialsCandidates,
    Model as StudyAssignmentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
