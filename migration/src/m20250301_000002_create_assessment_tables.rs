use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_recruitment_tables::{
    CandidatePositions, Candidates, Categories, Users,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 考试 ====================
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Exams::CategoryId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::Title).string().not_null())
                    .col(ColumnDef::new(Exams::Description).text().not_null())
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Exams::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::ExamId).big_integer().not_null())
                    .col(ColumnDef::new(Questions::QuestionText).text().not_null())
                    .col(ColumnDef::new(Questions::OptionA).text().not_null())
                    .col(ColumnDef::new(Questions::OptionB).text().not_null())
                    .col(ColumnDef::new(Questions::OptionC).text().not_null())
                    .col(ColumnDef::new(Questions::OptionD).text().not_null())
                    .col(ColumnDef::new(Questions::AnswerKey).string_len(1).not_null())
                    .col(ColumnDef::new(Questions::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Questions::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExamReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamReports::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExamReports::ExamId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ExamReports::CandidateId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamReports::Score)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(ExamReports::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ExamReports::ReportDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamReports::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamReports::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExamReports::Table, ExamReports::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExamReports::Table, ExamReports::CandidateId)
                            .to(Candidates::Table, Candidates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 学习资料 ====================
        manager
            .create_table(
                Table::create()
                    .table(StudyMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudyMaterials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudyMaterials::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudyMaterials::Title).string().not_null())
                    .col(ColumnDef::new(StudyMaterials::Description).text().not_null())
                    .col(ColumnDef::new(StudyMaterials::FileUrl).string().not_null())
                    .col(ColumnDef::new(StudyMaterials::Thumbnail).string().null())
                    .col(
                        ColumnDef::new(StudyMaterials::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudyMaterials::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudyMaterials::Table, StudyMaterials::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StudyMaterialsCandidates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudyMaterialsCandidates::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudyMaterialsCandidates::StudyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudyMaterialsCandidates::CandidateId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudyMaterialsCandidates::AccessDate)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                StudyMaterialsCandidates::Table,
                                StudyMaterialsCandidates::StudyId,
                            )
                            .to(StudyMaterials::Table, StudyMaterials::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                StudyMaterialsCandidates::Table,
                                StudyMaterialsCandidates::CandidateId,
                            )
                            .to(Candidates::Table, Candidates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 面试安排 ====================
        manager
            .create_table(
                Table::create()
                    .table(InterviewSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InterviewSchedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InterviewSchedules::CandidateId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterviewSchedules::CandidatePositionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterviewSchedules::InterviewDate)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterviewSchedules::InterviewTime)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterviewSchedules::Notes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(InterviewSchedules::MeetingLink).string().null())
                    .col(ColumnDef::new(InterviewSchedules::AdminId1).big_integer().null())
                    .col(ColumnDef::new(InterviewSchedules::AdminId2).big_integer().null())
                    .col(ColumnDef::new(InterviewSchedules::AdminId3).big_integer().null())
                    .col(
                        ColumnDef::new(InterviewSchedules::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterviewSchedules::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(InterviewSchedules::Table, InterviewSchedules::CandidateId)
                            .to(Candidates::Table, Candidates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                InterviewSchedules::Table,
                                InterviewSchedules::CandidatePositionId,
                            )
                            .to(CandidatePositions::Table, CandidatePositions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(InterviewSchedules::Table, InterviewSchedules::AdminId1)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(InterviewSchedules::Table, InterviewSchedules::AdminId2)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(InterviewSchedules::Table, InterviewSchedules::AdminId3)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_questions_exam_id")
                    .table(Questions::Table)
                    .col(Questions::ExamId)
                    .to_owned(),
            )
            .await?;

        // 每个候选人每场考试只有一份报告
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_exam_reports_candidate_exam")
                    .table(ExamReports::Table)
                    .col(ExamReports::CandidateId)
                    .col(ExamReports::ExamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_study_materials_candidates_study_candidate")
                    .table(StudyMaterialsCandidates::Table)
                    .col(StudyMaterialsCandidates::StudyId)
                    .col(StudyMaterialsCandidates::CandidateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_interview_schedules_candidate_position")
                    .table(InterviewSchedules::Table)
                    .col(InterviewSchedules::CandidateId)
                    .col(InterviewSchedules::CandidatePositionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InterviewSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudyMaterialsCandidates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudyMaterials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExamReports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Exams {
    #[sea_orm(iden = "exams")]
    Table,
    Id,
    CreatedBy,
    CategoryId,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    ExamId,
    QuestionText,
    OptionA,
    OptionB,
    OptionC,
    OptionD,
    AnswerKey,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ExamReports {
    #[sea_orm(iden = "exam_reports")]
    Table,
    Id,
    ExamId,
    CandidateId,
    Score,
    IsCompleted,
    ReportDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudyMaterials {
    #[sea_orm(iden = "study_materials")]
    Table,
    Id,
    CreatedBy,
    Title,
    Description,
    FileUrl,
    Thumbnail,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudyMaterialsCandidates {
    #[sea_orm(iden = "study_materials_candidates")]
    Table,
    Id,
    StudyId,
    CandidateId,
    AccessDate,
}

#[derive(DeriveIden)]
enum InterviewSchedules {
    #[sea_orm(iden = "interview_schedules")]
    Table,
    Id,
    CandidateId,
    CandidatePositionId,
    InterviewDate,
    InterviewTime,
    Notes,
    MeetingLink,
    #[sea_orm(iden = "admin_id_1")]
    AdminId1,
    #[sea_orm(iden = "admin_id_2")]
    AdminId2,
    #[sea_orm(iden = "admin_id_3")]
    AdminId3,
    CreatedAt,
    UpdatedAt,
}
