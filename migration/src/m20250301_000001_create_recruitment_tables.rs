use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::FullName).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建候选人表（与用户一对一）
        manager
            .create_table(
                Table::create()
                    .table(Candidates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Candidates::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Candidates::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Candidates::FullName).string().null())
                    .col(ColumnDef::new(Candidates::Age).integer().not_null())
                    .col(ColumnDef::new(Candidates::Birthdate).string().not_null())
                    .col(ColumnDef::new(Candidates::Gender).string().not_null())
                    .col(ColumnDef::new(Candidates::Email).string().not_null())
                    .col(ColumnDef::new(Candidates::PhoneNumber).string().not_null())
                    .col(
                        ColumnDef::new(Candidates::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Candidates::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Candidates::Table, Candidates::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建职位表
        manager
            .create_table(
                Table::create()
                    .table(Positions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Positions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Positions::PositionName).string().not_null())
                    .col(ColumnDef::new(Positions::Type).string().not_null())
                    .col(ColumnDef::new(Positions::Work).string().not_null())
                    .col(ColumnDef::new(Positions::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Positions::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建招聘状态表
        manager
            .create_table(
                Table::create()
                    .table(Status::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Status::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Status::StatusName).string().not_null())
                    .col(ColumnDef::new(Status::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Status::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建候选人应聘记录表
        manager
            .create_table(
                Table::create()
                    .table(CandidatePositions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CandidatePositions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CandidatePositions::CandidateId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CandidatePositions::PositionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CandidatePositions::StatusId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CandidatePositions::DateOfApplication)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CandidatePositions::Table, CandidatePositions::CandidateId)
                            .to(Candidates::Table, Candidates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CandidatePositions::Table, CandidatePositions::PositionId)
                            .to(Positions::Table, Positions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CandidatePositions::Table, CandidatePositions::StatusId)
                            .to(Status::Table, Status::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建题目分类表
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Category).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        // 同一候选人对同一职位只能有一条应聘记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_candidate_positions_candidate_position")
                    .table(CandidatePositions::Table)
                    .col(CandidatePositions::CandidateId)
                    .col(CandidatePositions::PositionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CandidatePositions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Status::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Positions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Candidates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Password,
    FullName,
    Email,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Candidates {
    #[sea_orm(iden = "candidates")]
    Table,
    Id,
    UserId,
    FullName,
    Age,
    Birthdate,
    Gender,
    Email,
    PhoneNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Positions {
    #[sea_orm(iden = "positions")]
    Table,
    Id,
    PositionName,
    Type,
    Work,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Status {
    #[sea_orm(iden = "status")]
    Table,
    Id,
    StatusName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum CandidatePositions {
    #[sea_orm(iden = "candidate_positions")]
    Table,
    Id,
    CandidateId,
    PositionId,
    StatusId,
    DateOfApplication,
}

#[derive(DeriveIden)]
pub(crate) enum Categories {
    #[sea_orm(iden = "categories")]
    Table,
    Id,
    Category,
}
