use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::OpenId)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Name).text().null())
                    .col(ColumnDef::new(Users::Email).string_len(320).null())
                    .col(ColumnDef::new(Users::LoginMethod).string_len(64).null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(16)
                            .not_null()
                            .default("user"),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).string().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).string().not_null())
                    .col(ColumnDef::new(Users::LastSignedIn).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SclAssessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SclAssessments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SclAssessments::UserId).integer().not_null())
                    .col(ColumnDef::new(SclAssessments::Responses).text().not_null())
                    .col(
                        ColumnDef::new(SclAssessments::TotalScore)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAssessments::PositiveItemCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAssessments::AverageScore)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAssessments::FactorScores)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAssessments::IsAnonymous)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(SclAssessments::Notes).text().null())
                    .col(ColumnDef::new(SclAssessments::CreatedAt).string().not_null())
                    .col(ColumnDef::new(SclAssessments::UpdatedAt).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scl_assessments_user")
                            .from(SclAssessments::Table, SclAssessments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // History is always read per user, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_scl_assessments_user_created")
                    .table(SclAssessments::Table)
                    .col(SclAssessments::UserId)
                    .col(SclAssessments::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SclAnalyticsSummary::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SclAnalyticsSummary::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SclAnalyticsSummary::Period)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAnalyticsSummary::PeriodDate)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAnalyticsSummary::TotalAssessments)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAnalyticsSummary::TotalUsers)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAnalyticsSummary::AverageTotalScore)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAnalyticsSummary::AveragePositiveItems)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAnalyticsSummary::ScoreDistribution)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAnalyticsSummary::FactorPrevalence)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SclAnalyticsSummary::UpdatedAt)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scl_analytics_summary_period_date")
                    .table(SclAnalyticsSummary::Table)
                    .col(SclAnalyticsSummary::Period)
                    .col(SclAnalyticsSummary::PeriodDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SclAnalyticsSummary::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SclAssessments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    OpenId,
    Name,
    Email,
    LoginMethod,
    Role,
    CreatedAt,
    UpdatedAt,
    LastSignedIn,
}

#[derive(Iden)]
enum SclAssessments {
    Table,
    Id,
    UserId,
    Responses,
    TotalScore,
    PositiveItemCount,
    AverageScore,
    FactorScores,
    IsAnonymous,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SclAnalyticsSummary {
    Table,
    Id,
    Period,
    PeriodDate,
    TotalAssessments,
    TotalUsers,
    AverageTotalScore,
    AveragePositiveItems,
    ScoreDistribution,
    FactorPrevalence,
    UpdatedAt,
}
