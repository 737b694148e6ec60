//! Initial schema migration - creates all tables from scratch.
//!
//! Three tables back the whole service:
//!
//! - `users`: student profiles with cumulative XP
//! - `applications`: one row per (user, scholarship) submission
//! - `scholarships`: seeded reference data with serialized criteria
//!
//! The unique indexes are a schema-level backstop for the lookup-then-write
//! paths in the engine; the engine still checks first so the API error
//! messages stay unchanged.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    Age,
    Major,
    Gender,
    Leadership,
    Community,
    TotalXp,
    Level,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Applications {
    Table,
    Id,
    UserId,
    ScholarshipId,
    ScholarshipName,
    XpEarned,
    AppliedAt,
}

#[derive(Iden)]
enum Scholarships {
    Table,
    Id,
    Name,
    Description,
    Criteria,
    Reward,
    CreatedAt,
}

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
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Age).integer().not_null())
                    .col(ColumnDef::new(Users::Major).string().not_null())
                    .col(ColumnDef::new(Users::Gender).string().not_null())
                    .col(
                        ColumnDef::new(Users::Leadership)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::Community)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::TotalXp)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Users::Level)
                            .string()
                            .not_null()
                            .default("Scholarship Newbie"),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-users-name")
                    .table(Users::Table)
                    .col(Users::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Applications::ScholarshipId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::ScholarshipName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::XpEarned)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::AppliedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-applications-user_id")
                            .from(Applications::Table, Applications::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-applications-user-scholarship")
                    .table(Applications::Table)
                    .col(Applications::UserId)
                    .col(Applications::ScholarshipId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Scholarships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scholarships::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scholarships::Name).string().not_null())
                    .col(
                        ColumnDef::new(Scholarships::Description)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Scholarships::Criteria).text().not_null())
                    .col(
                        ColumnDef::new(Scholarships::Reward)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Scholarships::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scholarships::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}
