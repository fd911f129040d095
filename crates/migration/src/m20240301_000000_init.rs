//! Initial schema migration.
//!
//! Creates the tables the read-side core queries:
//!
//! - `users`: identity (`user_seq`) and login id
//! - `articles`: diary entries, expenditure data for expenditure articles
//! - `followings`: directed follow edges

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Users {
    Table,
    UserSeq,
    UserId,
}

#[derive(Iden)]
enum Articles {
    Table,
    ArticleSeq,
    UserSeq,
    WrittenAt,
    ArticleText,
    FinancialText,
    Status,
    ArticleType,
    ExpenditureCategory,
    Amount,
    ConsumptionDate,
}

#[derive(Iden)]
enum Followings {
    Table,
    UserSeq,
    FollowingUserSeq,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::UserSeq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::UserId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Articles
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Articles::ArticleSeq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Articles::UserSeq).big_integer().not_null())
                    .col(
                        ColumnDef::new(Articles::WrittenAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Articles::ArticleText).text().not_null())
                    .col(ColumnDef::new(Articles::FinancialText).text())
                    .col(
                        ColumnDef::new(Articles::Status)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Articles::ArticleType)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Articles::ExpenditureCategory).integer())
                    .col(ColumnDef::new(Articles::Amount).big_integer())
                    .col(ColumnDef::new(Articles::ConsumptionDate).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-articles-user_seq")
                            .from(Articles::Table, Articles::UserSeq)
                            .to(Users::Table, Users::UserSeq)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-articles-user_seq-written_at")
                    .table(Articles::Table)
                    .col(Articles::UserSeq)
                    .col(Articles::WrittenAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-articles-user_seq-consumption_date")
                    .table(Articles::Table)
                    .col(Articles::UserSeq)
                    .col(Articles::ArticleType)
                    .col(Articles::ConsumptionDate)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Followings
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Followings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Followings::UserSeq).big_integer().not_null())
                    .col(
                        ColumnDef::new(Followings::FollowingUserSeq)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Followings::UserSeq)
                            .col(Followings::FollowingUserSeq),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-followings-user_seq")
                            .from(Followings::Table, Followings::UserSeq)
                            .to(Users::Table, Users::UserSeq)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-followings-following_user_seq")
                            .from(Followings::Table, Followings::FollowingUserSeq)
                            .to(Users::Table, Users::UserSeq)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-followings-following_user_seq")
                    .table(Followings::Table)
                    .col(Followings::FollowingUserSeq)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(Followings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}
