//! Migration: Create categories and enquiries tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Categories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Categories::Name).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Enquiries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Enquiries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Enquiries::JourneyId).uuid().null())
                    .col(ColumnDef::new(Enquiries::JourneyTitle).string().not_null())
                    .col(ColumnDef::new(Enquiries::Name).string().not_null())
                    .col(ColumnDef::new(Enquiries::Email).string().not_null())
                    .col(ColumnDef::new(Enquiries::Message).text().null())
                    .col(ColumnDef::new(Enquiries::Status).string().not_null().default("new"))
                    .col(
                        ColumnDef::new(Enquiries::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Enquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Enquiries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Admin inbox filters on unread enquiries
        manager
            .create_index(
                Index::create()
                    .name("idx_enquiries_is_read")
                    .table(Enquiries::Table)
                    .col(Enquiries::IsRead)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enquiries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum Enquiries {
    Table,
    Id,
    JourneyId,
    JourneyTitle,
    Name,
    Email,
    Message,
    Status,
    IsRead,
    CreatedAt,
    UpdatedAt,
}
