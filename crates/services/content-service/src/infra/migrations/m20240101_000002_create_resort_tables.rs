//! Migration: Create resort activity, package and gallery tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResortActivities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ResortActivities::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ResortActivities::Title).string().not_null())
                    .col(ColumnDef::new(ResortActivities::Description).text().not_null())
                    .col(ColumnDef::new(ResortActivities::FullDescription).text().not_null())
                    .col(ColumnDef::new(ResortActivities::Icon).string().not_null())
                    .col(ColumnDef::new(ResortActivities::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(ResortActivities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ResortActivities::UpdatedAt)
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
                    .table(ResortPackages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ResortPackages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ResortPackages::Name).string().not_null())
                    .col(ColumnDef::new(ResortPackages::Duration).string().not_null())
                    .col(ColumnDef::new(ResortPackages::Price).string().not_null())
                    .col(ColumnDef::new(ResortPackages::OriginalPrice).string().not_null())
                    .col(ColumnDef::new(ResortPackages::Description).text().not_null())
                    .col(ColumnDef::new(ResortPackages::Includes).json_binary().not_null())
                    .col(ColumnDef::new(ResortPackages::Features).json_binary().not_null())
                    .col(ColumnDef::new(ResortPackages::Badge).string().not_null())
                    .col(ColumnDef::new(ResortPackages::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(ResortPackages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ResortPackages::UpdatedAt)
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
                    .table(ResortGallery::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ResortGallery::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ResortGallery::ImageUrl).text().not_null())
                    .col(ColumnDef::new(ResortGallery::Title).string().null())
                    .col(ColumnDef::new(ResortGallery::Description).text().null())
                    .col(
                        ColumnDef::new(ResortGallery::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ResortGallery::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ResortGallery::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resort_gallery_display_order")
                    .table(ResortGallery::Table)
                    .col(ResortGallery::DisplayOrder)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResortGallery::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResortPackages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ResortActivities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ResortActivities {
    Table,
    Id,
    Title,
    Description,
    FullDescription,
    Icon,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ResortPackages {
    Table,
    Id,
    Name,
    Duration,
    Price,
    OriginalPrice,
    Description,
    Includes,
    Features,
    Badge,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ResortGallery {
    Table,
    Id,
    ImageUrl,
    Title,
    Description,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
