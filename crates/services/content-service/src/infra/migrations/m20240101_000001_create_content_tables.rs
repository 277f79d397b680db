//! Migration: Create destinations, journeys, journey_days, packages and experiences.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Destinations::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Destinations::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Destinations::Name).string().not_null())
                    .col(ColumnDef::new(Destinations::Slug).string().null().unique_key())
                    .col(ColumnDef::new(Destinations::Description).text().not_null())
                    .col(ColumnDef::new(Destinations::Highlights).json_binary().not_null())
                    .col(ColumnDef::new(Destinations::Duration).string().not_null())
                    .col(ColumnDef::new(Destinations::Difficulty).string().not_null())
                    .col(ColumnDef::new(Destinations::BestTime).string().not_null())
                    .col(ColumnDef::new(Destinations::Altitude).string().null())
                    .col(
                        ColumnDef::new(Destinations::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Destinations::Category).string().not_null())
                    .col(ColumnDef::new(Destinations::ImageUrl).text().null())
                    .col(ColumnDef::new(Destinations::Overview).text().null())
                    .col(ColumnDef::new(Destinations::OverviewImageUrl).text().null())
                    .col(ColumnDef::new(Destinations::PlacesImageUrl).text().null())
                    .col(ColumnDef::new(Destinations::ActivitiesImageUrl).text().null())
                    .col(ColumnDef::new(Destinations::ItineraryImageUrl).text().null())
                    // Nested collections may hold legacy text, so they stay nullable
                    .col(ColumnDef::new(Destinations::PlacesToVisit).json_binary().null())
                    .col(ColumnDef::new(Destinations::ThingsToDo).json_binary().null())
                    .col(ColumnDef::new(Destinations::HowToReach).json_binary().null())
                    .col(ColumnDef::new(Destinations::BestTimeDetails).json_binary().null())
                    .col(ColumnDef::new(Destinations::WhereToStay).json_binary().null())
                    .col(ColumnDef::new(Destinations::Itinerary).json_binary().null())
                    .col(ColumnDef::new(Destinations::TravelTips).json_binary().not_null())
                    .col(ColumnDef::new(Destinations::Faqs).json_binary().null())
                    .col(
                        ColumnDef::new(Destinations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Destinations::UpdatedAt)
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
                    .table(Journeys::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Journeys::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Journeys::Title).string().not_null())
                    .col(ColumnDef::new(Journeys::Description).text().not_null())
                    .col(ColumnDef::new(Journeys::Duration).string().not_null())
                    .col(ColumnDef::new(Journeys::Difficulty).string().not_null())
                    .col(ColumnDef::new(Journeys::Activities).json_binary().not_null())
                    .col(
                        ColumnDef::new(Journeys::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Journeys::Category).string().not_null())
                    .col(ColumnDef::new(Journeys::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(Journeys::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Journeys::UpdatedAt)
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
                    .table(JourneyDays::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(JourneyDays::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(JourneyDays::JourneyId).uuid().not_null())
                    .col(ColumnDef::new(JourneyDays::DayNumber).integer().not_null())
                    .col(ColumnDef::new(JourneyDays::Title).string().null())
                    .col(ColumnDef::new(JourneyDays::Description).text().null())
                    .col(ColumnDef::new(JourneyDays::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(JourneyDays::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JourneyDays::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_journey_days_journey_id")
                            .from(JourneyDays::Table, JourneyDays::JourneyId)
                            .to(Journeys::Table, Journeys::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_journey_days_journey_id")
                    .table(JourneyDays::Table)
                    .col(JourneyDays::JourneyId)
                    .col(JourneyDays::DayNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Packages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Packages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Packages::Title).string().not_null())
                    .col(ColumnDef::new(Packages::Excerpt).text().not_null())
                    .col(ColumnDef::new(Packages::Content).text().not_null())
                    .col(ColumnDef::new(Packages::Category).string().not_null())
                    .col(ColumnDef::new(Packages::Author).string().not_null())
                    .col(ColumnDef::new(Packages::AuthorBio).text().null())
                    .col(ColumnDef::new(Packages::AuthorAvatar).text().null())
                    .col(ColumnDef::new(Packages::ImageUrl).text().null())
                    .col(ColumnDef::new(Packages::Tags).json_binary().not_null())
                    .col(
                        ColumnDef::new(Packages::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Packages::ReadTime).string().not_null())
                    .col(ColumnDef::new(Packages::PublishedDate).date().not_null())
                    .col(
                        ColumnDef::new(Packages::Views)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Packages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Packages::UpdatedAt)
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
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Experiences::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Experiences::Title).string().not_null())
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(ColumnDef::new(Experiences::Duration).string().not_null())
                    .col(ColumnDef::new(Experiences::GroupSize).string().not_null())
                    .col(ColumnDef::new(Experiences::Price).string().not_null())
                    .col(ColumnDef::new(Experiences::Highlights).json_binary().not_null())
                    .col(
                        ColumnDef::new(Experiences::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Experiences::Category).string().not_null())
                    .col(ColumnDef::new(Experiences::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experiences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Packages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JourneyDays::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Journeys::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Destinations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Destinations {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Highlights,
    Duration,
    Difficulty,
    BestTime,
    Altitude,
    Featured,
    Category,
    ImageUrl,
    Overview,
    OverviewImageUrl,
    PlacesImageUrl,
    ActivitiesImageUrl,
    ItineraryImageUrl,
    PlacesToVisit,
    ThingsToDo,
    HowToReach,
    BestTimeDetails,
    WhereToStay,
    Itinerary,
    TravelTips,
    Faqs,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Journeys {
    Table,
    Id,
    Title,
    Description,
    Duration,
    Difficulty,
    Activities,
    Featured,
    Category,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum JourneyDays {
    Table,
    Id,
    JourneyId,
    DayNumber,
    Title,
    Description,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Packages {
    Table,
    Id,
    Title,
    Excerpt,
    Content,
    Category,
    Author,
    AuthorBio,
    AuthorAvatar,
    ImageUrl,
    Tags,
    Featured,
    ReadTime,
    PublishedDate,
    Views,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Experiences {
    Table,
    Id,
    Title,
    Description,
    Duration,
    GroupSize,
    Price,
    Highlights,
    Featured,
    Category,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
