//! Secondary indexes.
//!
//! `idx_booking_hotel_dates` backs the overlap scan in the booking engine.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_hotel_dates")
                    .table(Booking::Table)
                    .col(Booking::HotelId)
                    .col(Booking::StartDate)
                    .col(Booking::EndDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_guest_booking")
                    .table(Guest::Table)
                    .col(Guest::BookingId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_created_at")
                    .table(Hotel::Table)
                    .col(Hotel::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_booking_hotel_dates").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_guest_booking").table(Guest::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_hotel_created_at").table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, HotelId, StartDate, EndDate }

#[derive(DeriveIden)]
enum Guest { Table, BookingId }

#[derive(DeriveIden)]
enum Hotel { Table, CreatedAt }
