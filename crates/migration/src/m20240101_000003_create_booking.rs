//! Create `booking` table with FKs to `hotel` and `user`.
//!
//! Deleting a hotel or a user with bookings is blocked (RESTRICT); booking
//! history must never be orphaned silently.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(uuid(Booking::HotelId).not_null())
                    .col(uuid(Booking::UserId).not_null())
                    .col(date(Booking::StartDate).not_null())
                    .col(date(Booking::EndDate).not_null())
                    .col(string_len(Booking::ResponsibleName, 255).not_null())
                    .col(timestamp_with_time_zone(Booking::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_hotel")
                            .from(Booking::Table, Booking::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, Id, HotelId, UserId, StartDate, EndDate, ResponsibleName, CreatedAt }

#[derive(DeriveIden)]
enum Hotel { Table, Id }

#[derive(DeriveIden)]
enum User { Table, Id }
