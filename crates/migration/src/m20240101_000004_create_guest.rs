//! Create `guest` table with cascading FK to `booking`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guest::Table)
                    .if_not_exists()
                    .col(uuid(Guest::Id).primary_key())
                    .col(uuid(Guest::BookingId).not_null())
                    .col(string_len(Guest::Name, 255).not_null())
                    .col(string_len(Guest::Document, 64).not_null())
                    .col(timestamp_with_time_zone(Guest::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_booking")
                            .from(Guest::Table, Guest::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Guest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Guest { Table, Id, BookingId, Name, Document, CreatedAt }

#[derive(DeriveIden)]
enum Booking { Table, Id }
