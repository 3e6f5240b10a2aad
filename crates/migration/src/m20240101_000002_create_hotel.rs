//! Create `hotel` table.
//!
//! `total_rooms` is the capacity ceiling consumed by the booking engine.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(uuid(Hotel::Id).primary_key())
                    .col(string_len(Hotel::Name, 255).not_null())
                    .col(string_len(Hotel::City, 128).not_null())
                    .col(string_len(Hotel::Address, 255).not_null())
                    .col(integer(Hotel::Stars).not_null())
                    .col(integer(Hotel::TotalRooms).not_null())
                    .col(ColumnDef::new(Hotel::Description).text().null())
                    .col(ColumnDef::new(Hotel::PhotoUrl).string_len(512).null())
                    .col(timestamp_with_time_zone(Hotel::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Hotel::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Hotel { Table, Id, Name, City, Address, Stars, TotalRooms, Description, PhotoUrl, CreatedAt }
