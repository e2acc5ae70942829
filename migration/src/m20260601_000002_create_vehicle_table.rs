use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::VehicleName))
                    .col(string_len(Vehicle::Type, 20))
                    .col(string_uniq(Vehicle::RegistrationNumber))
                    .col(double(Vehicle::DailyRentPrice))
                    .col(
                        string_len(Vehicle::AvailabilityStatus, 20)
                            .default("available"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    #[sea_orm(iden = "vehicles")]
    Table,
    Id,
    VehicleName,
    Type,
    RegistrationNumber,
    DailyRentPrice,
    AvailabilityStatus,
}
