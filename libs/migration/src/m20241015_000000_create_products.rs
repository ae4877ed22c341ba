use sea_orm_migration::{prelude::*, schema::*};

/// Maximum stored length of a product name
const NAME_MAX_LENGTH: u32 = 100;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len(Products::Name, NAME_MAX_LENGTH))
                    .col(double(Products::Weight))
                    .to_owned(),
            )
            .await?;

        // Range filters and tolerance checks both scan by weight
        manager
            .create_index(
                Index::create()
                    .name("idx_products_weight")
                    .table(Products::Table)
                    .col(Products::Weight)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_products_weight")
                    .table(Products::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Weight,
}
