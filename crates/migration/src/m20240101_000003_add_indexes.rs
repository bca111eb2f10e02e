use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Product: name is the most common search key
        manager
            .create_index(
                Index::create()
                    .name("idx_product_name")
                    .table(Product::Table)
                    .col(Product::Name)
                    .to_owned(),
            )
            .await?;

        // Product: price range + quantity floor searches
        manager
            .create_index(
                Index::create()
                    .name("idx_product_price_quantity")
                    .table(Product::Table)
                    .col(Product::Price)
                    .col(Product::Quantity)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customer_last_name")
                    .table(Customer::Table)
                    .col(Customer::LastName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_product_name").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_price_quantity").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_customer_last_name").table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Product { Table, Name, Price, Quantity }

#[derive(DeriveIden)]
enum Customer { Table, LastName }
