use sea_orm_migration::prelude::*;

/// Participants (抽奖登记表)
#[derive(DeriveIden)]
enum Participants {
    Table,
    Number,
    Name,
    Email,
    EmailKey,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 列与原登记表一致: Number | Name | Email | Timestamp
/// email_key 存去空白并小写后的邮箱，唯一索引保证同一邮箱只登记一次
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Participants::Number)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Participants::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Participants::Email)
                            .string_len(320)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Participants::EmailKey)
                            .string_len(320)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Participants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_participants_email_key_unique")
                    .table(Participants::Table)
                    .col(Participants::EmailKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(Participants::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
