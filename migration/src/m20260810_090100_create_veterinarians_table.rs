use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create veterinarians table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Veterinarians::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Veterinarians::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Veterinarians::UserId).uuid().not_null())
                    .col(ColumnDef::new(Veterinarians::Qualifications).text().not_null())
                    .col(
                        ColumnDef::new(Veterinarians::Specialization)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Veterinarians::ServiceRegions).json().not_null())
                    .col(ColumnDef::new(Veterinarians::AnimalTypes).json())
                    .col(
                        ColumnDef::new(Veterinarians::VerificationStatus)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Veterinarians::Bio).text())
                    .col(ColumnDef::new(Veterinarians::ContactNumber).string_len(30))
                    .col(
                        ColumnDef::new(Veterinarians::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Veterinarians::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_veterinarians_user_id")
                            .from(Veterinarians::Table, Veterinarians::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Admin review queue and public "verified only" listings
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_veterinarians_verification_status
                ON veterinarians (verification_status);
                "#,
            )
            .await?;

        // Back-reference lookup from the owning user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_veterinarians_user_id
                ON veterinarians (user_id);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger (function created by users migration)
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_veterinarians_updated_at
                BEFORE UPDATE ON veterinarians
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_veterinarians_updated_at ON veterinarians",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_veterinarians_verification_status;
                DROP INDEX IF EXISTS idx_veterinarians_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Veterinarians::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Veterinarians {
    Table,
    Id,
    UserId,
    Qualifications,
    Specialization,
    ServiceRegions,
    AnimalTypes,
    VerificationStatus,
    Bio,
    ContactNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
