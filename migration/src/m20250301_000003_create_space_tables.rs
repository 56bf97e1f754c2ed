use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_catalog_tables::Elements;
use crate::m20250301_000002_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Spaces::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Spaces::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Spaces::Name).string().not_null())
                    .col(ColumnDef::new(Spaces::Width).integer().not_null())
                    .col(ColumnDef::new(Spaces::Height).integer().not_null())
                    .col(ColumnDef::new(Spaces::Thumbnail).string().null())
                    .col(ColumnDef::new(Spaces::CreatorId).string().not_null())
                    .col(ColumnDef::new(Spaces::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spaces_creator_id")
                            .from(Spaces::Table, Spaces::CreatorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spaces_creator_id")
                    .table(Spaces::Table)
                    .col(Spaces::CreatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SpaceElements::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SpaceElements::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(SpaceElements::SpaceId).string().not_null())
                    .col(ColumnDef::new(SpaceElements::ElementId).string().not_null())
                    .col(ColumnDef::new(SpaceElements::X).integer().not_null())
                    .col(ColumnDef::new(SpaceElements::Y).integer().not_null())
                    .col(ColumnDef::new(SpaceElements::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_space_elements_space_id")
                            .from(SpaceElements::Table, SpaceElements::SpaceId)
                            .to(Spaces::Table, Spaces::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_space_elements_element_id")
                            .from(SpaceElements::Table, SpaceElements::ElementId)
                            .to(Elements::Table, Elements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_space_elements_space_id")
                    .table(SpaceElements::Table)
                    .col(SpaceElements::SpaceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpaceElements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Spaces::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Spaces {
    Table,
    Id,
    Name,
    Width,
    Height,
    Thumbnail,
    CreatorId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SpaceElements {
    Table,
    Id,
    SpaceId,
    ElementId,
    X,
    Y,
    CreatedAt,
}
