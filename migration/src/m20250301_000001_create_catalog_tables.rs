use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Avatars::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Avatars::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Avatars::Name).string().not_null())
                    .col(ColumnDef::new(Avatars::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Avatars::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Elements::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Elements::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Elements::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Elements::Width).integer().not_null())
                    .col(ColumnDef::new(Elements::Height).integer().not_null())
                    .col(ColumnDef::new(Elements::IsStatic).boolean().not_null().default(false))
                    .col(ColumnDef::new(Elements::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Elements::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Maps::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Maps::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Maps::Name).string().not_null())
                    .col(ColumnDef::new(Maps::Width).integer().not_null())
                    .col(ColumnDef::new(Maps::Height).integer().not_null())
                    .col(ColumnDef::new(Maps::Thumbnail).string().not_null())
                    .col(ColumnDef::new(Maps::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Default placements of a map template, owned by the map
        manager
            .create_table(
                Table::create()
                    .table(MapElements::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MapElements::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(MapElements::MapId).string().not_null())
                    .col(ColumnDef::new(MapElements::ElementId).string().not_null())
                    .col(ColumnDef::new(MapElements::X).integer().not_null())
                    .col(ColumnDef::new(MapElements::Y).integer().not_null())
                    .col(ColumnDef::new(MapElements::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_map_elements_map_id")
                            .from(MapElements::Table, MapElements::MapId)
                            .to(Maps::Table, Maps::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_map_elements_element_id")
                            .from(MapElements::Table, MapElements::ElementId)
                            .to(Elements::Table, Elements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_map_elements_map_id")
                    .table(MapElements::Table)
                    .col(MapElements::MapId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MapElements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Maps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Elements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Avatars::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Avatars {
    Table,
    Id,
    Name,
    ImageUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Elements {
    Table,
    Id,
    ImageUrl,
    Width,
    Height,
    IsStatic,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Maps {
    Table,
    Id,
    Name,
    Width,
    Height,
    Thumbnail,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MapElements {
    Table,
    Id,
    MapId,
    ElementId,
    X,
    Y,
    Position,
}
