use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub thumbnail: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::map_element::Entity")]
    MapElements,
}

impl Related<super::map_element::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MapElements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
