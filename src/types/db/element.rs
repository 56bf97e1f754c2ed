use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "elements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub image_url: String,
    pub width: i32,
    pub height: i32,

    // Marks the element as blocking; stored but not enforced on placement
    pub is_static: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::map_element::Entity")]
    MapElements,
    #[sea_orm(has_many = "super::space_element::Entity")]
    SpaceElements,
}

impl Related<super::map_element::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MapElements.def()
    }
}

impl Related<super::space_element::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpaceElements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
