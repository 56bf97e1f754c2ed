use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "spaces")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[sea_orm(nullable)]
    pub thumbnail: Option<String>,
    #[sea_orm(indexed)]
    pub creator_id: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Creator,
    #[sea_orm(has_many = "super::space_element::Entity")]
    SpaceElements,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::space_element::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpaceElements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
