use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Parent-child edge of a GROUP node, with explicit ordering
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "node_children")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub parent_node_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub child_node_id: String,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::requirement_nodes::Entity",
        from = "Column::ParentNodeId",
        to = "super::requirement_nodes::Column::Id",
        on_delete = "Cascade"
    )]
    ParentNode,
}

impl ActiveModelBehavior for ActiveModel {}
