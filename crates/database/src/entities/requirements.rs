use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One requirement of a program, owning exactly one node tree.
///
/// `root_node_id` forms a circular reference with `requirement_nodes`; it
/// is NULL while the tree is being built and backfilled afterwards, and
/// must be cleared again before the tree is deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "requirements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub program_id: String,
    pub name: String,
    /// "GROUP" / "LIST"
    pub ui_type: String,
    /// JSON array of description paragraphs
    pub description: Option<Json>,
    pub root_node_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::programs::Entity",
        from = "Column::ProgramId",
        to = "super::programs::Column::Id",
        on_delete = "Cascade"
    )]
    Program,
    #[sea_orm(has_many = "super::requirement_nodes::Entity")]
    RequirementNodes,
}

impl Related<super::programs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Program.def()
    }
}

impl Related<super::requirement_nodes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequirementNodes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
