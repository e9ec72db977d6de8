use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Course membership of a COURSE_SET node.
///
/// `topic` "" means any enroll group of the course qualifies; non-empty
/// restricts satisfaction to groups with that topic. (node, course, topic)
/// is the identity the combined-course expansion deduplicates on.
/// `combined_group_id` is provenance for display grouping, not a FK.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "node_courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub node_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub topic: String,
    pub combined_group_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub recommended: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::requirement_nodes::Entity",
        from = "Column::NodeId",
        to = "super::requirement_nodes::Column::Id",
        on_delete = "Cascade"
    )]
    Node,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::requirement_nodes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Node.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
