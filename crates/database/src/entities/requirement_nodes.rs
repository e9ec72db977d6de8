use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Node of a requirement tree: GROUP (ordered children, pick n) or
/// COURSE_SET (course memberships, pick n). Ids are generated per
/// requirement: `{req}_root`, `{req}_1`, `{req}_2`, ...
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "requirement_nodes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub requirement_id: String,
    /// "GROUP" / "COURSE_SET"
    pub node_type: String,
    pub title: Option<String>,
    pub pick_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::requirements::Entity",
        from = "Column::RequirementId",
        to = "super::requirements::Column::Id",
        on_delete = "Cascade"
    )]
    Requirement,
    #[sea_orm(has_many = "super::node_courses::Entity")]
    NodeCourses,
}

impl Related<super::requirements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requirement.def()
    }
}

impl Related<super::node_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NodeCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
