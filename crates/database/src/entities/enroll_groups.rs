use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One enrollment group of a course in one semester.
///
/// (course_id, semester, matching_kind, matching_key) is unique; it is the
/// identity that repeated imports match against. `combination_hints` holds
/// the raw cross-listing references from the catalog until the resolver
/// turns them into a `combined_group_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enroll_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_id: String,
    pub semester: String,
    pub topic: Option<String>,
    pub matching_kind: String,
    pub matching_key: String,
    pub credits_minimum: Option<f32>,
    pub credits_maximum: Option<f32>,
    pub grading_basis: Option<String>,
    pub session_code: Option<String>,
    /// Raw `simpleCombinations` payload, JSON array of {subject, catalogNbr}
    pub combination_hints: Option<Json>,
    pub combined_group_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::combined_groups::Entity",
        from = "Column::CombinedGroupId",
        to = "super::combined_groups::Column::Id",
        on_delete = "SetNull"
    )]
    CombinedGroup,
    #[sea_orm(has_many = "super::class_sections::Entity")]
    ClassSections,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::combined_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CombinedGroup.def()
    }
}

impl Related<super::class_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
