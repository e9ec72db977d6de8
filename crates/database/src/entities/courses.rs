use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One catalog course, keyed by subject + catalog number ("MATH1110").
///
/// `last_offered_semester`/`last_offered_year` track the most recent
/// semester seen by the importer; descriptive fields always reflect that
/// semester's catalog entry (historical imports never touch them).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub subject: String,
    pub number: String,
    /// First digit of the catalog number, 0 if unparsable
    pub level: i32,
    pub title_short: String,
    pub title_long: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub enrollment_priority: String,
    #[sea_orm(column_type = "Text")]
    pub forbidden_overlaps: String,
    #[sea_orm(column_type = "Text")]
    pub prereq: String,
    #[sea_orm(column_type = "Text")]
    pub coreq: String,
    #[sea_orm(column_type = "Text")]
    pub fee: String,
    pub acad_career: String,
    pub acad_group: String,
    pub last_offered_semester: String,
    pub last_offered_year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_attributes::Entity")]
    CourseAttributes,
    #[sea_orm(has_many = "super::enroll_groups::Entity")]
    EnrollGroups,
}

impl Related<super::course_attributes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseAttributes.def()
    }
}

impl Related<super::enroll_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnrollGroups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
