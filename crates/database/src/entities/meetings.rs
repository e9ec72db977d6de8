use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A scheduled meeting of a class section.
///
/// The catalog provides no stable meeting identity, so meetings are always
/// deleted and recreated in full when their section is re-imported.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meetings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub class_section_id: i32,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    /// Day pattern, e.g. "TR"
    pub pattern: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_sections::Entity",
        from = "Column::ClassSectionId",
        to = "super::class_sections::Column::Id",
        on_delete = "Cascade"
    )]
    ClassSection,
    #[sea_orm(has_many = "super::meeting_instructors::Entity")]
    MeetingInstructors,
}

impl Related<super::class_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSection.def()
    }
}

impl Related<super::meeting_instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeetingInstructors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
