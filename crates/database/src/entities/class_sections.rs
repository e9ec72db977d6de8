use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A section within an enrollment group, matched by section number.
///
/// `open_status` is the only field expected to change between repeated
/// imports of the same semester.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "class_sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub enroll_group_id: i32,
    /// Unique within the owning enroll group
    pub section_number: String,
    pub class_nbr: Option<i32>,
    pub semester: String,
    /// "LEC", "DIS", "LAB", "IND", ...
    pub section_type: String,
    pub campus: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub add_consent: Option<String>,
    pub is_component_graded: Option<bool>,
    pub instruction_mode: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub section_topic: Option<String>,
    /// "O" open, "C" closed, "W" waitlist
    pub open_status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enroll_groups::Entity",
        from = "Column::EnrollGroupId",
        to = "super::enroll_groups::Column::Id",
        on_delete = "Cascade"
    )]
    EnrollGroup,
    #[sea_orm(has_many = "super::meetings::Entity")]
    Meetings,
}

impl Related<super::enroll_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnrollGroup.def()
    }
}

impl Related<super::meetings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meetings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
