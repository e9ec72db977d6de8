use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Instructor, upserted by network id independent of meeting lifecycle
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub netid: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meeting_instructors::Entity")]
    MeetingInstructors,
}

impl Related<super::meeting_instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeetingInstructors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
