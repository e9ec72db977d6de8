use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One connected component of mutually cross-listed enrollment groups for
/// a semester. Membership lives entirely on `enroll_groups.combined_group_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "combined_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub semester: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enroll_groups::Entity")]
    EnrollGroups,
}

impl Related<super::enroll_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnrollGroups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
