use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A set of mutually conflicting requirements: one completed course may
/// satisfy at most one requirement per domain
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "requirement_domains")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub program_id: String,
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
    #[sea_orm(has_many = "super::requirement_domain_memberships::Entity")]
    Memberships,
}

impl Related<super::programs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Program.def()
    }
}

impl Related<super::requirement_domain_memberships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Memberships.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
