use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A degree program (major or minor) owning a forest of requirements
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "programs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    /// "major" / "minor"
    pub program_type: String,
    pub year_dependent: bool,
    pub major_dependent: bool,
    pub college_dependent: bool,
    pub concentration_dependent: bool,
    /// JSON array of course ids shown during onboarding
    pub onboarding_courses: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::requirements::Entity")]
    Requirements,
    #[sea_orm(has_many = "super::requirement_domains::Entity")]
    RequirementDomains,
}

impl Related<super::requirements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requirements.def()
    }
}

impl Related<super::requirement_domains::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequirementDomains.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
