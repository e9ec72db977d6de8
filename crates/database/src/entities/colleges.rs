use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "colleges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::college_programs::Entity")]
    CollegePrograms,
    #[sea_orm(has_many = "super::college_subjects::Entity")]
    CollegeSubjects,
}

impl Related<super::college_programs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollegePrograms.def()
    }
}

impl Related<super::college_subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollegeSubjects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
