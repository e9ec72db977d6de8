use crate::entities::{college_programs, college_subjects, colleges, programs, subjects};
use crate::error::ImportError;
use crate::services::validate::{SchemaValidator, read_yaml_as_json};
use log::{info, warn};
use models::program_spec::CollegeFile;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DatabaseTransaction, EntityTrait,
    TransactionTrait,
};
use std::path::Path;

pub struct CollegeImportService;

impl CollegeImportService {
    /// Validates a college file against the schema and deserializes it.
    pub fn load_file(path: &Path) -> Result<CollegeFile, ImportError> {
        let validator = SchemaValidator::colleges()?;
        let instance = read_yaml_as_json(path)?;
        let violations = validator.check(&instance);
        if !violations.is_empty() {
            return Err(ImportError::Validation {
                path: path.display().to_string(),
                violations,
            });
        }
        serde_json::from_value(instance).map_err(|e| ImportError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub async fn import_file(
        db: &DatabaseConnection,
        path: &Path,
    ) -> Result<(), ImportError> {
        let file = Self::load_file(path)?;
        Self::import(db, &file).await
    }

    /// Replaces the college row and its program/subject links in one
    /// transaction. Links to programs or subjects the database does not
    /// know are skipped with a warning, not treated as fatal.
    pub async fn import(
        db: &DatabaseConnection,
        file: &CollegeFile,
    ) -> Result<(), ImportError> {
        let txn = db.begin().await?;
        let college_id = &file.college.id;

        // Cascade removes the old link rows
        colleges::Entity::delete_by_id(college_id).exec(&txn).await?;
        colleges::ActiveModel {
            id: Set(college_id.clone()),
            name: Set(file.college.name.clone()),
        }
        .insert(&txn)
        .await?;

        let mut linked_programs = 0u32;
        for program_id in &file.programs {
            if Self::program_exists(&txn, program_id).await? {
                college_programs::ActiveModel {
                    college_id: Set(college_id.clone()),
                    program_id: Set(program_id.clone()),
                }
                .insert(&txn)
                .await?;
                linked_programs += 1;
            } else {
                warn!("college {college_id}: program {program_id} has not been imported");
            }
        }

        let mut linked_subjects = 0u32;
        for subject_id in &file.subjects {
            if Self::subject_exists(&txn, subject_id).await? {
                college_subjects::ActiveModel {
                    college_id: Set(college_id.clone()),
                    subject_id: Set(subject_id.clone()),
                }
                .insert(&txn)
                .await?;
                linked_subjects += 1;
            } else {
                warn!("college {college_id}: subject {subject_id} is not in the catalog");
            }
        }

        txn.commit().await?;
        info!(
            "imported college {college_id}: {linked_programs} programs, \
             {linked_subjects} subjects"
        );
        Ok(())
    }

    async fn program_exists(
        txn: &DatabaseTransaction,
        program_id: &str,
    ) -> Result<bool, ImportError> {
        Ok(programs::Entity::find_by_id(program_id)
            .one(txn)
            .await?
            .is_some())
    }

    async fn subject_exists(
        txn: &DatabaseTransaction,
        subject_id: &str,
    ) -> Result<bool, ImportError> {
        Ok(subjects::Entity::find_by_id(subject_id)
            .one(txn)
            .await?
            .is_some())
    }
}
