use crate::entities::{
    class_sections, course_attributes, courses, enroll_groups, instructors, meeting_instructors,
    meetings, subjects,
};
use crate::error::ImportError;
use log::{info, warn};
use models::catalog::{
    RawClass, RawClassSection, RawEnrollGroup, RawMeeting, RawSubject, parse_api_date,
};
use models::matching::MatchingKey;
use models::semester::Semester;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, NotSet, QueryFilter, TransactionTrait,
};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Counters returned by one import run for observability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub courses_created: u32,
    pub courses_updated: u32,
    pub courses_historical: u32,
    pub enroll_groups_created: u32,
    pub enroll_groups_matched: u32,
    pub class_sections_created: u32,
    pub class_sections_updated: u32,
    pub meetings_rebuilt: u32,
    pub failed: u32,
}

impl ImportStats {
    /// Folds another page's counters into this one.
    pub fn absorb(&mut self, other: &ImportStats) {
        self.courses_created += other.courses_created;
        self.courses_updated += other.courses_updated;
        self.courses_historical += other.courses_historical;
        self.enroll_groups_created += other.enroll_groups_created;
        self.enroll_groups_matched += other.enroll_groups_matched;
        self.class_sections_created += other.class_sections_created;
        self.class_sections_updated += other.class_sections_updated;
        self.meetings_rebuilt += other.meetings_rebuilt;
        self.failed += other.failed;
    }
}

impl Display for ImportStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "courses {}/{}/{} (created/updated/historical), \
             groups {}/{} (created/matched), \
             sections {}/{} (created/updated), \
             meetings rebuilt {}, failed {}",
            self.courses_created,
            self.courses_updated,
            self.courses_historical,
            self.enroll_groups_created,
            self.enroll_groups_matched,
            self.class_sections_created,
            self.class_sections_updated,
            self.meetings_rebuilt,
            self.failed
        )
    }
}

/// What the importer is allowed to do to an existing course row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoursePolicy {
    /// Course absent: create it and stamp last-offered
    Create,
    /// Import semester >= last offered: overwrite descriptive fields
    Refresh,
    /// Import semester is strictly earlier: leave the course row alone
    Historical,
}

impl CoursePolicy {
    /// Decides the scenario from the stored last-offered semester. Section
    /// and meeting data for a historical semester is still recorded; only
    /// the course row itself is protected.
    pub fn decide(
        import_semester: &str,
        last_offered: Option<&str>,
    ) -> Result<Self, ImportError> {
        match last_offered {
            None => Ok(Self::Create),
            Some(current) => {
                if Semester::later_or_equal(import_semester, current)? {
                    Ok(Self::Refresh)
                } else {
                    Ok(Self::Historical)
                }
            }
        }
    }
}

pub struct CourseImportService;

impl CourseImportService {
    /// Upserts the subject table from the catalog's subject listing and
    /// returns the subject codes, in listing order.
    pub async fn initialize_subjects(
        db: &DatabaseConnection,
        raw_subjects: &[RawSubject],
    ) -> Result<Vec<String>, ImportError> {
        let txn = db.begin().await?;

        for raw in raw_subjects {
            let model = subjects::ActiveModel {
                value: Set(raw.value.clone()),
                description: Set(raw.descr.clone()),
                description_formal: Set(raw.descrformal.clone()),
            };
            match subjects::Entity::find_by_id(&raw.value).one(&txn).await? {
                Some(_) => {
                    model.update(&txn).await?;
                }
                None => {
                    model.insert(&txn).await?;
                }
            }
        }

        txn.commit().await?;
        info!("initialized {} subjects", raw_subjects.len());
        Ok(raw_subjects.iter().map(|s| s.value.clone()).collect())
    }

    /// Applies one fetched page (one subject, one semester) to the
    /// database inside a single transaction.
    ///
    /// A failure while processing one course record is logged, counted,
    /// and skipped; the rest of the page still commits. Only a failing
    /// final commit rolls the whole page back.
    pub async fn import_subject(
        db: &DatabaseConnection,
        semester: &str,
        classes: &[RawClass],
    ) -> Result<ImportStats, ImportError> {
        let semester_year = Semester::extract_year(semester)? as i32;
        let mut stats = ImportStats::default();

        if classes.is_empty() {
            info!("no course data for {semester}, nothing to import");
            return Ok(stats);
        }

        let txn = db.begin().await?;

        for (idx, class) in classes.iter().enumerate() {
            let course_id = class.course_id();
            if idx % 25 == 0 {
                info!("[{}/{}] importing {course_id}", idx + 1, classes.len());
            }

            if let Err(e) =
                Self::process_class(&txn, semester, semester_year, class, &mut stats).await
            {
                warn!("failed to import course {course_id}: {e}");
                stats.failed += 1;
            }
        }

        txn.commit().await?;
        info!("imported {semester}: {stats}");
        Ok(stats)
    }

    async fn process_class(
        txn: &DatabaseTransaction,
        semester: &str,
        semester_year: i32,
        class: &RawClass,
        stats: &mut ImportStats,
    ) -> Result<(), ImportError> {
        let course_id = class.course_id();
        let policy = Self::process_course(txn, semester, semester_year, class, stats).await?;
        let historical = policy == CoursePolicy::Historical;

        if class.enroll_groups.is_empty() {
            warn!("course {course_id} has no enroll groups");
            return Ok(());
        }

        for raw_group in &class.enroll_groups {
            let (group_id, created) =
                Self::process_enroll_group(txn, &course_id, semester, raw_group, historical)
                    .await?;
            if created {
                stats.enroll_groups_created += 1;
            } else {
                stats.enroll_groups_matched += 1;
            }

            for raw_section in &raw_group.class_sections {
                let (created, meeting_count) =
                    Self::process_class_section(txn, group_id, semester, raw_section).await?;
                if created {
                    stats.class_sections_created += 1;
                } else {
                    stats.class_sections_updated += 1;
                }
                stats.meetings_rebuilt += meeting_count;
            }
        }

        Ok(())
    }

    /// Creates, refreshes, or skips the course row per [`CoursePolicy`].
    async fn process_course(
        txn: &DatabaseTransaction,
        semester: &str,
        semester_year: i32,
        class: &RawClass,
        stats: &mut ImportStats,
    ) -> Result<CoursePolicy, ImportError> {
        let course_id = class.course_id();
        let existing = courses::Entity::find_by_id(&course_id).one(txn).await?;
        let policy = CoursePolicy::decide(
            semester,
            existing.as_ref().map(|c| c.last_offered_semester.as_str()),
        )?;

        match policy {
            CoursePolicy::Create => {
                Self::course_model(class, semester, semester_year)
                    .insert(txn)
                    .await?;
                Self::replace_attributes(txn, &course_id, class).await?;
                stats.courses_created += 1;
            }
            CoursePolicy::Refresh => {
                Self::course_model(class, semester, semester_year)
                    .update(txn)
                    .await?;
                Self::replace_attributes(txn, &course_id, class).await?;
                stats.courses_updated += 1;
            }
            CoursePolicy::Historical => {
                stats.courses_historical += 1;
            }
        }

        Ok(policy)
    }

    fn course_model(
        class: &RawClass,
        semester: &str,
        semester_year: i32,
    ) -> courses::ActiveModel {
        courses::ActiveModel {
            id: Set(class.course_id()),
            subject: Set(class.subject.clone()),
            number: Set(class.catalog_nbr.clone()),
            level: Set(class.level()),
            title_short: Set(class.title_short.clone()),
            title_long: Set(class.title_long.clone()),
            description: Set(class.description.clone()),
            enrollment_priority: Set(class.catalog_enrollment_priority.clone()),
            forbidden_overlaps: Set(class.catalog_forbidden_overlaps.clone()),
            prereq: Set(class.catalog_prereq.clone()),
            coreq: Set(class.catalog_coreq.clone()),
            fee: Set(class.catalog_fee.clone()),
            acad_career: Set(class.acad_career.clone()),
            acad_group: Set(class.acad_group.clone()),
            last_offered_semester: Set(semester.to_string()),
            last_offered_year: Set(semester_year),
        }
    }

    /// Attributes are fully replaced, never merged.
    async fn replace_attributes(
        txn: &DatabaseTransaction,
        course_id: &str,
        class: &RawClass,
    ) -> Result<(), ImportError> {
        course_attributes::Entity::delete_many()
            .filter(course_attributes::Column::CourseId.eq(course_id))
            .exec(txn)
            .await?;

        // Composite PK (course, value): collapse duplicate tags
        let mut seen = BTreeSet::new();
        let rows: Vec<course_attributes::ActiveModel> = class
            .crse_attrs
            .iter()
            .filter(|attr| !attr.crse_attr_value.trim().is_empty())
            .filter(|attr| seen.insert(attr.crse_attr_value.trim().to_string()))
            .map(|attr| {
                let attr_type = attr.attr_descr_short.trim();
                course_attributes::ActiveModel {
                    course_id: Set(course_id.to_string()),
                    attribute_value: Set(attr.crse_attr_value.trim().to_string()),
                    attribute_type: Set((!attr_type.is_empty()).then(|| attr_type.to_string())),
                }
            })
            .collect();

        if !rows.is_empty() {
            course_attributes::Entity::insert_many(rows).exec(txn).await?;
        }
        Ok(())
    }

    /// Matches an existing enroll group by (course, semester, matching key)
    /// or creates a new one. Metadata of a matched group is refreshed only
    /// for non-historical imports.
    async fn process_enroll_group(
        txn: &DatabaseTransaction,
        course_id: &str,
        semester: &str,
        raw_group: &RawEnrollGroup,
        historical: bool,
    ) -> Result<(i32, bool), ImportError> {
        let key = MatchingKey::compute(raw_group);
        let hints = Self::combination_hints(raw_group)?;

        let existing = enroll_groups::Entity::find()
            .filter(enroll_groups::Column::CourseId.eq(course_id))
            .filter(enroll_groups::Column::Semester.eq(semester))
            .filter(enroll_groups::Column::MatchingKind.eq(key.kind.as_str()))
            .filter(enroll_groups::Column::MatchingKey.eq(key.key.as_str()))
            .one(txn)
            .await?;

        if let Some(group) = existing {
            let group_id = group.id;
            if !historical {
                let mut refresh: enroll_groups::ActiveModel = group.into();
                refresh.credits_minimum = Set(raw_group.units_minimum);
                refresh.credits_maximum = Set(raw_group.units_maximum);
                refresh.grading_basis = Set(raw_group.grading_basis.clone());
                refresh.session_code = Set(raw_group.session_code.clone());
                refresh.combination_hints = Set(hints);
                refresh.update(txn).await?;
            }
            return Ok((group_id, false));
        }

        let model = enroll_groups::ActiveModel {
            id: NotSet,
            course_id: Set(course_id.to_string()),
            semester: Set(semester.to_string()),
            topic: Set(raw_group.topic().map(str::to_string)),
            matching_kind: Set(key.kind.as_str().to_string()),
            matching_key: Set(key.key),
            credits_minimum: Set(raw_group.units_minimum),
            credits_maximum: Set(raw_group.units_maximum),
            grading_basis: Set(raw_group.grading_basis.clone()),
            session_code: Set(raw_group.session_code.clone()),
            combination_hints: Set(hints),
            combined_group_id: Set(None),
        };
        let group_id = enroll_groups::Entity::insert(model)
            .exec(txn)
            .await?
            .last_insert_id;
        Ok((group_id, true))
    }

    fn combination_hints(
        raw_group: &RawEnrollGroup,
    ) -> Result<Option<serde_json::Value>, ImportError> {
        if raw_group.simple_combinations.is_empty() {
            return Ok(None);
        }
        serde_json::to_value(&raw_group.simple_combinations)
            .map(Some)
            .map_err(|e| ImportError::Parse {
                path: "simpleCombinations".to_string(),
                message: e.to_string(),
            })
    }

    /// Matches a section by number within its group, updating only the
    /// open status, or creates it. Meetings are rebuilt either way.
    async fn process_class_section(
        txn: &DatabaseTransaction,
        group_id: i32,
        semester: &str,
        raw_section: &RawClassSection,
    ) -> Result<(bool, u32), ImportError> {
        let existing = class_sections::Entity::find()
            .filter(class_sections::Column::EnrollGroupId.eq(group_id))
            .filter(class_sections::Column::SectionNumber.eq(raw_section.section.as_str()))
            .one(txn)
            .await?;

        if let Some(section) = existing {
            let section_id = section.id;
            let old_status = section.open_status.clone();
            if old_status != raw_section.open_status {
                info!(
                    "section {} {}: status {:?} -> {:?}",
                    semester, raw_section.section, old_status, raw_section.open_status
                );
                let mut update: class_sections::ActiveModel = section.into();
                update.open_status = Set(raw_section.open_status.clone());
                update.update(txn).await?;
            }

            meetings::Entity::delete_many()
                .filter(meetings::Column::ClassSectionId.eq(section_id))
                .exec(txn)
                .await?;
            let count = Self::create_meetings(txn, section_id, &raw_section.meetings).await?;
            return Ok((false, count));
        }

        let topic = raw_section.topic_description.trim();
        let model = class_sections::ActiveModel {
            id: NotSet,
            enroll_group_id: Set(group_id),
            section_number: Set(raw_section.section.clone()),
            class_nbr: Set(raw_section.class_nbr),
            semester: Set(semester.to_string()),
            section_type: Set(raw_section.ssr_component.clone()),
            campus: Set(raw_section.campus.clone()),
            location: Set(raw_section.location.clone()),
            start_date: Set(parse_api_date(raw_section.start_dt.as_deref())),
            end_date: Set(parse_api_date(raw_section.end_dt.as_deref())),
            add_consent: Set(raw_section.add_consent.clone()),
            is_component_graded: Set(raw_section.is_component_graded),
            instruction_mode: Set(raw_section.instruction_mode.clone()),
            section_topic: Set((!topic.is_empty()).then(|| topic.to_string())),
            open_status: Set(raw_section.open_status.clone()),
        };
        let section_id = class_sections::Entity::insert(model)
            .exec(txn)
            .await?
            .last_insert_id;

        let count = Self::create_meetings(txn, section_id, &raw_section.meetings).await?;
        Ok((true, count))
    }

    async fn create_meetings(
        txn: &DatabaseTransaction,
        section_id: i32,
        raw_meetings: &[RawMeeting],
    ) -> Result<u32, ImportError> {
        let mut count = 0;

        for raw_meeting in raw_meetings {
            let model = meetings::ActiveModel {
                id: NotSet,
                class_section_id: Set(section_id),
                time_start: Set(raw_meeting.time_start.clone()),
                time_end: Set(raw_meeting.time_end.clone()),
                pattern: Set(raw_meeting.pattern.clone()),
                start_date: Set(parse_api_date(raw_meeting.start_dt.as_deref())),
                end_date: Set(parse_api_date(raw_meeting.end_dt.as_deref())),
            };
            let meeting_id = meetings::Entity::insert(model)
                .exec(txn)
                .await?
                .last_insert_id;
            count += 1;

            let mut seen = BTreeSet::new();
            for raw_instructor in &raw_meeting.instructors {
                let netid = raw_instructor.netid.trim();
                if netid.is_empty() || !seen.insert(netid.to_string()) {
                    continue;
                }

                Self::upsert_instructor(txn, netid, raw_instructor).await?;
                meeting_instructors::ActiveModel {
                    meeting_id: Set(meeting_id),
                    instructor_netid: Set(netid.to_string()),
                    assign_seq: Set(raw_instructor.instr_assign_seq.unwrap_or(1)),
                }
                .insert(txn)
                .await?;
            }
        }

        Ok(count)
    }

    async fn upsert_instructor<C: ConnectionTrait>(
        conn: &C,
        netid: &str,
        raw: &models::catalog::RawInstructor,
    ) -> Result<(), ImportError> {
        let model = instructors::ActiveModel {
            netid: Set(netid.to_string()),
            first_name: Set(raw.first_name.clone()),
            middle_name: Set(raw.middle_name.clone()),
            last_name: Set(raw.last_name.clone()),
        };
        match instructors::Entity::find_by_id(netid).one(conn).await? {
            Some(_) => {
                model.update(conn).await?;
            }
            None => {
                model.insert(conn).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_policy_create_when_absent() {
        assert_eq!(
            CoursePolicy::decide("SP26", None).unwrap(),
            CoursePolicy::Create
        );
    }

    #[test]
    fn test_policy_refresh_when_later_or_equal() {
        assert_eq!(
            CoursePolicy::decide("FA26", Some("SP26")).unwrap(),
            CoursePolicy::Refresh
        );
        assert_eq!(
            CoursePolicy::decide("SP26", Some("SP26")).unwrap(),
            CoursePolicy::Refresh
        );
    }

    #[test]
    fn test_policy_historical_leaves_course_untouched() {
        // CS4820 last offered FA25; importing SP25 must not refresh it
        assert_eq!(
            CoursePolicy::decide("SP25", Some("FA25")).unwrap(),
            CoursePolicy::Historical
        );
    }

    #[test]
    fn test_policy_invalid_semester_is_an_error() {
        assert!(CoursePolicy::decide("XX99", Some("SP26")).is_err());
    }

    #[test]
    fn test_stats_absorb() {
        let mut total = ImportStats::default();
        let page = ImportStats {
            courses_created: 2,
            enroll_groups_created: 5,
            meetings_rebuilt: 7,
            failed: 1,
            ..Default::default()
        };
        total.absorb(&page);
        total.absorb(&page);
        assert_eq!(total.courses_created, 4);
        assert_eq!(total.enroll_groups_created, 10);
        assert_eq!(total.meetings_rebuilt, 14);
        assert_eq!(total.failed, 2);
    }
}
