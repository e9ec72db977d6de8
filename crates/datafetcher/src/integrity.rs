use crate::client::CatalogClient;
use database::ImportError;
use database::entities::{courses, enroll_groups};
use futures::future::join_all;
use log::{info, warn};
use models::catalog::RawClass;
use models::matching::MatchingKey;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Identity of one enroll group for cross-checking: the course plus the
/// matching key the importer would compute for it.
type GroupKey = (String, String, String);

/// Discrepancies between the catalog API and the database for one
/// semester. Empty vectors mean the two sides agree.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub semester: String,
    pub subjects_checked: u32,
    /// Courses the API offers that the database is missing
    pub missing_courses: Vec<String>,
    /// Courses the database holds for this semester but the API does not
    pub extra_courses: Vec<String>,
    pub missing_groups: Vec<GroupKey>,
    pub extra_groups: Vec<GroupKey>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.missing_courses.is_empty()
            && self.extra_courses.is_empty()
            && self.missing_groups.is_empty()
            && self.extra_groups.is_empty()
    }
}

impl Display for IntegrityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(
            f,
            "integrity check for {} ({} subjects):",
            self.semester, self.subjects_checked
        )?;
        if self.is_clean() {
            return write!(f, "  database matches the catalog API");
        }
        writeln!(
            f,
            "  courses: {} missing, {} extra",
            self.missing_courses.len(),
            self.extra_courses.len()
        )?;
        for course_id in &self.missing_courses {
            writeln!(f, "    missing course {course_id}")?;
        }
        for course_id in &self.extra_courses {
            writeln!(f, "    extra course {course_id}")?;
        }
        write!(
            f,
            "  enroll groups: {} missing, {} extra",
            self.missing_groups.len(),
            self.extra_groups.len()
        )?;
        for (course_id, kind, key) in &self.missing_groups {
            write!(f, "\n    missing group {course_id} [{kind}={key}]")?;
        }
        for (course_id, kind, key) in &self.extra_groups {
            write!(f, "\n    extra group {course_id} [{kind}={key}]")?;
        }
        Ok(())
    }
}

/// Pure two-way set difference, both sides sorted.
fn diff<T: Ord + Clone>(api: &BTreeSet<T>, db: &BTreeSet<T>) -> (Vec<T>, Vec<T>) {
    let missing = api.difference(db).cloned().collect();
    let extra = db.difference(api).cloned().collect();
    (missing, extra)
}

/// Collects course ids and group keys from one subject's API records.
fn collect_api_side(classes: &[RawClass]) -> (BTreeSet<String>, BTreeSet<GroupKey>) {
    let mut course_ids = BTreeSet::new();
    let mut group_keys = BTreeSet::new();
    for class in classes {
        let course_id = class.course_id();
        course_ids.insert(course_id.clone());
        for group in &class.enroll_groups {
            let key = MatchingKey::compute(group);
            group_keys.insert((course_id.clone(), key.kind.as_str().to_string(), key.key));
        }
    }
    (course_ids, group_keys)
}

pub struct IntegrityChecker;

impl IntegrityChecker {
    /// Compares the catalog API against the database for one semester.
    ///
    /// A course "exists" for the semester when it has at least one enroll
    /// group in it; the course rows themselves outlive any semester.
    pub async fn check(
        db: &DatabaseConnection,
        client: &CatalogClient,
        semester: &str,
        target_subjects: &[String],
    ) -> Result<IntegrityReport, ImportError> {
        let mut report = IntegrityReport {
            semester: semester.to_string(),
            ..Default::default()
        };

        let mut subjects: Vec<String> = client
            .fetch_subjects(semester)
            .await
            .into_iter()
            .map(|s| s.value)
            .collect();
        if !target_subjects.is_empty() {
            subjects.retain(|s| target_subjects.contains(s));
        }
        if subjects.is_empty() {
            warn!("no subjects to check for {semester}");
            return Ok(report);
        }

        // API side, all subjects fetched concurrently
        let fetches = subjects
            .iter()
            .map(|subject| client.fetch_courses(semester, subject));
        let mut api_courses: BTreeSet<String> = BTreeSet::new();
        let mut api_groups: BTreeSet<GroupKey> = BTreeSet::new();
        for classes in join_all(fetches).await {
            let (course_ids, group_keys) = collect_api_side(&classes);
            api_courses.extend(course_ids);
            api_groups.extend(group_keys);
            report.subjects_checked += 1;
        }

        // Database side, restricted to the checked subjects
        let subject_of: BTreeMap<String, String> = courses::Entity::find()
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.subject))
            .collect();

        let mut db_courses: BTreeSet<String> = BTreeSet::new();
        let mut db_groups: BTreeSet<GroupKey> = BTreeSet::new();
        for group in enroll_groups::Entity::find()
            .filter(enroll_groups::Column::Semester.eq(semester))
            .all(db)
            .await?
        {
            let in_scope = subject_of
                .get(&group.course_id)
                .map(|subject| subjects.contains(subject))
                .unwrap_or(false);
            if !in_scope {
                continue;
            }
            db_courses.insert(group.course_id.clone());
            db_groups.insert((group.course_id, group.matching_kind, group.matching_key));
        }

        (report.missing_courses, report.extra_courses) = diff(&api_courses, &db_courses);
        (report.missing_groups, report.extra_groups) = diff(&api_groups, &db_groups);

        info!(
            "checked {} subjects for {semester}: {} course and {} group discrepancies",
            report.subjects_checked,
            report.missing_courses.len() + report.extra_courses.len(),
            report.missing_groups.len() + report.extra_groups.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diff_reports_both_directions() {
        let api = set(&["CS1110", "CS2110", "CS4820"]);
        let db = set(&["CS2110", "CS4820", "CS9999"]);
        let (missing, extra) = diff(&api, &db);
        assert_eq!(missing, ["CS1110"]);
        assert_eq!(extra, ["CS9999"]);
    }

    #[test]
    fn test_diff_identical_sets_are_clean() {
        let api = set(&["CS1110"]);
        let (missing, extra) = diff(&api, &api.clone());
        assert!(missing.is_empty());
        assert!(extra.is_empty());
    }

    #[test]
    fn test_collect_api_side_uses_matching_keys() {
        let json = serde_json::json!([{
            "subject": "CS",
            "catalogNbr": "4820",
            "enrollGroups": [{
                "classSections": [{
                    "ssrComponent": "LEC",
                    "section": "001",
                    "meetings": []
                }]
            }]
        }]);
        let classes: Vec<RawClass> = serde_json::from_value(json).unwrap();
        let (course_ids, group_keys) = collect_api_side(&classes);
        assert!(course_ids.contains("CS4820"));
        assert!(group_keys.contains(&(
            "CS4820".to_string(),
            "section_name".to_string(),
            "LEC001".to_string()
        )));
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = IntegrityReport::default();
        assert!(report.is_clean());
    }
}
