use crate::entities::{
    courses, enroll_groups, node_children, node_courses, programs,
    requirement_domain_memberships, requirement_domains, requirement_nodes, requirements,
};
use crate::error::ImportError;
use crate::services::validate::{SchemaValidator, read_yaml_as_json};
use log::{info, warn};
use models::program_spec::{NodeSpec, ProgramFile, QuerySpec, RequirementSpec};
use models::semester::Semester;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, NotSet, QueryFilter, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::Path;

/// Counters for one program import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgramStats {
    pub requirements: u32,
    pub nodes: u32,
    pub node_courses: u32,
    pub expanded_siblings: u32,
    pub domains: u32,
    pub skipped_unknown: u32,
}

impl Display for ProgramStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} requirements, {} nodes, {} course memberships \
             ({} from cross-listings), {} conflict domains, \
             {} unknown courses skipped",
            self.requirements,
            self.nodes,
            self.node_courses,
            self.expanded_siblings,
            self.domains,
            self.skipped_unknown
        )
    }
}

/// What a query needs to know about a catalog course
struct CourseFacts {
    subject: String,
    level: i32,
    last_offered: String,
}

struct GroupFacts {
    topic: String,
    semester: String,
    combined_group_id: Option<i32>,
}

/// In-memory view of the catalog, loaded once per import
struct CourseCatalog {
    facts: HashMap<String, CourseFacts>,
    groups_by_course: HashMap<String, Vec<GroupFacts>>,
    /// combined group id -> course ids of every member
    members_by_combined: HashMap<i32, Vec<String>>,
}

impl CourseCatalog {
    async fn load<C: ConnectionTrait>(conn: &C) -> Result<Self, ImportError> {
        let mut facts = HashMap::new();
        for course in courses::Entity::find().all(conn).await? {
            facts.insert(
                course.id,
                CourseFacts {
                    subject: course.subject,
                    level: course.level,
                    last_offered: course.last_offered_semester,
                },
            );
        }

        let mut groups_by_course: HashMap<String, Vec<GroupFacts>> = HashMap::new();
        let mut members_by_combined: HashMap<i32, Vec<String>> = HashMap::new();
        for group in enroll_groups::Entity::find().all(conn).await? {
            let topic = group.topic.unwrap_or_default();
            if let Some(combined_id) = group.combined_group_id {
                members_by_combined
                    .entry(combined_id)
                    .or_default()
                    .push(group.course_id.clone());
            }
            groups_by_course.entry(group.course_id).or_default().push(GroupFacts {
                topic,
                semester: group.semester,
                combined_group_id: group.combined_group_id,
            });
        }
        for members in members_by_combined.values_mut() {
            members.sort();
            members.dedup();
        }

        Ok(Self {
            facts,
            groups_by_course,
            members_by_combined,
        })
    }
}

/// Node rows and edges of one requirement tree, in insertion order
struct FlatNode {
    id: String,
    node_type: &'static str,
    title: Option<String>,
    pick: i32,
    query: Option<QuerySpec>,
}

/// Assigns stable node ids (`{req}_root`, then `{req}_1`, `{req}_2`, ...
/// in pre-order) and flattens the tree into rows plus ordered edges.
fn flatten_tree(
    requirement_id: &str,
    root: &NodeSpec,
) -> (Vec<FlatNode>, Vec<(String, String, i32)>) {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut counter = 0u32;
    let root_id = format!("{requirement_id}_root");
    flatten_into(requirement_id, root, root_id, &mut counter, &mut nodes, &mut edges);
    (nodes, edges)
}

fn flatten_into(
    requirement_id: &str,
    node: &NodeSpec,
    node_id: String,
    counter: &mut u32,
    nodes: &mut Vec<FlatNode>,
    edges: &mut Vec<(String, String, i32)>,
) {
    match node {
        NodeSpec::Group {
            title,
            pick,
            children,
        } => {
            nodes.push(FlatNode {
                id: node_id.clone(),
                node_type: node.type_name(),
                title: title.clone(),
                pick: *pick,
                query: None,
            });
            for (position, child) in children.iter().enumerate() {
                *counter += 1;
                let child_id = format!("{requirement_id}_{counter}");
                edges.push((node_id.clone(), child_id.clone(), position as i32));
                flatten_into(requirement_id, child, child_id, counter, nodes, edges);
            }
        }
        NodeSpec::CourseSet { title, pick, query } => {
            nodes.push(FlatNode {
                id: node_id,
                node_type: node.type_name(),
                title: title.clone(),
                pick: *pick,
                query: Some(query.clone()),
            });
        }
    }
}

/// Evaluates a course query against the catalog. Returns the matching
/// course ids, sorted, plus any `included` ids the catalog does not know.
fn resolve_query(
    query: &QuerySpec,
    facts: &HashMap<String, CourseFacts>,
) -> (Vec<String>, Vec<String>) {
    let mut matched = BTreeSet::new();
    let mut unknown = Vec::new();

    if let Some(subject) = &query.subject {
        for (course_id, course) in facts {
            if &course.subject != subject {
                continue;
            }
            if let Some(level) = query.level {
                if course.level != level {
                    continue;
                }
            }
            if let Some(min) = query.min_level {
                if course.level < min {
                    continue;
                }
            }
            if let Some(max) = query.max_level {
                if course.level > max {
                    continue;
                }
            }
            matched.insert(course_id.clone());
        }
    }

    // Explicit inclusions bypass the level filters
    for course_id in &query.included {
        if facts.contains_key(course_id) {
            matched.insert(course_id.clone());
        } else {
            unknown.push(course_id.clone());
        }
    }

    for course_id in &query.excluded {
        matched.remove(course_id);
    }

    (matched.into_iter().collect(), unknown)
}

/// Combined-group candidates for one (course, topic) membership, sorted.
///
/// Topic "" looks at the course's last-offered semester; a named topic
/// looks at the most recent semester in which that topic ran.
fn candidate_combined_ids(
    topic: &str,
    course: &CourseFacts,
    groups: &[GroupFacts],
) -> Result<Vec<i32>, ImportError> {
    let mut ids = Vec::new();

    if topic.is_empty() {
        for group in groups {
            if group.semester == course.last_offered {
                if let Some(id) = group.combined_group_id {
                    ids.push(id);
                }
            }
        }
    } else {
        // Recency is judged over the topic's combined runs only, so a more
        // recent uncombined offering does not hide an older cross-listing
        let combined: Vec<&GroupFacts> = groups
            .iter()
            .filter(|g| g.topic == topic && g.combined_group_id.is_some())
            .collect();
        let mut latest: Option<&str> = None;
        for group in &combined {
            latest = Some(match latest {
                None => group.semester.as_str(),
                Some(current) => {
                    if Semester::later(&group.semester, current)? {
                        group.semester.as_str()
                    } else {
                        current
                    }
                }
            });
        }
        if let Some(latest) = latest {
            for group in &combined {
                if group.semester == latest {
                    if let Some(id) = group.combined_group_id {
                        ids.push(id);
                    }
                }
            }
        }
    }

    ids.sort_unstable();
    ids.dedup();
    Ok(ids)
}

/// Unions the sibling courses of every candidate combined group, each
/// taken at the source membership's topic, tagged with the first candidate
/// that contributed a sibling.
fn choose_combined(
    course_id: &str,
    topic: &str,
    candidates: &[i32],
    members_by_combined: &HashMap<i32, Vec<String>>,
) -> Option<(i32, Vec<(String, String)>)> {
    let mut tagged = None;
    let mut sibling_courses: Vec<&String> = Vec::new();

    for &combined_id in candidates {
        let Some(members) = members_by_combined.get(&combined_id) else {
            continue;
        };
        let mut contributed = false;
        for member in members {
            if member != course_id {
                sibling_courses.push(member);
                contributed = true;
            }
        }
        if contributed && tagged.is_none() {
            tagged = Some(combined_id);
        }
    }

    sibling_courses.sort_unstable();
    sibling_courses.dedup();
    let siblings = sibling_courses
        .into_iter()
        .map(|course| (course.clone(), topic.to_string()))
        .collect();
    tagged.map(|combined_id| (combined_id, siblings))
}

pub struct ProgramImportService;

impl ProgramImportService {
    /// Validates a program file against the schema and deserializes it.
    pub fn load_file(path: &Path) -> Result<ProgramFile, ImportError> {
        let validator = SchemaValidator::programs()?;
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
    ) -> Result<ProgramStats, ImportError> {
        let file = Self::load_file(path)?;
        Self::import(db, &file).await
    }

    /// Replaces the program and everything under it in one transaction.
    /// Nothing of the old version survives a successful import; nothing
    /// of the new version lands if any step fails.
    pub async fn import(
        db: &DatabaseConnection,
        file: &ProgramFile,
    ) -> Result<ProgramStats, ImportError> {
        let txn = db.begin().await?;
        let catalog = CourseCatalog::load(&txn).await?;
        let mut stats = ProgramStats::default();
        let program_id = &file.program.id;

        Self::delete_program(&txn, program_id).await?;

        let onboarding = match &file.program.onboarding_courses {
            Some(course_ids) => {
                Some(serde_json::to_value(course_ids).map_err(|e| ImportError::Parse {
                    path: format!("{program_id}.onboarding_courses"),
                    message: e.to_string(),
                })?)
            }
            None => None,
        };
        programs::ActiveModel {
            id: Set(program_id.clone()),
            name: Set(file.program.name.clone()),
            program_type: Set(file.program.program_type.clone()),
            year_dependent: Set(file.program.year_dependent),
            major_dependent: Set(file.program.major_dependent),
            college_dependent: Set(file.program.college_dependent),
            concentration_dependent: Set(file.program.concentration_dependent),
            onboarding_courses: Set(onboarding),
        }
        .insert(&txn)
        .await?;

        for requirement in &file.requirements {
            Self::import_requirement(&txn, &catalog, program_id, requirement, &mut stats)
                .await?;
        }

        Self::import_conflict_domains(&txn, file, &mut stats).await?;

        txn.commit().await?;
        info!("imported program {program_id}: {stats}");
        Ok(stats)
    }

    /// `root_node_id` points back into the tree, so the pointers have to
    /// be cleared before the cascade delete runs.
    async fn delete_program(
        txn: &DatabaseTransaction,
        program_id: &str,
    ) -> Result<(), ImportError> {
        requirements::Entity::update_many()
            .col_expr(
                requirements::Column::RootNodeId,
                sea_orm::sea_query::Expr::value(Option::<String>::None),
            )
            .filter(requirements::Column::ProgramId.eq(program_id))
            .exec(txn)
            .await?;

        programs::Entity::delete_by_id(program_id).exec(txn).await?;
        Ok(())
    }

    async fn import_requirement(
        txn: &DatabaseTransaction,
        catalog: &CourseCatalog,
        program_id: &str,
        requirement: &RequirementSpec,
        stats: &mut ProgramStats,
    ) -> Result<(), ImportError> {
        let description = match &requirement.description {
            Some(paragraphs) => {
                Some(serde_json::to_value(paragraphs).map_err(|e| ImportError::Parse {
                    path: format!("{}.description", requirement.id),
                    message: e.to_string(),
                })?)
            }
            None => None,
        };
        requirements::ActiveModel {
            id: Set(requirement.id.clone()),
            program_id: Set(program_id.to_string()),
            name: Set(requirement.name.clone()),
            ui_type: Set(requirement.ui_type.clone()),
            description: Set(description),
            root_node_id: Set(None),
        }
        .insert(txn)
        .await?;
        stats.requirements += 1;

        let (nodes, edges) = flatten_tree(&requirement.id, &requirement.root_node);
        let root_id = nodes[0].id.clone();

        for node in &nodes {
            requirement_nodes::ActiveModel {
                id: Set(node.id.clone()),
                requirement_id: Set(requirement.id.clone()),
                node_type: Set(node.node_type.to_string()),
                title: Set(node.title.clone()),
                pick_count: Set(node.pick),
            }
            .insert(txn)
            .await?;
            stats.nodes += 1;
        }

        for (parent_id, child_id, position) in &edges {
            node_children::ActiveModel {
                parent_node_id: Set(parent_id.clone()),
                child_node_id: Set(child_id.clone()),
                position: Set(*position),
            }
            .insert(txn)
            .await?;
        }

        for node in &nodes {
            if let Some(query) = &node.query {
                Self::populate_node_courses(txn, catalog, &node.id, query, stats).await?;
            }
        }

        let mut backfill: requirements::ActiveModel =
            requirements::Entity::find_by_id(&requirement.id)
                .one(txn)
                .await?
                .ok_or_else(|| {
                    ImportError::Config(format!(
                        "requirement {} vanished during import",
                        requirement.id
                    ))
                })?
                .into();
        backfill.root_node_id = Set(Some(root_id));
        backfill.update(txn).await?;

        Ok(())
    }

    /// Resolves a COURSE_SET query and writes the memberships, expanding
    /// each matched course across its cross-listed siblings.
    async fn populate_node_courses(
        txn: &DatabaseTransaction,
        catalog: &CourseCatalog,
        node_id: &str,
        query: &QuerySpec,
        stats: &mut ProgramStats,
    ) -> Result<(), ImportError> {
        let (matched, unknown) = resolve_query(query, &catalog.facts);
        for course_id in &unknown {
            warn!("node {node_id}: included course {course_id} is not in the catalog");
            stats.skipped_unknown += 1;
        }

        let excluded: HashSet<&String> = query.excluded.iter().collect();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut rows: Vec<node_courses::ActiveModel> = Vec::new();

        for course_id in &matched {
            let Some(course) = catalog.facts.get(course_id) else {
                continue;
            };
            let override_ = query.course_overrides.get(course_id);
            let topics: Vec<String> = match override_ {
                Some(o) if !o.topics.is_empty() => o.topics.clone(),
                _ => vec![String::new()],
            };
            let groups = catalog
                .groups_by_course
                .get(course_id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            for topic in topics {
                let candidates = candidate_combined_ids(&topic, course, groups)?;
                let chosen = choose_combined(
                    course_id,
                    &topic,
                    &candidates,
                    &catalog.members_by_combined,
                );

                if seen.insert((course_id.clone(), topic.clone())) {
                    rows.push(node_courses::ActiveModel {
                        node_id: Set(node_id.to_string()),
                        course_id: Set(course_id.clone()),
                        topic: Set(topic.clone()),
                        combined_group_id: Set(chosen.as_ref().map(|(id, _)| *id)),
                        comment: Set(override_.and_then(|o| o.comment.clone())),
                        recommended: Set(override_.map(|o| o.recommended).unwrap_or(false)),
                    });
                }

                let Some((combined_id, siblings)) = chosen else {
                    continue;
                };
                for (sibling_course, sibling_topic) in siblings {
                    if excluded.contains(&sibling_course) {
                        warn!(
                            "node {node_id}: cross-listing {course_id} -> {sibling_course} \
                             suppressed by the exclusion list"
                        );
                        continue;
                    }
                    if !catalog.facts.contains_key(&sibling_course) {
                        warn!(
                            "node {node_id}: cross-listing {course_id} -> {sibling_course} \
                             is not in the catalog"
                        );
                        stats.skipped_unknown += 1;
                        continue;
                    }
                    if seen.insert((sibling_course.clone(), sibling_topic.clone())) {
                        rows.push(node_courses::ActiveModel {
                            node_id: Set(node_id.to_string()),
                            course_id: Set(sibling_course),
                            topic: Set(sibling_topic),
                            combined_group_id: Set(Some(combined_id)),
                            comment: Set(None),
                            recommended: Set(false),
                        });
                        stats.expanded_siblings += 1;
                    }
                }
            }
        }

        stats.node_courses += rows.len() as u32;
        if !rows.is_empty() {
            node_courses::Entity::insert_many(rows).exec(txn).await?;
        }
        Ok(())
    }

    async fn import_conflict_domains(
        txn: &DatabaseTransaction,
        file: &ProgramFile,
        stats: &mut ProgramStats,
    ) -> Result<(), ImportError> {
        let known: HashSet<&String> = file.requirements.iter().map(|r| &r.id).collect();

        for domain in &file.program.conflict_domains {
            let members: Vec<&String> =
                domain.iter().filter(|id| known.contains(*id)).collect();
            for requirement_id in domain {
                if !known.contains(requirement_id) {
                    warn!(
                        "program {}: conflict domain names unknown requirement {requirement_id}",
                        file.program.id
                    );
                }
            }
            if members.len() < 2 {
                continue;
            }

            let domain_id = requirement_domains::Entity::insert(
                requirement_domains::ActiveModel {
                    id: NotSet,
                    program_id: Set(file.program.id.clone()),
                },
            )
            .exec(txn)
            .await?
            .last_insert_id;
            stats.domains += 1;

            for requirement_id in members {
                requirement_domain_memberships::ActiveModel {
                    domain_id: Set(domain_id),
                    requirement_id: Set(requirement_id.clone()),
                }
                .insert(txn)
                .await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn facts(entries: &[(&str, &str, i32, &str)]) -> HashMap<String, CourseFacts> {
        entries
            .iter()
            .map(|(id, subject, level, last)| {
                (
                    id.to_string(),
                    CourseFacts {
                        subject: subject.to_string(),
                        level: *level,
                        last_offered: last.to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_flatten_tree_assigns_preorder_ids() {
        let root = NodeSpec::Group {
            title: Some("Core".to_string()),
            pick: 2,
            children: vec![
                NodeSpec::CourseSet {
                    title: None,
                    pick: 1,
                    query: QuerySpec::default(),
                },
                NodeSpec::Group {
                    title: None,
                    pick: 1,
                    children: vec![NodeSpec::CourseSet {
                        title: None,
                        pick: 1,
                        query: QuerySpec::default(),
                    }],
                },
            ],
        };
        let (nodes, edges) = flatten_tree("cs_core", &root);

        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["cs_core_root", "cs_core_1", "cs_core_2", "cs_core_3"]);
        assert_eq!(
            edges,
            vec![
                ("cs_core_root".into(), "cs_core_1".into(), 0),
                ("cs_core_root".into(), "cs_core_2".into(), 1),
                ("cs_core_2".into(), "cs_core_3".into(), 0),
            ]
        );
        assert_eq!(nodes[0].node_type, "GROUP");
        assert_eq!(nodes[1].node_type, "COURSE_SET");
    }

    #[test]
    fn test_resolve_query_subject_and_levels() {
        let facts = facts(&[
            ("CS1110", "CS", 1, "FA25"),
            ("CS4820", "CS", 4, "FA25"),
            ("CS5820", "CS", 5, "FA25"),
            ("MATH4710", "MATH", 4, "FA25"),
        ]);
        let query = QuerySpec {
            subject: Some("CS".to_string()),
            min_level: Some(4),
            max_level: Some(4),
            ..Default::default()
        };
        let (matched, unknown) = resolve_query(&query, &facts);
        assert_eq!(matched, ["CS4820"]);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_resolve_query_included_bypasses_level_filter() {
        let facts = facts(&[("CS1110", "CS", 1, "FA25"), ("CS4820", "CS", 4, "FA25")]);
        let query = QuerySpec {
            subject: Some("CS".to_string()),
            min_level: Some(4),
            included: vec!["CS1110".to_string(), "CS9999".to_string()],
            ..Default::default()
        };
        let (matched, unknown) = resolve_query(&query, &facts);
        assert_eq!(matched, ["CS1110", "CS4820"]);
        assert_eq!(unknown, ["CS9999"]);
    }

    #[test]
    fn test_resolve_query_excluded_wins() {
        let facts = facts(&[("CS4820", "CS", 4, "FA25"), ("CS4850", "CS", 4, "FA25")]);
        let query = QuerySpec {
            subject: Some("CS".to_string()),
            excluded: vec!["CS4850".to_string()],
            ..Default::default()
        };
        let (matched, _) = resolve_query(&query, &facts);
        assert_eq!(matched, ["CS4820"]);
    }

    fn group(topic: &str, semester: &str, combined: Option<i32>) -> GroupFacts {
        GroupFacts {
            topic: topic.to_string(),
            semester: semester.to_string(),
            combined_group_id: combined,
        }
    }

    #[test]
    fn test_candidates_blank_topic_uses_last_offered_semester() {
        let course = CourseFacts {
            subject: "CS".to_string(),
            level: 4,
            last_offered: "FA25".to_string(),
        };
        let groups = vec![
            group("", "FA25", Some(7)),
            group("", "SP25", Some(3)),
            group("", "FA25", None),
        ];
        let ids = candidate_combined_ids("", &course, &groups).unwrap();
        assert_eq!(ids, [7]);
    }

    #[test]
    fn test_candidates_named_topic_uses_most_recent_run() {
        let course = CourseFacts {
            subject: "CS".to_string(),
            level: 4,
            last_offered: "FA25".to_string(),
        };
        // The topic last ran SP25 even though the course ran FA25
        let groups = vec![
            group("Compilers", "SP25", Some(4)),
            group("Compilers", "FA24", Some(2)),
            group("", "FA25", Some(9)),
        ];
        let ids = candidate_combined_ids("Compilers", &course, &groups).unwrap();
        assert_eq!(ids, [4]);
    }

    #[test]
    fn test_candidates_are_sorted_and_deduped() {
        let course = CourseFacts {
            subject: "CS".to_string(),
            level: 4,
            last_offered: "FA25".to_string(),
        };
        let groups = vec![
            group("", "FA25", Some(9)),
            group("", "FA25", Some(2)),
            group("", "FA25", Some(9)),
        ];
        let ids = candidate_combined_ids("", &course, &groups).unwrap();
        assert_eq!(ids, [2, 9]);
    }

    fn cluster(courses: &[&str]) -> Vec<String> {
        courses.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_candidates_named_topic_skips_uncombined_recent_run() {
        let course = CourseFacts {
            subject: "CS".to_string(),
            level: 4,
            last_offered: "FA25".to_string(),
        };
        // The FA25 run was not cross-listed; the SP25 combined run still counts
        let groups = vec![
            group("Compilers", "FA25", None),
            group("Compilers", "SP25", Some(4)),
        ];
        let ids = candidate_combined_ids("Compilers", &course, &groups).unwrap();
        assert_eq!(ids, [4]);
    }

    #[test]
    fn test_choose_combined_skips_singleton_clusters() {
        let members = HashMap::from([
            (1, cluster(&["CS4740"])),
            (2, cluster(&["CS4740", "LING4474"])),
        ]);
        let (chosen, siblings) = choose_combined("CS4740", "", &[1, 2], &members).unwrap();
        assert_eq!(chosen, 2);
        assert_eq!(siblings, vec![("LING4474".to_string(), "".to_string())]);
    }

    #[test]
    fn test_choose_combined_unions_all_candidates() {
        let members = HashMap::from([
            (1, cluster(&["CS4740", "COGST4740"])),
            (2, cluster(&["CS4740", "LING4474"])),
        ]);
        let (chosen, siblings) = choose_combined("CS4740", "", &[1, 2], &members).unwrap();
        assert_eq!(chosen, 1);
        assert_eq!(
            siblings,
            vec![
                ("COGST4740".to_string(), "".to_string()),
                ("LING4474".to_string(), "".to_string()),
            ]
        );
    }

    #[test]
    fn test_choose_combined_siblings_take_source_topic() {
        let members = HashMap::from([(5, cluster(&["CS4740", "LING4474"]))]);
        let (_, siblings) = choose_combined("CS4740", "Advanced NLP", &[5], &members).unwrap();
        assert_eq!(
            siblings,
            vec![("LING4474".to_string(), "Advanced NLP".to_string())]
        );
    }

    #[test]
    fn test_choose_combined_none_without_siblings() {
        let members = HashMap::from([(1, cluster(&["CS4740"]))]);
        assert!(choose_combined("CS4740", "", &[1], &members).is_none());
    }
}
