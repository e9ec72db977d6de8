use crate::entities::{combined_groups, enroll_groups};
use crate::error::ImportError;
use log::{info, warn};
use models::catalog::RawSimpleCombination;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, NotSet, QueryFilter, TransactionTrait,
};
use std::collections::HashMap;

/// Union-find over enroll-group indexes, scoped to one resolver run.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

/// Counters for one resolver run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    pub groups_considered: u32,
    pub combined_groups_created: u32,
    pub groups_linked: u32,
    pub unresolved_hints: u32,
}

pub struct CombinedGroupResolver;

impl CombinedGroupResolver {
    /// Recomputes cross-listing clusters for one semester from the
    /// combination hints stored on its enroll groups.
    ///
    /// The previous clustering for the semester is discarded first, so
    /// the result only reflects the current hint data.
    pub async fn resolve(
        db: &DatabaseConnection,
        semester: &str,
    ) -> Result<ResolveStats, ImportError> {
        let txn = db.begin().await?;
        let mut stats = ResolveStats::default();

        Self::clear_semester(&txn, semester).await?;

        let groups = enroll_groups::Entity::find()
            .filter(enroll_groups::Column::Semester.eq(semester))
            .all(&txn)
            .await?;
        stats.groups_considered = groups.len() as u32;

        if groups.is_empty() {
            txn.commit().await?;
            info!("no enroll groups for {semester}, nothing to resolve");
            return Ok(stats);
        }

        // Lookup tables for hint resolution
        let mut by_course_topic: HashMap<(String, String), usize> = HashMap::new();
        let mut by_course_key: HashMap<(String, String, String), usize> = HashMap::new();
        let mut by_course: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, group) in groups.iter().enumerate() {
            if let Some(topic) = group.topic.as_deref().filter(|t| !t.is_empty()) {
                by_course_topic.insert((group.course_id.clone(), topic.to_string()), idx);
            }
            by_course_key.insert(
                (
                    group.course_id.clone(),
                    group.matching_kind.clone(),
                    group.matching_key.clone(),
                ),
                idx,
            );
            by_course.entry(group.course_id.clone()).or_default().push(idx);
        }

        let mut set = DisjointSet::new(groups.len());

        for (idx, group) in groups.iter().enumerate() {
            let Some(hints) = &group.combination_hints else {
                continue;
            };
            let combinations: Vec<RawSimpleCombination> =
                serde_json::from_value(hints.clone()).map_err(|e| ImportError::Parse {
                    path: format!("enroll_groups.{}.combination_hints", group.id),
                    message: e.to_string(),
                })?;

            for hint in &combinations {
                let sibling_course = hint.course_id();
                if sibling_course == group.course_id {
                    continue;
                }
                match Self::resolve_hint(
                    &sibling_course,
                    group,
                    &by_course_topic,
                    &by_course_key,
                    &by_course,
                ) {
                    Some(sibling_idx) => set.union(idx, sibling_idx),
                    None => {
                        warn!(
                            "combination hint {} -> {sibling_course} did not match any \
                             enroll group in {semester}",
                            group.course_id
                        );
                        stats.unresolved_hints += 1;
                    }
                }
            }
        }

        // One combined-group row per cluster of two or more
        let mut cluster_sizes: HashMap<usize, u32> = HashMap::new();
        for idx in 0..groups.len() {
            *cluster_sizes.entry(set.find(idx)).or_default() += 1;
        }

        let mut cluster_ids: HashMap<usize, i32> = HashMap::new();
        for idx in 0..groups.len() {
            let root = set.find(idx);
            if cluster_sizes[&root] < 2 {
                continue;
            }
            let combined_id = match cluster_ids.get(&root) {
                Some(id) => *id,
                None => {
                    let id = combined_groups::Entity::insert(combined_groups::ActiveModel {
                        id: NotSet,
                        semester: Set(semester.to_string()),
                    })
                    .exec(&txn)
                    .await?
                    .last_insert_id;
                    cluster_ids.insert(root, id);
                    stats.combined_groups_created += 1;
                    id
                }
            };

            let mut link: enroll_groups::ActiveModel = groups[idx].clone().into();
            link.combined_group_id = Set(Some(combined_id));
            link.update(&txn).await?;
            stats.groups_linked += 1;
        }

        txn.commit().await?;
        info!(
            "resolved {semester}: {} combined groups, {} enroll groups linked, \
             {} unresolved hints",
            stats.combined_groups_created, stats.groups_linked, stats.unresolved_hints
        );
        Ok(stats)
    }

    /// Three-priority sibling lookup: identical non-empty topic, then
    /// identical matching key, then the target course's sole group.
    /// Anything still ambiguous stays unresolved.
    fn resolve_hint(
        sibling_course: &str,
        source: &enroll_groups::Model,
        by_course_topic: &HashMap<(String, String), usize>,
        by_course_key: &HashMap<(String, String, String), usize>,
        by_course: &HashMap<String, Vec<usize>>,
    ) -> Option<usize> {
        if let Some(topic) = source.topic.as_deref().filter(|t| !t.is_empty()) {
            if let Some(&idx) =
                by_course_topic.get(&(sibling_course.to_string(), topic.to_string()))
            {
                return Some(idx);
            }
        }
        if let Some(&idx) = by_course_key.get(&(
            sibling_course.to_string(),
            source.matching_kind.clone(),
            source.matching_key.clone(),
        )) {
            return Some(idx);
        }
        if let Some(indexes) = by_course.get(sibling_course) {
            if indexes.len() == 1 {
                return Some(indexes[0]);
            }
        }
        None
    }

    /// Deletes the semester's combined groups after detaching every
    /// enroll group that points at them.
    async fn clear_semester(
        txn: &DatabaseTransaction,
        semester: &str,
    ) -> Result<(), ImportError> {
        enroll_groups::Entity::update_many()
            .col_expr(
                enroll_groups::Column::CombinedGroupId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .filter(enroll_groups::Column::Semester.eq(semester))
            .exec(txn)
            .await?;

        combined_groups::Entity::delete_many()
            .filter(combined_groups::Column::Semester.eq(semester))
            .exec(txn)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_disjoint_set_union_and_find() {
        let mut set = DisjointSet::new(4);
        set.union(0, 1);
        set.union(2, 3);
        assert_eq!(set.find(0), set.find(1));
        assert_eq!(set.find(2), set.find(3));
        assert_ne!(set.find(0), set.find(2));
    }

    #[test]
    fn test_disjoint_set_transitive_closure() {
        // A links B, B links C: all three end up in one cluster even
        // though A never names C directly
        let mut set = DisjointSet::new(3);
        set.union(0, 1);
        set.union(1, 2);
        let root = set.find(0);
        assert_eq!(set.find(1), root);
        assert_eq!(set.find(2), root);
    }

    #[test]
    fn test_disjoint_set_order_independent() {
        let mut forward = DisjointSet::new(5);
        forward.union(0, 1);
        forward.union(1, 2);
        forward.union(3, 4);

        let mut reverse = DisjointSet::new(5);
        reverse.union(3, 4);
        reverse.union(1, 2);
        reverse.union(0, 1);

        for a in 0..5 {
            for b in 0..5 {
                assert_eq!(
                    forward.find(a) == forward.find(b),
                    reverse.find(a) == reverse.find(b),
                    "cluster membership differs for ({a}, {b})"
                );
            }
        }
    }

    type Indexes = (
        HashMap<(String, String), usize>,
        HashMap<(String, String, String), usize>,
        HashMap<String, Vec<usize>>,
    );

    fn model(course: &str, topic: &str, kind: &str, key: &str) -> enroll_groups::Model {
        enroll_groups::Model {
            id: 0,
            course_id: course.to_string(),
            semester: "FA25".to_string(),
            topic: (!topic.is_empty()).then(|| topic.to_string()),
            matching_kind: kind.to_string(),
            matching_key: key.to_string(),
            credits_minimum: None,
            credits_maximum: None,
            grading_basis: None,
            session_code: None,
            combination_hints: None,
            combined_group_id: None,
        }
    }

    fn index_groups(groups: &[&enroll_groups::Model]) -> Indexes {
        let mut by_course_topic = HashMap::new();
        let mut by_course_key = HashMap::new();
        let mut by_course: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, group) in groups.iter().enumerate() {
            if let Some(topic) = group.topic.as_deref().filter(|t| !t.is_empty()) {
                by_course_topic.insert((group.course_id.clone(), topic.to_string()), idx);
            }
            by_course_key.insert(
                (
                    group.course_id.clone(),
                    group.matching_kind.clone(),
                    group.matching_key.clone(),
                ),
                idx,
            );
            by_course.entry(group.course_id.clone()).or_default().push(idx);
        }
        (by_course_topic, by_course_key, by_course)
    }

    #[test]
    fn test_resolve_hint_topic_match_wins() {
        let source = model("CS4740", "NLP", "topic", "NLP");
        let target = model("LING4474", "NLP", "topic", "NLP");
        let decoy = model("LING4474", "Semantics", "topic", "Semantics");
        let (by_ct, by_ck, by_c) = index_groups(&[&source, &decoy, &target]);
        assert_eq!(
            CombinedGroupResolver::resolve_hint("LING4474", &source, &by_ct, &by_ck, &by_c),
            Some(2)
        );
    }

    #[test]
    fn test_resolve_hint_matching_key_fallback() {
        let source = model("CS2110", "", "section_name", "LEC001");
        let target = model("ENGRD2110", "", "section_name", "LEC001");
        let decoy = model("ENGRD2110", "", "section_name", "LEC002");
        let (by_ct, by_ck, by_c) = index_groups(&[&source, &decoy, &target]);
        assert_eq!(
            CombinedGroupResolver::resolve_hint("ENGRD2110", &source, &by_ct, &by_ck, &by_c),
            Some(2)
        );
    }

    #[test]
    fn test_resolve_hint_sole_group_elimination() {
        let source = model("CS2110", "", "section_name", "LEC001");
        let target = model("ENGRD2110", "", "section_name", "SEM101");
        let (by_ct, by_ck, by_c) = index_groups(&[&source, &target]);
        assert_eq!(
            CombinedGroupResolver::resolve_hint("ENGRD2110", &source, &by_ct, &by_ck, &by_c),
            Some(1)
        );
    }

    #[test]
    fn test_resolve_hint_ambiguous_is_unresolved() {
        let source = model("CS4740", "", "section_name", "LEC001");
        let a = model("LING4474", "Semantics", "topic", "Semantics");
        let b = model("LING4474", "Phonology", "topic", "Phonology");
        let (by_ct, by_ck, by_c) = index_groups(&[&source, &a, &b]);
        assert_eq!(
            CombinedGroupResolver::resolve_hint("LING4474", &source, &by_ct, &by_ck, &by_c),
            None
        );
    }
}
