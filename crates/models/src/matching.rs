use crate::catalog::RawEnrollGroup;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Instructional-format code for independent studies, whose sections are
/// distinguished by supervising instructor rather than section number.
pub const INDEPENDENT_STUDY_COMPONENT: &str = "IND";

/// Sentinel key for the rare group that reports no class sections at all.
pub const UNKNOWN_SECTION_KEY: &str = "UNKNOWN";

/// Which field of the raw group the matching key was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    Topic,
    Instructor,
    SectionName,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Instructor => "instructor",
            Self::SectionName => "section_name",
        }
    }
}

impl Display for MatchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topic" => Ok(Self::Topic),
            "instructor" => Ok(Self::Instructor),
            "section_name" => Ok(Self::SectionName),
            other => Err(format!("unknown match kind: {other}")),
        }
    }
}

/// Stable identity of an enrollment group within its course
///
/// The (course, semester, kind, key) tuple is the join predicate that
/// decides whether a fetched group is the same as one already persisted;
/// repeated imports rely on it being unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchingKey {
    pub kind: MatchKind,
    pub key: String,
}

impl MatchingKey {
    /// Derives the key from a raw group via the fallback chain:
    ///
    /// 1. first non-empty section topic, in section order;
    /// 2. independent-study groups with an instructor: the netid of the
    ///    first instructor of the first section's first meeting;
    /// 3. component type + section number of the first section;
    /// 4. no sections at all: the `UNKNOWN` sentinel.
    pub fn compute(group: &RawEnrollGroup) -> Self {
        let Some(first_section) = group.class_sections.first() else {
            return Self {
                kind: MatchKind::SectionName,
                key: UNKNOWN_SECTION_KEY.to_string(),
            };
        };

        if let Some(topic) = group.topic() {
            return Self {
                kind: MatchKind::Topic,
                key: topic.to_string(),
            };
        }

        if first_section.ssr_component == INDEPENDENT_STUDY_COMPONENT {
            let netid = first_section
                .meetings
                .first()
                .and_then(|m| m.instructors.first())
                .map(|i| i.netid.trim())
                .filter(|n| !n.is_empty());
            if let Some(netid) = netid {
                return Self {
                    kind: MatchKind::Instructor,
                    key: netid.to_string(),
                };
            }
        }

        Self {
            kind: MatchKind::SectionName,
            key: format!("{}{}", first_section.ssr_component, first_section.section),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::catalog::{RawClassSection, RawInstructor, RawMeeting};

    fn section(component: &str, number: &str, topic: &str) -> RawClassSection {
        RawClassSection {
            ssr_component: component.into(),
            section: number.into(),
            topic_description: topic.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_section_name_fallback() {
        let group = RawEnrollGroup {
            class_sections: vec![section("LEC", "001", "")],
            ..Default::default()
        };
        let key = MatchingKey::compute(&group);
        assert_eq!(key.kind, MatchKind::SectionName);
        assert_eq!(key.key, "LEC001");
    }

    #[test]
    fn test_topic_wins_over_everything() {
        let group = RawEnrollGroup {
            class_sections: vec![
                section("LEC", "001", ""),
                section("DIS", "201", "Algorithmic Game Theory"),
            ],
            ..Default::default()
        };
        let key = MatchingKey::compute(&group);
        assert_eq!(key.kind, MatchKind::Topic);
        assert_eq!(key.key, "Algorithmic Game Theory");
    }

    #[test]
    fn test_independent_study_uses_first_instructor() {
        let mut ind = section("IND", "601", "");
        ind.meetings = vec![RawMeeting {
            instructors: vec![
                RawInstructor {
                    netid: "ab123".into(),
                    ..Default::default()
                },
                RawInstructor {
                    netid: "cd456".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }];
        let group = RawEnrollGroup {
            class_sections: vec![ind],
            ..Default::default()
        };
        let key = MatchingKey::compute(&group);
        assert_eq!(key.kind, MatchKind::Instructor);
        assert_eq!(key.key, "ab123");
    }

    #[test]
    fn test_independent_study_without_instructor_falls_back() {
        let group = RawEnrollGroup {
            class_sections: vec![section("IND", "601", "")],
            ..Default::default()
        };
        let key = MatchingKey::compute(&group);
        assert_eq!(key.kind, MatchKind::SectionName);
        assert_eq!(key.key, "IND601");
    }

    #[test]
    fn test_empty_group_sentinel() {
        let key = MatchingKey::compute(&RawEnrollGroup::default());
        assert_eq!(key.kind, MatchKind::SectionName);
        assert_eq!(key.key, UNKNOWN_SECTION_KEY);
    }

    #[test]
    fn test_determinism() {
        let group = RawEnrollGroup {
            class_sections: vec![section("SEM", "101", "Topics in Logic")],
            ..Default::default()
        };
        assert_eq!(MatchingKey::compute(&group), MatchingKey::compute(&group));
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [MatchKind::Topic, MatchKind::Instructor, MatchKind::SectionName] {
            assert_eq!(kind.as_str().parse::<MatchKind>().unwrap(), kind);
        }
        assert!("nope".parse::<MatchKind>().is_err());
    }
}
