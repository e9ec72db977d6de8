//! Serde shapes for the YAML-authored degree-requirement files.
//!
//! These mirror the authored document structure; schema validation happens
//! against the JSON schema before deserialization, so the types here can
//! assume structurally valid input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level document of one program YAML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramFile {
    pub program: ProgramHeader,
    #[serde(default)]
    pub requirements: Vec<RequirementSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramHeader {
    pub id: String,
    pub name: String,
    /// "major" or "minor"
    #[serde(rename = "type")]
    pub program_type: String,
    #[serde(default)]
    pub year_dependent: bool,
    #[serde(default)]
    pub major_dependent: bool,
    #[serde(default)]
    pub college_dependent: bool,
    #[serde(default)]
    pub concentration_dependent: bool,
    #[serde(default)]
    pub onboarding_courses: Option<Vec<String>>,
    #[serde(default)]
    pub relevant_subjects: Vec<String>,
    /// Each entry is one conflict domain: requirements that may not be
    /// satisfied by the same completed course.
    #[serde(default)]
    pub conflict_domains: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementSpec {
    pub id: String,
    pub name: String,
    pub ui_type: String,
    #[serde(default)]
    pub description: Option<Vec<String>>,
    pub root_node: NodeSpec,
}

/// One node of a requirement tree, discriminated by `type`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeSpec {
    /// Selection node: pick `pick` of the ordered children
    #[serde(rename = "GROUP")]
    Group {
        #[serde(default)]
        title: Option<String>,
        pick: i32,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    /// Leaf node populated by a course query
    #[serde(rename = "COURSE_SET")]
    CourseSet {
        #[serde(default)]
        title: Option<String>,
        pick: i32,
        #[serde(default)]
        query: QuerySpec,
    },
}

impl NodeSpec {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Group { .. } => "GROUP",
            Self::CourseSet { .. } => "COURSE_SET",
        }
    }
}

/// Declarative course query for a COURSE_SET node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub min_level: Option<i32>,
    #[serde(default)]
    pub max_level: Option<i32>,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
    /// Per-course refinements, keyed by course id. BTreeMap keeps the
    /// iteration order stable across imports.
    #[serde(default)]
    pub course_overrides: BTreeMap<String, CourseOverride>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseOverride {
    /// Non-empty list expands the course into one membership per topic.
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub recommended: bool,
}

/// Top-level document of one college YAML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeFile {
    pub college: CollegeHeader,
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeHeader {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_nested_requirement_tree() {
        let yaml = r#"
program:
  id: ARTH
  name: History of Art
  type: major
  year_dependent: true
  relevant_subjects: [ARTH]
  conflict_domains:
    - [arth1, arth2]
requirements:
  - id: arth1
    name: Core
    ui_type: LIST
    description:
      - Take all of the following.
    root_node:
      type: GROUP
      pick: 2
      children:
        - type: COURSE_SET
          pick: 1
          query:
            included: [ARTH1100]
        - type: COURSE_SET
          pick: 1
          query:
            subject: ARTH
            min_level: 4
            excluded: [ARTH4101]
            course_overrides:
              ARTH4155:
                topics: [Renaissance Seminar]
                recommended: true
"#;
        let file: ProgramFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.program.id, "ARTH");
        assert!(file.program.year_dependent);
        assert_eq!(file.program.conflict_domains, vec![vec!["arth1", "arth2"]]);

        let req = &file.requirements[0];
        let NodeSpec::Group { pick, children, .. } = &req.root_node else {
            panic!("expected GROUP root");
        };
        assert_eq!(*pick, 2);
        assert_eq!(children.len(), 2);

        let NodeSpec::CourseSet { query, .. } = &children[1] else {
            panic!("expected COURSE_SET child");
        };
        assert_eq!(query.subject.as_deref(), Some("ARTH"));
        assert_eq!(query.min_level, Some(4));
        let override_ = &query.course_overrides["ARTH4155"];
        assert_eq!(override_.topics, vec!["Renaissance Seminar"]);
        assert!(override_.recommended);
    }

    #[test]
    fn test_unknown_node_type_is_rejected() {
        let yaml = r#"
type: CHOICE
pick: 1
"#;
        assert!(serde_yaml::from_str::<NodeSpec>(yaml).is_err());
    }

    #[test]
    fn test_parse_college_file() {
        let yaml = r#"
college: {id: AS, name: Arts and Sciences}
programs: [ARTH, MATH]
subjects: [ARTH, MATH, PHYS]
"#;
        let file: CollegeFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.college.id, "AS");
        assert_eq!(file.programs.len(), 2);
        assert_eq!(file.subjects.len(), 3);
    }
}
