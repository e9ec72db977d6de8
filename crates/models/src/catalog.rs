use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A subject entry from the catalog API subject listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSubject {
    pub value: String,
    #[serde(default)]
    pub descr: String,
    #[serde(default)]
    pub descrformal: String,
}

/// One course record from the per-subject class search endpoint
///
/// Nesting mirrors the API payload: a class carries enroll groups, which
/// carry class sections, which carry meetings, which carry instructors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawClass {
    pub subject: String,
    pub catalog_nbr: String,
    pub title_short: String,
    pub title_long: String,
    pub description: String,
    pub catalog_enrollment_priority: String,
    pub catalog_forbidden_overlaps: String,
    pub catalog_prereq: String,
    pub catalog_coreq: String,
    pub catalog_fee: String,
    pub acad_career: String,
    pub acad_group: String,
    pub crse_attrs: Vec<RawCourseAttribute>,
    pub enroll_groups: Vec<RawEnrollGroup>,
}

impl RawClass {
    /// Natural course identity: subject + catalog number ("MATH1110").
    pub fn course_id(&self) -> String {
        format!("{}{}", self.subject, self.catalog_nbr)
    }

    /// Course level is the first digit of the catalog number, 0 when the
    /// number does not start with a digit.
    pub fn level(&self) -> i32 {
        self.catalog_nbr
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as i32)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCourseAttribute {
    pub crse_attr_value: String,
    pub attr_descr_short: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawEnrollGroup {
    pub units_minimum: Option<f32>,
    pub units_maximum: Option<f32>,
    pub grading_basis: Option<String>,
    pub session_code: Option<String>,
    pub simple_combinations: Vec<RawSimpleCombination>,
    pub class_sections: Vec<RawClassSection>,
}

impl RawEnrollGroup {
    /// Topic of the group: the first class section declaring a non-empty
    /// `topicDescription`, in section order.
    pub fn topic(&self) -> Option<&str> {
        self.class_sections.iter().find_map(|cs| {
            let topic = cs.topic_description.trim();
            (!topic.is_empty()).then_some(topic)
        })
    }
}

/// Cross-listing hint: names another course jointly taught with this group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSimpleCombination {
    pub subject: String,
    pub catalog_nbr: String,
}

impl RawSimpleCombination {
    pub fn course_id(&self) -> String {
        format!("{}{}", self.subject, self.catalog_nbr)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawClassSection {
    pub class_nbr: Option<i32>,
    /// Instructional format code: "LEC", "DIS", "LAB", "IND", ...
    pub ssr_component: String,
    pub section: String,
    pub campus: Option<String>,
    pub location: Option<String>,
    pub start_dt: Option<String>,
    pub end_dt: Option<String>,
    pub add_consent: Option<String>,
    pub is_component_graded: Option<bool>,
    pub instruction_mode: Option<String>,
    pub topic_description: String,
    pub open_status: Option<String>,
    pub meetings: Vec<RawMeeting>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawMeeting {
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub pattern: Option<String>,
    pub start_dt: Option<String>,
    pub end_dt: Option<String>,
    pub instructors: Vec<RawInstructor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawInstructor {
    pub netid: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub instr_assign_seq: Option<i32>,
}

/// Parses the API's `MM/DD/YYYY` date format, `None` for anything else.
pub fn parse_api_date(value: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value?, "%m/%d/%Y").ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_course_id_and_level() {
        let class = RawClass {
            subject: "MATH".into(),
            catalog_nbr: "1110".into(),
            ..Default::default()
        };
        assert_eq!(class.course_id(), "MATH1110");
        assert_eq!(class.level(), 1);

        let odd = RawClass {
            subject: "PE".into(),
            catalog_nbr: "X100".into(),
            ..Default::default()
        };
        assert_eq!(odd.level(), 0);
    }

    #[test]
    fn test_topic_takes_first_nonempty_section() {
        let group = RawEnrollGroup {
            class_sections: vec![
                RawClassSection {
                    topic_description: "  ".into(),
                    ..Default::default()
                },
                RawClassSection {
                    topic_description: "Algorithmic Game Theory".into(),
                    ..Default::default()
                },
                RawClassSection {
                    topic_description: "Other Topic".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(group.topic(), Some("Algorithmic Game Theory"));
    }

    #[test]
    fn test_parse_api_date() {
        assert_eq!(
            parse_api_date(Some("01/20/2026")),
            NaiveDate::from_ymd_opt(2026, 1, 20)
        );
        assert_eq!(parse_api_date(Some("2026-01-20")), None);
        assert_eq!(parse_api_date(None), None);
    }

    #[test]
    fn test_deserialize_nested_class() {
        let json = r#"{
            "subject": "CS",
            "catalogNbr": "4820",
            "titleShort": "Intro Analysis of Algorithms",
            "enrollGroups": [{
                "unitsMinimum": 4.0,
                "unitsMaximum": 4.0,
                "gradingBasis": "GRI",
                "simpleCombinations": [{"subject": "ARTS", "catalogNbr": "4820"}],
                "classSections": [{
                    "ssrComponent": "LEC",
                    "section": "001",
                    "classNbr": 12345,
                    "openStatus": "O",
                    "meetings": [{
                        "pattern": "TR",
                        "instructors": [{"netid": "ab123", "firstName": "Ada"}]
                    }]
                }]
            }]
        }"#;

        let class: RawClass = serde_json::from_str(json).unwrap();
        assert_eq!(class.course_id(), "CS4820");
        let group = &class.enroll_groups[0];
        assert_eq!(group.simple_combinations[0].course_id(), "ARTS4820");
        assert_eq!(group.class_sections[0].meetings[0].instructors[0].netid, "ab123");
    }
}
