use crate::error::ImportError;
use jsonschema::{Draft, JSONSchema};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// Compiled Draft 7 schema for one of the YAML file shapes we ingest.
pub struct SchemaValidator {
    compiled: JSONSchema,
}

impl SchemaValidator {
    /// Schema for degree-program files (`program` header + `requirements`).
    pub fn programs() -> Result<Self, ImportError> {
        Self::compile(program_schema())
    }

    /// Schema for college files (`college` header + program/subject lists).
    pub fn colleges() -> Result<Self, ImportError> {
        Self::compile(college_schema())
    }

    fn compile(schema: Value) -> Result<Self, ImportError> {
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema)
            .map_err(|e| ImportError::Config(format!("embedded schema is invalid: {e}")))?;
        Ok(Self { compiled })
    }

    /// Returns all violations as `[pointer] message` lines, sorted so the
    /// report is stable regardless of evaluation order.
    pub fn check(&self, instance: &Value) -> Vec<String> {
        let mut violations: Vec<String> = match self.compiled.validate(instance) {
            Ok(()) => return Vec::new(),
            Err(errors) => errors
                .map(|e| {
                    let pointer = e.instance_path.to_string();
                    let pointer = if pointer.is_empty() { "/" } else { &pointer };
                    format!("[{pointer}] {e}")
                })
                .collect(),
        };
        violations.sort();
        violations
    }
}

/// Reads a YAML file and re-expresses it as JSON for schema validation.
pub fn read_yaml_as_json(path: &Path) -> Result<Value, ImportError> {
    let text = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|e| ImportError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    serde_json::to_value(yaml).map_err(|e| ImportError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn program_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["program", "requirements"],
        "properties": {
            "program": {
                "type": "object",
                "required": ["id", "name", "type"],
                "properties": {
                    "id": { "type": "string", "minLength": 1 },
                    "name": { "type": "string", "minLength": 1 },
                    "type": { "type": "string", "minLength": 1 },
                    "year_dependent": { "type": "boolean" },
                    "major_dependent": { "type": "boolean" },
                    "college_dependent": { "type": "boolean" },
                    "concentration_dependent": { "type": "boolean" },
                    "onboarding_courses": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "relevant_subjects": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "conflict_domains": {
                        "type": "array",
                        "items": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    }
                }
            },
            "requirements": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["id", "name", "ui_type", "root_node"],
                    "properties": {
                        "id": { "type": "string", "minLength": 1 },
                        "name": { "type": "string", "minLength": 1 },
                        "ui_type": { "type": "string", "minLength": 1 },
                        "description": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "root_node": { "$ref": "#/definitions/node" }
                    }
                }
            }
        },
        "definitions": {
            "node": {
                "type": "object",
                "required": ["type"],
                "properties": {
                    "type": { "enum": ["GROUP", "COURSE_SET"] },
                    "title": { "type": "string" },
                    "pick": { "type": "integer", "minimum": 0 },
                    "children": {
                        "type": "array",
                        "items": { "$ref": "#/definitions/node" }
                    },
                    "query": { "$ref": "#/definitions/query" }
                }
            },
            "query": {
                "type": "object",
                "properties": {
                    "subject": { "type": "string" },
                    "level": { "type": "integer" },
                    "min_level": { "type": "integer" },
                    "max_level": { "type": "integer" },
                    "included": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "excluded": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "course_overrides": {
                        "type": "object",
                        "additionalProperties": {
                            "type": "object",
                            "properties": {
                                "topics": {
                                    "type": "array",
                                    "items": { "type": "string" }
                                },
                                "comment": { "type": "string" },
                                "recommended": { "type": "boolean" }
                            }
                        }
                    }
                }
            }
        }
    })
}

fn college_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["college"],
        "properties": {
            "college": {
                "type": "object",
                "required": ["id", "name"],
                "properties": {
                    "id": { "type": "string", "minLength": 1 },
                    "name": { "type": "string", "minLength": 1 }
                }
            },
            "programs": {
                "type": "array",
                "items": { "type": "string" }
            },
            "subjects": {
                "type": "array",
                "items": { "type": "string" }
            }
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_program_file_passes() {
        let validator = SchemaValidator::programs().unwrap();
        let instance = json!({
            "program": { "id": "cs_major", "name": "Computer Science", "type": "major" },
            "requirements": [{
                "id": "cs_core",
                "name": "Core",
                "ui_type": "checklist",
                "root_node": {
                    "type": "GROUP",
                    "pick": 2,
                    "children": [
                        { "type": "COURSE_SET", "query": { "included": ["CS2110"] } }
                    ]
                }
            }]
        });
        assert!(validator.check(&instance).is_empty());
    }

    #[test]
    fn test_missing_requirements_is_reported() {
        let validator = SchemaValidator::programs().unwrap();
        let instance = json!({
            "program": { "id": "cs_major", "name": "Computer Science", "type": "major" }
        });
        let violations = validator.check(&instance);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].starts_with("[/]"), "got {:?}", violations[0]);
    }

    #[test]
    fn test_bad_node_type_is_reported_with_pointer() {
        let validator = SchemaValidator::programs().unwrap();
        let instance = json!({
            "program": { "id": "p", "name": "P", "type": "major" },
            "requirements": [{
                "id": "r", "name": "R", "ui_type": "checklist",
                "root_node": { "type": "LEAF" }
            }]
        });
        let violations = validator.check(&instance);
        assert!(!violations.is_empty());
        assert!(
            violations
                .iter()
                .any(|v| v.contains("/requirements/0/root_node")),
            "got {violations:?}"
        );
    }

    #[test]
    fn test_violations_are_sorted() {
        let validator = SchemaValidator::programs().unwrap();
        let instance = json!({
            "program": { "id": "", "name": "", "type": "major" },
            "requirements": "not-a-list"
        });
        let violations = validator.check(&instance);
        let mut sorted = violations.clone();
        sorted.sort();
        assert_eq!(violations, sorted);
    }

    #[test]
    fn test_valid_college_file_passes() {
        let validator = SchemaValidator::colleges().unwrap();
        let instance = json!({
            "college": { "id": "engineering", "name": "College of Engineering" },
            "programs": ["cs_major"],
            "subjects": ["CS", "ECE"]
        });
        assert!(validator.check(&instance).is_empty());
    }

    #[test]
    fn test_college_missing_name_fails() {
        let validator = SchemaValidator::colleges().unwrap();
        let instance = json!({ "college": { "id": "engineering" } });
        assert!(!validator.check(&instance).is_empty());
    }
}
