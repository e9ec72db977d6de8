pub mod import_college;
pub mod import_course;
pub mod import_program;
pub mod resolve_combined;
pub mod validate;
