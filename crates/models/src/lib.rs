pub mod catalog;
pub mod matching;
pub mod program_spec;
pub mod semester;
