pub mod class_sections;
pub mod college_programs;
pub mod college_subjects;
pub mod colleges;
pub mod combined_groups;
pub mod course_attributes;
pub mod courses;
pub mod enroll_groups;
pub mod instructors;
pub mod meeting_instructors;
pub mod meetings;
pub mod node_children;
pub mod node_courses;
pub mod programs;
pub mod requirement_domain_memberships;
pub mod requirement_domains;
pub mod requirement_nodes;
pub mod requirements;
pub mod subjects;
