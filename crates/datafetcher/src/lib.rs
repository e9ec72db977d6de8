pub mod client;
pub mod integrity;
