pub mod quiz;
pub mod resume;
