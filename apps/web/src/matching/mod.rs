pub mod jobs;
pub mod skills;
