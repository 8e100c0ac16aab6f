//! Job Recommender: maps detected skills to job titles through a static table.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;

/// Static skill → job titles table. Skill keys are lower-case.
pub const JOB_MAP: &[(&str, &[&str])] = &[
    ("python", &["Software Developer", "AI Engineer"]),
    ("java", &["Backend Developer"]),
    ("sql", &["Database Engineer", "Data Analyst"]),
    ("machine learning", &["ML Engineer", "AI Researcher"]),
    ("deep learning", &["Deep Learning Engineer"]),
    ("html", &["Frontend Developer"]),
    ("css", &["Frontend Developer"]),
    ("javascript", &["Web Developer", "Full Stack Developer"]),
    ("react", &["Frontend Developer"]),
    ("flask", &["Python Web Developer"]),
    ("django", &["Backend Developer"]),
    ("pandas", &["Data Analyst"]),
    ("numpy", &["Data Scientist"]),
    ("tensorflow", &["ML Engineer"]),
    ("pytorch", &["Deep Learning Engineer"]),
    ("git", &["DevOps Engineer"]),
    ("docker", &["DevOps Engineer"]),
    ("kubernetes", &["Cloud Engineer"]),
    ("linux", &["System Administrator"]),
    ("excel", &["Data Analyst"]),
    ("nlp", &["NLP Engineer", "AI Engineer"]),
    ("c++", &["Software Developer"]),
];

static JOB_INDEX: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| JOB_MAP.iter().copied().collect());

/// Builds the lookup index and returns the number of mapped skills.
/// Called once at startup.
pub fn init_job_index() -> usize {
    Lazy::force(&JOB_INDEX).len()
}

/// Job titles for a single skill; empty for skills outside the table.
pub fn titles_for(skill: &str) -> &'static [&'static str] {
    JOB_INDEX
        .get(skill.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(&[])
}

/// Union of the job titles of every skill, duplicates collapsed.
/// Unknown skills contribute nothing. Titles come back sorted.
pub fn recommend_jobs<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    skills
        .iter()
        .flat_map(|skill| titles_for(skill.as_ref()).iter().copied())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(String::from)
        .collect()
}
