pub mod config;
pub mod report;
pub mod rubric;
pub mod scoring;
