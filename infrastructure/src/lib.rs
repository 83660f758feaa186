pub mod canned_evaluator;
pub mod config;
pub mod resume_loader;
