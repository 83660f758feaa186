pub mod evaluation;
pub mod models;
pub mod question_bank;
pub mod session;
