pub mod analytics;
pub mod assessment;
pub mod user;
