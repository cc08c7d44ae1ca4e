pub mod prelude;

pub mod scl_analytics_summary;
pub mod scl_assessments;
pub mod users;
