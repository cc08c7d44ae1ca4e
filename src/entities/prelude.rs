pub use super::scl_analytics_summary::Entity as SclAnalyticsSummary;
pub use super::scl_assessments::Entity as SclAssessments;
pub use super::users::Entity as Users;
