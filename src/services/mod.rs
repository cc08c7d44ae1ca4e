pub mod analytics_service;
pub mod analytics_service_impl;
pub use analytics_service::{AnalyticsError, AnalyticsService};
pub use analytics_service_impl::SeaOrmAnalyticsService;

pub mod assessment_service;
pub mod assessment_service_impl;
pub use assessment_service::{
    AssessmentError, AssessmentService, ClaimedAggregates, SaveAssessment,
};
pub use assessment_service_impl::SeaOrmAssessmentService;

pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService};
pub use auth_service_impl::SeaOrmAuthService;
