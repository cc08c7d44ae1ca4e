use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AnalyticsService, AssessmentService, AuthService, SeaOrmAnalyticsService,
    SeaOrmAssessmentService, SeaOrmAuthService,
};

/// Everything a request handler or CLI command needs, built once at startup.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub assessment_service: Arc<dyn AssessmentService>,

    pub analytics_service: Arc<dyn AnalyticsService>,

    pub auth_service: Arc<dyn AuthService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    /// Wires the services around an already connected store.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let config = Arc::new(RwLock::new(config));

        let assessment_service = Arc::new(SeaOrmAssessmentService::new(store.clone()))
            as Arc<dyn AssessmentService>;
        let analytics_service =
            Arc::new(SeaOrmAnalyticsService::new(store.clone())) as Arc<dyn AnalyticsService>;
        let auth_service = Arc::new(SeaOrmAuthService::new(store.clone(), config.clone()))
            as Arc<dyn AuthService>;

        Self {
            config,
            store,
            assessment_service,
            analytics_service,
            auth_service,
        }
    }
}
