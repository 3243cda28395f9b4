use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::rate_limit::EngagementRateLimiter;
use crate::rate_limit::LoginRateLimiter;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub engagement_limiter: EngagementRateLimiter,
    pub login_limiter: LoginRateLimiter,
}
