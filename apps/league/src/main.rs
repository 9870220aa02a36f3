use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use league::catalog::fixtures::{demo_club_user, landing_opportunities};
use league::catalog::{filter_opportunities, OpportunityFilter};
use league::config::Config;
use league::dashboard::load_dashboard;
use league::session::AuthSession;
use league::state::AppState;
use league::storage::JsonFileStore;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ANCHRD League v{}", env!("CARGO_PKG_VERSION"));

    let store = JsonFileStore::open(&config.store_path)
        .with_context(|| format!("opening store at {}", config.store_path.display()))?;
    info!("Store opened at {}", store.path().display());

    let state = AppState::new(Arc::new(store), config);
    state.seed_demo_data()?;

    // Log in as the demo club unless a previous session is stored
    let mut session = state.session()?;
    if session.current_user().is_none() {
        session.login(demo_club_user())?;
    }
    let user = session.require_user()?;

    match load_dashboard(state.store.as_ref(), user) {
        Ok(dashboard) => {
            let stats = dashboard.stats;
            info!(
                "{}: {} active opportunities, {} applications, {} pending, {} accepted",
                user.display_name(),
                stats.active_opportunities,
                stats.total_applications,
                stats.pending_review,
                stats.accepted_talents
            );
            for row in dashboard.recent_applications() {
                info!(
                    "  {} -> {} ({})",
                    row.applicant_name,
                    row.opportunity_title.as_deref().unwrap_or("okänt uppdrag"),
                    row.status.label()
                );
            }
        }
        Err(e) => info!("No club dashboard for {} ({})", user.id, e.code()),
    }

    let listings = landing_opportunities();
    let result = filter_opportunities(&listings, &OpportunityFilter::default());
    info!("Landing page: {}", result.summary());

    Ok(())
}
