use delayed_notifier::db::{create_pool, run_migrations};
use delayed_notifier::notify::{NotifyRepository, NotifyService};
use delayed_notifier::routes::create_router;
use delayed_notifier::state::{AppState, Config};
use delayed_notifier::telegram::TelegramNotifier;
use delayed_notifier::worker::start_dispatch_worker;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,delayed_notifier=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    tracing::info!("Connecting to database...");
    let db = create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await?;

    let notify_repository = NotifyRepository::new(db);
    let notify_service = NotifyService::new(notify_repository);
    let notifier = TelegramNotifier::new(config.telegram_bot_token.clone());

    let state = AppState {
        config: config.clone(),
        notify_service,
        notifier,
    };

    // Start delivery worker
    let worker_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = start_dispatch_worker(worker_state).await {
            tracing::error!("Dispatch worker error: {:?}", e);
        }
    });

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);

    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
