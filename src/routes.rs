use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::notify::{
    notify_dto::{CreateNotifyRequest, CreateNotifyResponse, NotifyStatusResponse, OkResponse},
    notify_handlers, Notification, NotificationStatus,
};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        notify_handlers::create_notify,
        notify_handlers::get_status,
        notify_handlers::delete_notify,
    ),
    components(
        schemas(
            CreateNotifyRequest,
            CreateNotifyResponse,
            NotifyStatusResponse,
            OkResponse,
            Notification,
            NotificationStatus,
        )
    ),
    tags(
        (name = "notify", description = "Delayed notification endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.config.static_dir.clone();
    let index_page = ServeFile::new(format!("{static_dir}/index.html"));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/notify", post(notify_handlers::create_notify))
        .route(
            "/notify/:id",
            get(notify_handlers::get_status).delete(notify_handlers::delete_notify),
        )
        .route_service("/", index_page)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
