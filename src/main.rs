use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use portfolio_api::config::Config;
use portfolio_api::handlers::{
    ContactRequest, ContactResponse, DiagnosticsResponse, LivenessResponse, ProjectResponse,
};
use portfolio_api::state::AppState;
use portfolio_api::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::read_root,
        handlers::health::test_database,
        handlers::project::list_projects,
        handlers::contact::submit_message,
        handlers::schema::get_schema,
    ),
    components(schemas(
        LivenessResponse,
        DiagnosticsResponse,
        ProjectResponse,
        ContactRequest,
        ContactResponse,
    )),
    tags(
        (name = "Health", description = "Health and diagnostics endpoints"),
        (name = "Projects", description = "Portfolio project endpoints"),
        (name = "Contact", description = "Contact form endpoints"),
        (name = "Schema", description = "Schema introspection")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    // Initialize application state (connects to the document store)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config)
        .await
        .expect("Failed to initialize application state");
    tracing::info!("Database connection established");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await.unwrap();
}
