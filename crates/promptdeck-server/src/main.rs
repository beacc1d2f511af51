use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use adapters::{FsContentStore, HttpMailSender, LogMailSender};
use application::{FeedbackService, PromptService};
use config::AppConfig;
use promptdeck::{ContentStore, MailSender};

/// Type aliases for application services behind trait-object ports
pub type AppPromptService = PromptService<dyn ContentStore>;
pub type AppFeedbackService = FeedbackService<dyn MailSender>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
    pub feedback_service: Arc<AppFeedbackService>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Promptdeck API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full application router with shared state and middleware
fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::router())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📚 Promptdeck API initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key))?;

    // Assistant table
    let registry = Arc::new(config::load_registry(&config.assistants_file)?);
    tracing::info!(
        "🗂️  Loaded {} assistants from {}",
        registry.len(),
        config.assistants_file.display()
    );

    // Prompt files
    let fs_store = FsContentStore::new(&config.prompts_dir);
    for entry in registry.entries() {
        if !fs_store.has_template(&entry.template_id) {
            tracing::warn!(
                "⚠️  No prompt file for '{}' (template '{}') in {}",
                entry.name,
                entry.template_id,
                fs_store.root().display()
            );
        }
    }
    let store: Arc<dyn ContentStore> = Arc::new(fs_store);

    // Mail delivery
    let mailer: Arc<dyn MailSender> = match &config.mail.api_key {
        Some(key) => {
            tracing::info!("✉️  Mail delivery via {}", config.mail.api_url);
            Arc::new(HttpMailSender::new(key.clone(), &config.mail)?)
        }
        None => {
            tracing::warn!("⚠️  No MAIL_API_KEY set - notifications will only be logged");
            Arc::new(LogMailSender)
        }
    };

    let state = AppState {
        prompt_service: Arc::new(PromptService::new(registry, store)),
        feedback_service: Arc::new(FeedbackService::new(mailer, config.operator_email)),
    };

    tracing::info!("📖 Swagger UI: /swagger-ui");
    tracing::info!("✅ Promptdeck API ready");

    Ok(build_router(state).into())
}
