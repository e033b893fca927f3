pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::content;

use crate::content::adapter::outgoing::{StaticContentSource, SITE_CONTENT};
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::services::{
    GetNewsletterService, GetPersonService, GetSectionService, GetSiteContentService,
    GetSocialLinksService,
};

use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Content wiring: every use case reads the compiled-in registry
    let content_use_cases = ContentUseCases {
        get_site: Arc::new(GetSiteContentService::new(StaticContentSource)),
        get_person: Arc::new(GetPersonService::new(StaticContentSource)),
        get_social_links: Arc::new(GetSocialLinksService::new(StaticContentSource)),
        get_newsletter: Arc::new(GetNewsletterService::new(StaticContentSource)),
        get_section: Arc::new(GetSectionService::new(StaticContentSource)),
    };

    // First touch builds the registry; log what shipped
    let site = &*SITE_CONTENT;
    info!(
        "Content registry loaded: {} social links, {} experiences, {} gallery images",
        site.social.len(),
        site.about.work.experiences.len(),
        site.gallery.images.len()
    );

    let state = AppState {
        content: content_use_cases,
    };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_site_content_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_person_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_social_links_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_newsletter_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_section_handler);
    // API docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
