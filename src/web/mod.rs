//! # Módulo Web — Interface da Rede Semântica
//!
//! Camada web construída com **Axum** + **HTMX** + **Maud**. Ela só dirige o
//! motor: carrega a rede, repassa consultas e renderiza os resultados.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Axum Router (este módulo)                               │
//! │  ├── GET  /                       → página principal    │
//! │  ├── GET  /status                 → JSON: resumo        │
//! │  ├── POST /query                  → HTMX fragment       │
//! │  ├── POST /inheritance            → HTMX fragment       │
//! │  ├── POST /upload                 → documento JSON      │
//! │  ├── POST /api/query              → JSON (lote)         │
//! │  ├── GET  /api/inheritance/{label}→ JSON                │
//! │  └── GET  /api/network            → JSON                │
//! ├─────────────────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir → /assets/)         │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod state;
pub mod templates;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// As rotas `/api` aceitam chamadas de qualquer origem (CORS permissivo);
/// uploads são limitados a 10MB.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/query", post(handlers::api_query))
        .route("/inheritance/{label}", get(handlers::api_inheritance))
        .route("/network", get(handlers::api_network))
        .layer(CorsLayer::permissive());

    Router::new()
        // ── Páginas HTML ──────────────────────────────────────
        .route("/", get(handlers::index))
        .route("/status", get(handlers::status))
        // ── HTMX fragments ───────────────────────────────────
        .route("/query", post(handlers::query))
        .route("/inheritance", post(handlers::inheritance))
        .route(
            "/upload",
            post(handlers::upload_network).layer(DefaultBodyLimit::max(10 * 1024 * 1024)),
        )
        // ── API JSON ──────────────────────────────────────────
        .nest("/api", api)
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(state)
}
