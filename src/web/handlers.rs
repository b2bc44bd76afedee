//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública é um handler Axum mapeado em
//! [`super::create_router()`]. As rotas HTML devolvem **fragmentos HTMX**; as
//! rotas `/api` devolvem JSON.
//!
//! | Handler | Método | Retorno |
//! |---------|--------|---------|
//! | `index` | GET `/` | HTML completo |
//! | `status` | GET `/status` | JSON com o resumo da rede |
//! | `query` | POST `/query` | Fragment com o desfecho |
//! | `inheritance` | POST `/inheritance` | Fragment com ancestrais e propriedades |
//! | `upload_network` | POST `/upload` | Fragment de confirmação |
//! | `api_query` | POST `/api/query` | JSON: um resultado por consulta |
//! | `api_inheritance` | GET `/api/inheritance/{label}` | JSON ou 404 |
//! | `api_network` | GET `/api/network` | Documento JSON da rede |
//!
//! Todas as consultas adquirem só o **read lock** da rede; o upload troca a
//! rede inteira sob o write lock.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::{AppState, ServedNetwork};
use super::templates;
use crate::core::SemanticNetwork;
use crate::error::ReasonerError;
use crate::inference::{InheritanceReport, Mode, Query, QueryResult};
use crate::persistence;

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// GET `/` — Página principal.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let served = state.network.read();
    markup_to_html(templates::full_page(&served, state.reasoner.taxonomy()))
}

/// Resposta do endpoint `/status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub nodes: usize,
    pub edges: usize,
    pub dangling_edges: usize,
    pub taxonomy_label: String,
    pub direction: String,
    pub origin: String,
    pub loaded_at: DateTime<Utc>,
}

/// GET `/status` — Resumo da rede servida.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let served = state.network.read();
    let taxonomy = state.reasoner.taxonomy();
    Json(StatusResponse {
        nodes: served.network.node_count(),
        edges: served.network.edge_count(),
        dangling_edges: served.network.dangling_count(),
        taxonomy_label: taxonomy.label.clone(),
        direction: taxonomy.direction.to_string(),
        origin: served.origin.clone(),
        loaded_at: served.loaded_at,
    })
}

/// Dados do formulário de consulta.
#[derive(Debug, Deserialize)]
pub struct QueryForm {
    pub source: String,
    pub target: String,
    pub relation: String,
    #[serde(default)]
    pub mode: Mode,
}

/// POST `/query` — Avalia uma consulta e devolve o fragmento do desfecho.
pub async fn query(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<QueryForm>,
) -> Html<String> {
    let query = Query::new(form.source.trim(), form.target.trim(), form.relation.trim());
    let result = {
        let served = state.network.read();
        state.reasoner.evaluate_query(&served.network, &query, form.mode)
    };
    tracing::info!(query = %query, mode = ?form.mode, holds = result.holds(), "Consulta avaliada");
    markup_to_html(templates::query_result(&query, form.mode, &result))
}

/// Dados do formulário de herança.
#[derive(Debug, Deserialize)]
pub struct InheritanceForm {
    pub start: String,
}

/// POST `/inheritance` — Coleta ancestrais e propriedades de um nó.
pub async fn inheritance(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<InheritanceForm>,
) -> Html<String> {
    let start = form.start.trim();
    let report = {
        let served = state.network.read();
        state.reasoner.collect_inheritance(&served.network, start)
    };
    markup_to_html(match report {
        Ok(report) => templates::inheritance_report(start, &report),
        Err(e) => {
            tracing::info!(error = %e, "Herança: nó de partida inválido");
            templates::error_fragment(&format!("❌ {e}"))
        }
    })
}

/// POST `/upload` — Substitui a rede pelo documento JSON enviado (campo
/// `network`) e persiste em disco.
pub async fn upload_network(State(state): State<AppState>, mut multipart: Multipart) -> Html<String> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("network") {
            continue;
        }
        let filename = field.file_name().unwrap_or("network.json").to_string();
        let text = match field.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Falha ao ler o upload");
                return markup_to_html(templates::error_fragment(&format!("Erro no upload: {e}")));
            }
        };
        let network = match persistence::parse_network(&text) {
            Ok(network) => network,
            Err(e) => {
                tracing::warn!(error = %e, filename = %filename, "Documento de rede rejeitado");
                return markup_to_html(templates::error_fragment(&format!("{e:#}")));
            }
        };

        if let Err(e) = persistence::save_network(&state.network_path, &network) {
            tracing::error!(error = %e, "Falha ao salvar a rede após upload");
        }

        let (nodes, edges) = (network.node_count(), network.edge_count());
        *state.network.write() = ServedNetwork::new(network, filename.clone());
        tracing::info!(nodes, edges, filename = %filename, "Rede substituída via upload");

        return markup_to_html(maud::html! {
            div class="result uploaded" {
                div class="result-title" { "Rede carregada" }
                div class="result-content" {
                    strong { (filename) } ": " (nodes) " nós, " (edges) " arestas. "
                    a href="/" { "Recarregar a página →" }
                }
            }
        });
    }

    tracing::warn!("Nenhum campo 'network' encontrado no upload multipart");
    markup_to_html(templates::error_fragment("Nenhum documento de rede encontrado no upload."))
}

/// Corpo de `/api/query`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub mode: Mode,
    pub queries: Vec<Query>,
}

/// POST `/api/query` — Avalia um lote; devolve um resultado por consulta, na
/// mesma ordem.
///
/// O lote roda em `spawn_blocking`: a avaliação paralela (rayon) é CPU-bound
/// e o read lock fica fora do executor async.
pub async fn api_query(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<Vec<QueryResult>>, (StatusCode, Json<ErrorBody>)> {
    let network = state.network.clone();
    let reasoner = state.reasoner.clone();
    let queries = request.queries.len();

    tokio::task::spawn_blocking(move || {
        let served = network.read();
        reasoner.evaluate_batch(&served.network, &request.queries, request.mode)
    })
    .await
    .map(Json)
    .map_err(|e| {
        tracing::error!(error = %e, queries, "Lote de consultas abortado");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: format!("Falha ao avaliar o lote: {e}"),
            }),
        )
    })
}

/// Corpo JSON de erro.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// GET `/api/inheritance/{label}` — Relatório de herança em JSON.
pub async fn api_inheritance(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> Result<Json<InheritanceReport>, (StatusCode, Json<ErrorBody>)> {
    let served = state.network.read();
    state
        .reasoner
        .collect_inheritance(&served.network, &label)
        .map(Json)
        .map_err(|e| {
            let status = match e {
                ReasonerError::NodeNotFound(_) => StatusCode::NOT_FOUND,
            };
            (status, Json(ErrorBody { error: e.to_string() }))
        })
}

/// GET `/api/network` — Documento JSON da rede servida.
pub async fn api_network(State(state): State<AppState>) -> Json<SemanticNetwork> {
    Json(state.network.read().network.clone())
}
