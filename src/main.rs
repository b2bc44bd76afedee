//! # Rede Semântica — Servidor
//!
//! **Ponto de entrada** do servidor web que dirige o motor de inferência.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Lê Settings das variáveis SEMNET_*
//!   ├── Carrega a rede do disco (ou inicia vazia)
//!   ├── Monta AppState e Router
//!   └── Inicia servidor TCP
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Rede de demonstração em data/network.json, porta 3000
//! cargo run
//!
//! # Documento com a convenção "is a" pai → filho
//! SEMNET_NETWORK=bases/propagation.json SEMNET_TAXONOMY_LABEL="is a" \
//!     SEMNET_HIERARCHY=parent-to-child RUST_LOG=debug cargo run
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use semantic_network::config::Settings;
use semantic_network::core::SemanticNetwork;
use semantic_network::inference::Reasoner;
use semantic_network::persistence;
use semantic_network::web::{self, state::AppState, state::ServedNetwork};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🕸️ Rede Semântica — Starting...");

    let settings = Settings::from_env().context("Configuração inválida")?;
    tracing::info!(
        taxonomy = %settings.taxonomy.label,
        direction = %settings.taxonomy.direction,
        "Taxonomia configurada"
    );

    // Documento corrompido não impede o servidor de subir: inicia vazio.
    let network = match persistence::load_network(&settings.network_path) {
        Ok(network) => {
            tracing::info!(
                nodes = network.node_count(),
                edges = network.edge_count(),
                path = %settings.network_path.display(),
                "Rede carregada do disco"
            );
            network
        }
        Err(e) => {
            tracing::warn!(error = %e, "Falha ao carregar a rede do disco, iniciando vazia");
            SemanticNetwork::new()
        }
    };

    let served = ServedNetwork::new(network, settings.network_path.display().to_string());
    let state = AppState::new(
        served,
        Reasoner::new(settings.taxonomy.clone()),
        settings.network_path.clone(),
    );
    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.addr)
        .await
        .with_context(|| format!("Falha ao fazer bind em {}", settings.addr))?;
    tracing::info!("🚀 Server running at http://{}", settings.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
