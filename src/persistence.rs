//! # Persistência — Documento JSON da Rede
//!
//! Lê e grava a [`SemanticNetwork`] no formato de documento:
//!
//! ```json
//! {
//!   "nodes": [{ "id": 1, "label": "Modes Logiques" }],
//!   "edges": [{ "from": 1, "to": 2, "label": "is-a", "edge_type": "exception" }]
//! }
//! ```
//!
//! Os índices da rede são reconstruídos automaticamente na desserialização.
//!
//! ## ⚠️ Atomicidade
//!
//! A escrita **não é atômica** — crash durante a escrita pode corromper o
//! arquivo.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::SemanticNetwork;

/// Interpreta um documento de rede já em memória (ex: upload).
pub fn parse_network(json: &str) -> Result<SemanticNetwork> {
    serde_json::from_str(json).context("Documento de rede inválido")
}

/// Carrega a rede de `path`, ou devolve uma rede vazia se o arquivo não existir.
///
/// # Erros
///
/// Retorna erro se o arquivo existir mas não puder ser lido ou interpretado.
pub fn load_network(path: &Path) -> Result<SemanticNetwork> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "Nenhum documento de rede encontrado, iniciando vazia");
        return Ok(SemanticNetwork::new());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Falha ao ler {}", path.display()))?;
    parse_network(&json).with_context(|| format!("Falha ao desserializar {}", path.display()))
}

/// Grava a rede em `path` como JSON pretty-printed, criando o diretório pai.
pub fn save_network(path: &Path, network: &SemanticNetwork) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Falha ao criar diretório {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(network).context("Falha ao serializar a rede")?;
    std::fs::write(path, json).with_context(|| format!("Falha ao escrever {}", path.display()))?;
    Ok(())
}
