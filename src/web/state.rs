//! # Estado da Aplicação Web
//!
//! ```text
//! AppState (Clone, barato)
//!  ├── network: Arc<RwLock<ServedNetwork>>  ← consultas: read lock
//!  │                                         ← upload:    write lock
//!  ├── reasoner: Arc<Reasoner>              ← imutável (só a taxonomia)
//!  └── network_path: Arc<PathBuf>           ← onde o upload é persistido
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::core::SemanticNetwork;
use crate::inference::Reasoner;

/// A rede servida e de onde/quando ela veio.
pub struct ServedNetwork {
    pub network: SemanticNetwork,
    pub loaded_at: DateTime<Utc>,
    /// Origem legível (caminho do arquivo ou nome do upload).
    pub origin: String,
}

impl ServedNetwork {
    pub fn new(network: SemanticNetwork, origin: impl Into<String>) -> Self {
        Self {
            network,
            loaded_at: Utc::now(),
            origin: origin.into(),
        }
    }
}

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Rede semântica servida, protegida por `RwLock`.
    pub network: Arc<RwLock<ServedNetwork>>,
    /// Motor configurado com a taxonomia do servidor.
    pub reasoner: Arc<Reasoner>,
    /// Caminho onde uploads são persistidos.
    pub network_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(served: ServedNetwork, reasoner: Reasoner, network_path: PathBuf) -> Self {
        Self {
            network: Arc::new(RwLock::new(served)),
            reasoner: Arc::new(reasoner),
            network_path: Arc::new(network_path),
        }
    }
}
