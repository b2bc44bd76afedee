//! # Módulo Core — Tipos Fundamentais da Rede Semântica
//!
//! Este módulo agrupa os **tipos de dados** sobre os quais o motor de
//! inferência trabalha. Nada aqui raciocina — só representa e indexa:
//!
//! - [`Node`] / [`NodeId`] — Conceito com identidade e label
//! - [`Edge`] / [`EdgeKind`] — Relação rotulada, comum ou de exceção
//! - [`SemanticNetwork`] — Contêiner indexado de nós e arestas
//! - [`Taxonomy`] / [`HierarchyDirection`] — Quais arestas são "is-a" e em que sentido
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use semantic_network::core::{SemanticNetwork, Taxonomy};
//!
//! let mut net = SemanticNetwork::new();
//! net.add_node("1", "Reseaux Semantique")
//!     .add_node("2", "Modes Graphiques");
//! net.add_edge("1", "2", "is-a");
//!
//! assert_eq!(net.node_count(), 2);
//! assert_eq!(Taxonomy::default().label, "is-a");
//! ```

/// Sub-módulo com [`Node`] e [`NodeId`].
pub mod node;

/// Sub-módulo com [`Edge`] e [`EdgeKind`].
pub mod edge;

/// Sub-módulo com [`Taxonomy`] e [`HierarchyDirection`].
pub mod taxonomy;

/// Sub-módulo com [`SemanticNetwork`] — contêiner indexado.
pub mod network;

pub use edge::{Edge, EdgeKind};
pub use network::SemanticNetwork;
pub use node::{Node, NodeId};
pub use taxonomy::{HierarchyDirection, Taxonomy, DEFAULT_TAXONOMY_LABEL};
