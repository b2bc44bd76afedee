#![allow(rustdoc::broken_intra_doc_links)]
//! # Rede Semântica — Propagação de Marcadores, Herança e Exceções
//!
//! Motor de inferência sobre uma rede semântica: nós (conceitos) ligados por
//! arestas rotuladas, com uma taxonomia "is-a" pela qual relações são
//! **herdadas**, e arestas de **exceção** que bloqueiam essa herança.
//!
//! ## Camadas
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`core`] | Tipos de dados: `Node`, `Edge`, `SemanticNetwork`, `Taxonomy` |
//! | [`inference`] | O motor: consultas, variante com exceções, coletor de herança |
//! | [`error`] | `ReasonerError` |
//! | [`persistence`] | Documento JSON da rede |
//! | [`config`] | Configuração via variáveis de ambiente |
//! | [`web`] | Servidor axum + HTMX + Maud |
//!
//! O núcleo (`core` + `inference`) não faz I/O: recebe a rede pronta e
//! devolve valores.
//!
//! ## Sentido da hierarquia
//!
//! Por padrão uma aresta `is-a` vai do conceito específico ao genérico
//! (`Chat ──is-a──▶ Animal`), e a ascensão sobe de `from` para `to`. Redes em
//! que a consulta sobe pelas arestas cujo `to` é o nó atual (pai → filho)
//! precisam de [`core::HierarchyDirection::ParentToChild`]. Veja
//! [`core::taxonomy`].
//!
//! ## Exemplo
//!
//! ```rust
//! use semantic_network::core::SemanticNetwork;
//! use semantic_network::inference::{self, QueryResult};
//!
//! let mut net = SemanticNetwork::new();
//! net.add_node("1", "Logique d'ordre 1")
//!     .add_node("2", "Logiques Classiques")
//!     .add_node("3", "Axiome A7");
//! net.add_edge("1", "2", "is-a").add_edge("2", "3", "contient");
//!
//! let r = inference::evaluate(&net, "Logique d'ordre 1", "Axiome A7", "contient");
//! assert_eq!(r.evidence(), ["Logiques Classiques".to_string()]);
//!
//! let r = inference::evaluate(&net, "Ghost", "Axiome A7", "contient");
//! assert!(matches!(r, QueryResult::InsufficientKnowledge { .. }));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod inference;
pub mod persistence;
pub mod web;
