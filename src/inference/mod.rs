//! # Módulo Inference — Motor de Inferência da Rede Semântica
//!
//! Este módulo responde consultas relacionais sobre uma
//! [`SemanticNetwork`](crate::core::SemanticNetwork) usando herança pela
//! hierarquia "is-a".
//!
//! ## Operações
//!
//! | Operação | Pergunta | Resultado |
//! |----------|----------|-----------|
//! | [`evaluate`] | `source` tem `relation` com `target`? | [`QueryResult`] |
//! | [`evaluate_with_exceptions`] | Idem, respeitando arestas de exceção | [`QueryResult`] |
//! | [`collect_inheritance`] | Quais os ancestrais e propriedades de `start`? | [`InheritanceReport`] |
//!
//! As funções livres usam a [`Taxonomy`](crate::core::Taxonomy) padrão
//! (`is-a`, filho → pai). Para outra convenção, use um [`Reasoner`].
//!
//! ## Exemplo
//!
//! ```text
//! Rede:  Pinguim ─is-a─▶ Ave ─pode─▶ Voar
//!        Pinguim ─pode─▶ Voar   (exceção)
//!
//! evaluate(Pinguim, Voar, pode)                 → Holds (exceção vale como aresta comum)
//! evaluate_with_exceptions(Pinguim, Voar, pode) → DoesNotHold
//! ```
//!
//! Veja [`propagation`] para o algoritmo de ascensão.

/// Sub-módulo com [`Query`], [`QueryResult`], [`Mode`] e [`Derivation`].
pub mod query;

/// Sub-módulo com o trait [`EdgePolicy`] e as políticas [`Plain`] e [`Defeasible`].
pub mod policy;

/// Sub-módulo com a ascensão compartilhada e a avaliação de consultas.
pub mod propagation;

/// Sub-módulo com o coletor de herança.
pub mod inheritance;

/// Sub-módulo com a fachada [`Reasoner`].
pub mod reasoner;

pub use inheritance::{InheritanceReport, Property};
pub use policy::{Defeasible, EdgePolicy, Plain};
pub use query::{Derivation, Mode, Query, QueryResult};
pub use reasoner::Reasoner;

use crate::core::SemanticNetwork;
use crate::error::ReasonerError;

/// Motor simples com a taxonomia padrão. Veja [`Reasoner::evaluate`].
pub fn evaluate(
    network: &SemanticNetwork,
    source: &str,
    target: &str,
    relation: &str,
) -> QueryResult {
    Reasoner::default().evaluate(network, source, target, relation)
}

/// Motor com exceções e taxonomia padrão. Veja [`Reasoner::evaluate_with_exceptions`].
pub fn evaluate_with_exceptions(
    network: &SemanticNetwork,
    source: &str,
    target: &str,
    relation: &str,
) -> QueryResult {
    Reasoner::default().evaluate_with_exceptions(network, source, target, relation)
}

/// Coletor de herança com a taxonomia padrão. Veja [`Reasoner::collect_inheritance`].
pub fn collect_inheritance(
    network: &SemanticNetwork,
    start: &str,
) -> Result<InheritanceReport, ReasonerError> {
    Reasoner::default().collect_inheritance(network, start)
}
