//! # Reasoner — Fachada do Motor de Inferência
//!
//! O [`Reasoner`] guarda só a [`Taxonomy`] configurada; não guarda estado
//! entre consultas. Recebe a rede por referência e devolve valores, então é
//! seguro compartilhá-lo entre threads.
//!
//! ## Uso
//!
//! ```rust
//! use semantic_network::core::SemanticNetwork;
//! use semantic_network::inference::{Mode, Query, Reasoner};
//!
//! let mut net = SemanticNetwork::new();
//! net.add_node("1", "Chat").add_node("2", "Animal").add_node("3", "Ar");
//! net.add_edge("1", "2", "is-a").add_edge("2", "3", "respira");
//!
//! let reasoner = Reasoner::default();
//! assert!(reasoner.evaluate(&net, "Chat", "Ar", "respira").holds());
//!
//! let results = reasoner.evaluate_batch(
//!     &net,
//!     &[Query::new("Chat", "Ar", "respira"), Query::new("Ghost", "Ar", "respira")],
//!     Mode::Plain,
//! );
//! assert_eq!(results.len(), 2);
//! ```

use rayon::prelude::*;

use crate::core::{SemanticNetwork, Taxonomy};
use crate::error::ReasonerError;

use super::inheritance::{self, InheritanceReport};
use super::policy::{Defeasible, EdgePolicy, Plain};
use super::propagation;
use super::query::{Mode, Query, QueryResult};

/// Motor de inferência configurado com uma [`Taxonomy`].
#[derive(Clone, Debug, Default)]
pub struct Reasoner {
    taxonomy: Taxonomy,
}

impl Reasoner {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Motor simples: a relação vale direta ou herdada? Exceções contam como
    /// arestas comuns.
    pub fn evaluate(
        &self,
        network: &SemanticNetwork,
        source: &str,
        target: &str,
        relation: &str,
    ) -> QueryResult {
        self.evaluate_query(network, &Query::new(source, target, relation), Mode::Plain)
    }

    /// Motor com exceções: mesmo algoritmo, mas arestas de exceção bloqueiam a
    /// herança em vez de afirmá-la.
    pub fn evaluate_with_exceptions(
        &self,
        network: &SemanticNetwork,
        source: &str,
        target: &str,
        relation: &str,
    ) -> QueryResult {
        self.evaluate_query(
            network,
            &Query::new(source, target, relation),
            Mode::Defeasible,
        )
    }

    /// Avalia uma consulta na variante escolhida.
    pub fn evaluate_query(
        &self,
        network: &SemanticNetwork,
        query: &Query,
        mode: Mode,
    ) -> QueryResult {
        propagation::evaluate_query(network, &self.taxonomy, policy_for(mode), query)
    }

    /// Avalia um lote de consultas independentes em paralelo.
    ///
    /// Retorna exatamente um resultado por consulta, na ordem de entrada; uma
    /// consulta sem resposta nunca interrompe as demais.
    pub fn evaluate_batch(
        &self,
        network: &SemanticNetwork,
        queries: &[Query],
        mode: Mode,
    ) -> Vec<QueryResult> {
        tracing::debug!(queries = queries.len(), mode = ?mode, "Lote de consultas");
        queries
            .par_iter()
            .map(|query| self.evaluate_query(network, query, mode))
            .collect()
    }

    /// Lista a ancestralidade de `start` e as propriedades herdadas.
    pub fn collect_inheritance(
        &self,
        network: &SemanticNetwork,
        start: &str,
    ) -> Result<InheritanceReport, ReasonerError> {
        inheritance::collect(network, &self.taxonomy, start)
    }
}

fn policy_for(mode: Mode) -> &'static dyn EdgePolicy {
    match mode {
        Mode::Plain => &Plain,
        Mode::Defeasible => &Defeasible,
    }
}
