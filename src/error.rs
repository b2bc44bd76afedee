//! # Erros do Motor de Inferência
//!
//! O motor quase não falha: nó ausente numa consulta é o **resultado**
//! [`QueryResult::InsufficientKnowledge`](crate::inference::QueryResult), não
//! um erro. O único erro propriamente dito é o do coletor de herança, que
//! recebe um só nó de partida.

use thiserror::Error;

/// Erros retornados pelas operações do núcleo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReasonerError {
    /// O label de partida não corresponde a nenhum nó da rede.
    #[error("nó não encontrado: '{0}'")]
    NodeNotFound(String),
}
