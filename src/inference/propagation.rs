//! # Propagação de Marcadores — Ascensão na Hierarquia "is-a"
//!
//! Implementação do algoritmo que responde "`source` tem `relation` com
//! `target`?" subindo a taxonomia a partir de `source`.
//!
//! ## Como Funciona
//!
//! ```text
//! 1. Resolve source e target por label      → senão: InsufficientKnowledge
//! 2. source -relation-> target existe?      → Holds (direta)
//! 3. Fronteira ← pais de source
//!    enquanto houver nó pendente na fronteira:
//!      ancestral afirma relation → target?  → evidência
//!      ancestral bloqueia (exceção)?        → não sobe além dele
//!      senão ou após afirmar                → fronteira += pais não visitados
//! 4. evidência vazia                        → DoesNotHold
//!                      senão                → Holds (herdada)
//! ```
//!
//! ## Terminação
//!
//! A fronteira é uma fila FIFO guardada por um **vetor de visitados** indexado
//! pela posição do nó: nenhum nó entra na fila duas vezes, então a ascensão
//! visita cada nó no máximo uma vez e termina mesmo com ciclos "is-a".
//!
//! ## Ordem
//!
//! A fila é semeada na ordem de inserção das arestas, então ancestrais mais
//! próximos aparecem primeiro na evidência e o resultado é estável entre
//! execuções. Todo ancestral alcançável que afirma a relação entra na
//! evidência, mesmo acima de outro que já a afirma.

use std::collections::VecDeque;

use crate::core::{SemanticNetwork, Taxonomy};

use super::policy::EdgePolicy;
use super::query::{Derivation, Query, QueryResult};

/// Decisão do visitante sobre um ancestral recém-alcançado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Continua subindo a partir deste ancestral.
    Climb,
    /// Não enfileira os pais deste ancestral.
    Stop,
}

/// Percorre os ancestrais de `start` em largura, chamando `visit` uma vez por
/// ancestral. Arestas que a política não admite não são seguidas.
///
/// Retorna quantos ancestrais foram visitados.
pub(crate) fn ascend<P, F>(
    network: &SemanticNetwork,
    taxonomy: &Taxonomy,
    policy: &P,
    start: usize,
    mut visit: F,
) -> usize
where
    P: EdgePolicy + ?Sized,
    F: FnMut(usize) -> Step,
{
    let mut visited = vec![false; network.node_count()];
    let mut frontier = VecDeque::new();
    visited[start] = true;

    let enqueue_parents = |node: usize, visited: &mut Vec<bool>, frontier: &mut VecDeque<usize>| {
        for (edge, parent) in network.parent_links(node, taxonomy) {
            if policy.admits(edge) && !visited[parent] {
                visited[parent] = true;
                frontier.push_back(parent);
            }
        }
    };

    enqueue_parents(start, &mut visited, &mut frontier);

    let mut count = 0;
    while let Some(ancestor) = frontier.pop_front() {
        count += 1;
        if visit(ancestor) == Step::Climb {
            enqueue_parents(ancestor, &mut visited, &mut frontier);
        }
    }
    count
}

/// O que um nó diz sobre `relation → target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stance {
    Asserts,
    Defeated,
    Silent,
}

/// Examina as arestas de saída de `node` rotuladas `relation` que chegam em
/// `target`. Uma exceção (quando a política a lê) prevalece sobre uma
/// afirmação no mesmo nó.
fn stance<P: EdgePolicy + ?Sized>(
    network: &SemanticNetwork,
    policy: &P,
    node: usize,
    target: usize,
    relation: &str,
) -> Stance {
    let mut asserts = false;
    for (edge, to) in network.outgoing(node) {
        if to != target || edge.label != relation {
            continue;
        }
        if policy.defeats(edge) {
            return Stance::Defeated;
        }
        if policy.admits(edge) {
            asserts = true;
        }
    }
    if asserts {
        Stance::Asserts
    } else {
        Stance::Silent
    }
}

/// Avalia uma consulta com a política fornecida.
pub(crate) fn evaluate_query<P: EdgePolicy + ?Sized>(
    network: &SemanticNetwork,
    taxonomy: &Taxonomy,
    policy: &P,
    query: &Query,
) -> QueryResult {
    let (source, target) = match (network.resolve(&query.source), network.resolve(&query.target)) {
        (Some(source), Some(target)) => (source, target),
        (source, target) => {
            let mut missing = Vec::new();
            if source.is_none() {
                missing.push(query.source.clone());
            }
            if target.is_none() {
                missing.push(query.target.clone());
            }
            tracing::debug!(query = %query, missing = ?missing, "Consulta: conhecimento insuficiente");
            return QueryResult::InsufficientKnowledge { missing };
        }
    };

    match stance(network, policy, source, target, &query.relation) {
        Stance::Asserts => {
            tracing::debug!(query = %query, "Consulta: relação direta");
            return QueryResult::Holds {
                derivation: Derivation::Direct,
                evidence: vec![network.node_at(target).label.clone()],
            };
        }
        Stance::Defeated => {
            tracing::debug!(query = %query, "Consulta: bloqueada por exceção na origem");
            return QueryResult::DoesNotHold;
        }
        Stance::Silent => {}
    }

    let mut evidence: Vec<String> = Vec::new();
    let visited = ascend(network, taxonomy, policy, source, |ancestor| {
        match stance(network, policy, ancestor, target, &query.relation) {
            Stance::Asserts => {
                let label = &network.node_at(ancestor).label;
                if !evidence.contains(label) {
                    evidence.push(label.clone());
                }
                Step::Climb
            }
            Stance::Defeated => Step::Stop,
            Stance::Silent => Step::Climb,
        }
    });

    tracing::debug!(query = %query, visited, evidence = ?evidence, "Consulta: ascensão concluída");
    if evidence.is_empty() {
        QueryResult::DoesNotHold
    } else {
        QueryResult::Holds {
            derivation: Derivation::Inherited,
            evidence,
        }
    }
}
