//! Testes de propriedade do motor de inferência.
//!
//! Invariantes que valem para qualquer rede, inclusive com ciclos:
//! - toda consulta entre nós conhecidos termina com um desfecho definido
//! - os dois motores concordam quando não há arestas de exceção
//! - lotes devolvem um resultado por consulta, na ordem
//! - o relatório de herança nunca lista o nó de partida nem repete ancestrais

use proptest::prelude::*;

use semantic_network::core::{Edge, SemanticNetwork};
use semantic_network::inference::{self, Derivation, Mode, Query, QueryResult, Reasoner};

/// Aresta bruta: (origem, destino, taxonômica?, exceção?)
type RawEdge = (usize, usize, bool, bool);

fn label(i: usize) -> String {
    format!("N{i}")
}

fn build(nodes: usize, edges: &[RawEdge]) -> SemanticNetwork {
    let mut net = SemanticNetwork::new();
    for i in 0..nodes {
        net.add_node(i as u64, label(i));
    }
    for &(from, to, taxonomic, exception) in edges {
        let relation = if taxonomic { "is-a" } else { "R" };
        let (from, to) = ((from % nodes) as u64, (to % nodes) as u64);
        if exception {
            net.push_edge(Edge::exception(from, to, relation));
        } else {
            net.push_edge(Edge::new(from, to, relation));
        }
    }
    net
}

/// Rede aleatória; ciclos e laços são permitidos.
fn arb_network(with_exceptions: bool) -> impl Strategy<Value = (usize, Vec<RawEdge>)> {
    (1usize..8).prop_flat_map(move |n| {
        let exception = if with_exceptions {
            prop::bool::weighted(0.2).boxed()
        } else {
            Just(false).boxed()
        };
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, any::<bool>(), exception), 0..20),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn every_query_between_known_nodes_is_decided(
        (n, edges) in arb_network(true),
        s in 0usize..8,
        t in 0usize..8,
    ) {
        let net = build(n, &edges);
        let (s, t) = (label(s % n), label(t % n));
        for result in [
            inference::evaluate(&net, &s, &t, "R"),
            inference::evaluate_with_exceptions(&net, &s, &t, "R"),
        ] {
            prop_assert!(
                !matches!(result, QueryResult::InsufficientKnowledge { .. }),
                "{s} -R-> {t}: {result:?}"
            );
        }
    }

    #[test]
    fn engines_agree_without_exceptions(
        (n, edges) in arb_network(false),
        s in 0usize..8,
        t in 0usize..8,
    ) {
        let net = build(n, &edges);
        let (s, t) = (label(s % n), label(t % n));
        prop_assert_eq!(
            inference::evaluate(&net, &s, &t, "R"),
            inference::evaluate_with_exceptions(&net, &s, &t, "R")
        );
    }

    #[test]
    fn evaluation_is_deterministic(
        (n, edges) in arb_network(true),
        s in 0usize..8,
        t in 0usize..8,
    ) {
        let net = build(n, &edges);
        let (s, t) = (label(s % n), label(t % n));
        prop_assert_eq!(
            inference::evaluate_with_exceptions(&net, &s, &t, "R"),
            inference::evaluate_with_exceptions(&net, &s, &t, "R")
        );
    }

    /// Uma aresta comum direta sempre decide no motor simples
    #[test]
    fn direct_edge_holds_directly(
        (n, edges) in arb_network(true),
        s in 0usize..8,
        t in 0usize..8,
    ) {
        let mut net = build(n, &edges);
        let (s, t) = (s % n, t % n);
        net.add_edge(s as u64, t as u64, "R");
        let result = inference::evaluate(&net, &label(s), &label(t), "R");
        prop_assert_eq!(
            result,
            QueryResult::Holds { derivation: Derivation::Direct, evidence: vec![label(t)] }
        );
    }

    #[test]
    fn batch_matches_sequential_evaluation(
        (n, edges) in arb_network(true),
        pairs in prop::collection::vec((0usize..10, 0usize..10), 0..16),
    ) {
        let net = build(n, &edges);
        // Índices >= n viram nós desconhecidos.
        let queries: Vec<Query> = pairs
            .iter()
            .map(|&(s, t)| Query::new(label(s), label(t), "R"))
            .collect();
        let reasoner = Reasoner::default();
        let batch = reasoner.evaluate_batch(&net, &queries, Mode::Defeasible);
        prop_assert_eq!(batch.len(), queries.len());
        for (query, result) in queries.iter().zip(&batch) {
            prop_assert_eq!(
                result,
                &reasoner.evaluate_query(&net, query, Mode::Defeasible)
            );
        }
    }

    #[test]
    fn inheritance_ancestors_are_unique_and_exclude_start(
        (n, edges) in arb_network(true),
        s in 0usize..8,
    ) {
        let net = build(n, &edges);
        let start = label(s % n);
        let report = inference::collect_inheritance(&net, &start).unwrap();
        prop_assert!(!report.ancestors.contains(&start));
        let mut seen = report.ancestors.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), report.ancestors.len());
    }
}
