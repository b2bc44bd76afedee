//! # Herança — Ancestrais e Propriedades Herdadas
//!
//! Dado um nó de partida, o coletor percorre **toda** a sua ancestralidade
//! "is-a". Em cada ancestral visitado ele junta os atributos (arestas não
//! taxonômicas) do ancestral e, em seguida, os do nó de partida.
//!
//! ```text
//! Pinguim ──is-a──▶ Ave ──is-a──▶ Animal
//!    │               │              │
//!  cor: Preto     tem: Penas     respira: Ar
//!
//! ancestrais:   [Ave, Animal]
//! propriedades: [tem: Penas, cor: Preto, respira: Ar, cor: Preto]
//! ```
//!
//! A herança aqui é **incondicional**: as propriedades não são deduplicadas
//! nem filtradas por exceções. Com `k` ancestrais os atributos do nó de
//! partida aparecem `k` vezes; um nó raiz não produz propriedade alguma.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{SemanticNetwork, Taxonomy};
use crate::error::ReasonerError;

use super::policy::Plain;
use super::propagation::{ascend, Step};

/// Um atributo herdado: nome da relação e label do nó de destino.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    pub relation: String,
    pub value: String,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.relation, self.value)
    }
}

/// Relatório do coletor: ancestrais e propriedades, na ordem de descoberta.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceReport {
    pub ancestors: Vec<String>,
    pub properties: Vec<Property>,
}

/// Anexa as arestas não taxonômicas que saem de `node`.
fn push_properties(
    network: &SemanticNetwork,
    taxonomy: &Taxonomy,
    node: usize,
    properties: &mut Vec<Property>,
) {
    properties.extend(
        network
            .outgoing(node)
            .filter(|(edge, _)| !taxonomy.is_taxonomic(edge))
            .map(|(edge, to)| Property {
                relation: edge.label.clone(),
                value: network.node_at(to).label.clone(),
            }),
    );
}

/// Coleta a ancestralidade e as propriedades herdadas de `start`.
///
/// Para cada ancestral, na ordem em que foi alcançado, vêm as propriedades
/// dele seguidas das do nó de partida.
pub(crate) fn collect(
    network: &SemanticNetwork,
    taxonomy: &Taxonomy,
    start: &str,
) -> Result<InheritanceReport, ReasonerError> {
    let start_pos = network
        .resolve(start)
        .ok_or_else(|| ReasonerError::NodeNotFound(start.to_string()))?;

    let mut report = InheritanceReport::default();
    ascend(network, taxonomy, &Plain, start_pos, |ancestor| {
        report.ancestors.push(network.node_at(ancestor).label.clone());
        push_properties(network, taxonomy, ancestor, &mut report.properties);
        push_properties(network, taxonomy, start_pos, &mut report.properties);
        Step::Climb
    });

    tracing::debug!(
        start,
        ancestors = report.ancestors.len(),
        properties = report.properties.len(),
        "Herança: coleta concluída"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HierarchyDirection;

    fn prop(relation: &str, value: &str) -> Property {
        Property {
            relation: relation.to_string(),
            value: value.to_string(),
        }
    }

    /// A is-a B is-a C, com uma propriedade em cada nível
    fn three_levels() -> SemanticNetwork {
        let mut net = SemanticNetwork::new();
        for (id, label) in [("a", "A"), ("b", "B"), ("c", "C"), ("x", "X"), ("y", "Y"), ("z", "Z")] {
            net.add_node(id, label);
        }
        net.add_edge("a", "b", "is-a")
            .add_edge("b", "c", "is-a")
            .add_edge("a", "x", "p")
            .add_edge("b", "y", "q")
            .add_edge("c", "z", "r");
        net
    }

    #[test]
    fn three_level_chain_is_collected_completely() {
        let report = collect(&three_levels(), &Taxonomy::default(), "A").unwrap();
        assert_eq!(report.ancestors, vec!["B", "C"]);
        assert_eq!(
            report.properties,
            vec![prop("q", "Y"), prop("p", "X"), prop("r", "Z"), prop("p", "X")]
        );
    }

    /// Os atributos do nó de partida se repetem uma vez por ancestral
    #[test]
    fn start_properties_repeat_for_each_ancestor() {
        let mut net = SemanticNetwork::new();
        for (id, label) in [("a", "A"), ("b", "B"), ("c", "C"), ("x", "X")] {
            net.add_node(id, label);
        }
        net.add_edge("a", "b", "is-a")
            .add_edge("b", "c", "is-a")
            .add_edge("a", "x", "p");
        let report = collect(&net, &Taxonomy::default(), "A").unwrap();
        assert_eq!(report.properties, vec![prop("p", "X"), prop("p", "X")]);
    }

    /// Raiz com atributos próprios: sem ancestrais, nada é coletado
    #[test]
    fn root_reports_no_properties_even_with_own_attributes() {
        let mut net = SemanticNetwork::new();
        net.add_node("r", "Raiz").add_node("v", "V");
        net.add_edge("r", "v", "q");
        let report = collect(&net, &Taxonomy::default(), "Raiz").unwrap();
        assert_eq!(report, InheritanceReport::default());
    }

    #[test]
    fn unknown_start_is_node_not_found() {
        let err = collect(&three_levels(), &Taxonomy::default(), "Ghost").unwrap_err();
        assert_eq!(err, ReasonerError::NodeNotFound("Ghost".to_string()));
    }

    /// Nó raiz sem propriedades: os dois relatórios vêm vazios
    #[test]
    fn root_without_attributes_yields_empty_report() {
        let report = collect(&three_levels(), &Taxonomy::default(), "Z").unwrap();
        assert_eq!(report, InheritanceReport::default());
    }

    /// Propriedades repetidas em níveis diferentes não são deduplicadas
    #[test]
    fn properties_are_not_deduplicated_nor_filtered() {
        let mut net = three_levels();
        net.add_edge("c", "y", "q").add_exception("b", "z", "r");
        let report = collect(&net, &Taxonomy::default(), "A").unwrap();
        let qs = report.properties.iter().filter(|p| **p == prop("q", "Y")).count();
        assert_eq!(qs, 2);
        assert!(report.properties.contains(&prop("r", "Z")));
        assert_eq!(report.properties.len(), 6);
    }

    #[test]
    fn diamond_visits_each_ancestor_once() {
        let mut net = SemanticNetwork::new();
        for (id, label) in [("a", "A"), ("l", "L"), ("r", "R"), ("t", "Top")] {
            net.add_node(id, label);
        }
        net.add_edge("a", "l", "is-a")
            .add_edge("a", "r", "is-a")
            .add_edge("l", "t", "is-a")
            .add_edge("r", "t", "is-a")
            .add_edge("t", "l", "is-a");
        let report = collect(&net, &Taxonomy::default(), "A").unwrap();
        assert_eq!(report.ancestors, vec!["L", "R", "Top"]);
    }

    /// Arestas pendentes não viram ancestrais nem propriedades
    #[test]
    fn dangling_edges_are_not_collected() {
        let mut net = three_levels();
        net.add_edge("a", "ghost", "is-a").add_edge("b", "phantom", "s");
        let report = collect(&net, &Taxonomy::default(), "A").unwrap();
        assert_eq!(report.ancestors, vec!["B", "C"]);
        assert_eq!(report.properties.len(), 4);
        assert!(report.properties.iter().all(|p| p.relation != "s"));
    }

    #[test]
    fn property_displays_as_relation_colon_value() {
        assert_eq!(prop("contient", "Axiome A7").to_string(), "contient: Axiome A7");
    }

    #[test]
    fn parent_to_child_taxonomy_is_honoured() {
        let mut net = SemanticNetwork::new();
        net.add_node("1", "Animal").add_node("2", "Chat").add_node("3", "Poils");
        net.add_edge("1", "2", "is a").add_edge("1", "3", "a");
        let taxonomy = Taxonomy::new("is a", HierarchyDirection::ParentToChild);
        let report = collect(&net, &taxonomy, "Chat").unwrap();
        assert_eq!(report.ancestors, vec!["Animal"]);
        assert_eq!(report.properties, vec![prop("a", "Poils")]);
    }
}
