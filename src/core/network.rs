//! # SemanticNetwork — Contêiner Indexado da Rede
//!
//! A [`SemanticNetwork`] guarda os [`Node`]s e [`Edge`]s na ordem de inserção e
//! mantém índices em memória para que o motor nunca precise varrer todas as
//! arestas a cada passo:
//!
//! - **id → posição** do nó
//! - **label → posição** do *primeiro* nó com aquele label
//! - **adjacência de saída** e **de entrada** por posição de nó
//!
//! Os índices são marcados `#[serde(skip)]` e reconstruídos via
//! [`rebuild_index()`](SemanticNetwork::rebuild_index) — a desserialização já
//! faz isso automaticamente.
//!
//! ## Arestas Pendentes
//!
//! Uma aresta cujo `from` ou `to` não existe continua em `edges`, mas fica fora
//! da adjacência: ela é **inerte**, nunca casa com nada. Se o nó que faltava for
//! adicionado depois via [`add_node()`](SemanticNetwork::add_node), a aresta é
//! reindexada.
//!
//! ## Exemplo
//!
//! ```rust
//! use semantic_network::core::SemanticNetwork;
//!
//! let mut net = SemanticNetwork::new();
//! net.add_node("1", "Chat").add_node("2", "Animal");
//! net.add_edge("1", "2", "is-a");
//! assert_eq!(net.node_by_label("Chat").map(|n| n.id.as_str()), Some("1"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::node::{Node, NodeId};
use super::taxonomy::{HierarchyDirection, Taxonomy};

/// Entrada de adjacência: a aresta e a posição do nó na outra ponta.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Adjacent {
    pub edge: usize,
    pub node: usize,
}

/// Índices em memória — nunca serializados.
#[derive(Clone, Debug, Default)]
struct NetworkIndex {
    by_id: HashMap<NodeId, usize>,
    by_label: HashMap<String, usize>,
    outgoing: Vec<Vec<Adjacent>>,
    incoming: Vec<Vec<Adjacent>>,
    /// Arestas com alguma ponta desconhecida.
    dangling: Vec<usize>,
}

/// Forma do documento de rede: `{"nodes": [...], "edges": [...]}`.
#[derive(Deserialize)]
struct NetworkDocument {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl From<NetworkDocument> for SemanticNetwork {
    fn from(doc: NetworkDocument) -> Self {
        SemanticNetwork::from_parts(doc.nodes, doc.edges)
    }
}

/// Rede semântica imutável durante as consultas.
///
/// Serializa exatamente no formato de documento (`nodes` + `edges`); os
/// índices existem só em memória.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "NetworkDocument")]
pub struct SemanticNetwork {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index: NetworkIndex,
}

impl SemanticNetwork {
    /// Cria uma rede vazia.
    pub fn new() -> Self {
        Self::default()
    }

    /// Monta uma rede a partir de listas já carregadas e constrói os índices.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut net = Self {
            nodes,
            edges,
            index: NetworkIndex::default(),
        };
        net.rebuild_index();
        net
    }

    /// Reconstrói todos os índices a partir de `nodes` e `edges`.
    ///
    /// Ids duplicados: vale o primeiro nó. Labels duplicados: idem — é a
    /// política de resolução por label da rede inteira.
    pub fn rebuild_index(&mut self) {
        let mut index = NetworkIndex {
            outgoing: vec![Vec::new(); self.nodes.len()],
            incoming: vec![Vec::new(); self.nodes.len()],
            ..NetworkIndex::default()
        };
        for (pos, node) in self.nodes.iter().enumerate() {
            index.by_id.entry(node.id.clone()).or_insert(pos);
            index.by_label.entry(node.label.clone()).or_insert(pos);
        }
        self.index = index;
        for edge_pos in 0..self.edges.len() {
            self.index_edge(edge_pos);
        }
        if !self.index.dangling.is_empty() {
            tracing::warn!(
                dangling = self.index.dangling.len(),
                "Rede: arestas com pontas inexistentes ficarão inertes"
            );
        }
    }

    /// Liga a aresta na adjacência, ou a registra como pendente.
    fn index_edge(&mut self, edge_pos: usize) -> bool {
        let edge = &self.edges[edge_pos];
        match (
            self.index.by_id.get(&edge.from).copied(),
            self.index.by_id.get(&edge.to).copied(),
        ) {
            (Some(from), Some(to)) => {
                self.index.outgoing[from].push(Adjacent {
                    edge: edge_pos,
                    node: to,
                });
                self.index.incoming[to].push(Adjacent {
                    edge: edge_pos,
                    node: from,
                });
                true
            }
            _ => {
                tracing::debug!(from = %edge.from, to = %edge.to, label = %edge.label, "Rede: aresta pendente");
                self.index.dangling.push(edge_pos);
                false
            }
        }
    }

    /// Adiciona um nó. Arestas pendentes que passam a ter as duas pontas são
    /// ligadas na adjacência.
    pub fn add_node(&mut self, id: impl Into<NodeId>, label: impl Into<String>) -> &mut Self {
        let node = Node::new(id, label);
        let pos = self.nodes.len();
        tracing::debug!(id = %node.id, label = %node.label, "Rede: nó armazenado");
        self.index.by_id.entry(node.id.clone()).or_insert(pos);
        self.index.by_label.entry(node.label.clone()).or_insert(pos);
        self.index.outgoing.push(Vec::new());
        self.index.incoming.push(Vec::new());
        self.nodes.push(node);

        let pending = std::mem::take(&mut self.index.dangling);
        for edge_pos in pending {
            self.index_edge(edge_pos);
        }
        self
    }

    /// Adiciona uma aresta comum `from -label-> to`.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        label: impl Into<String>,
    ) -> &mut Self {
        self.push_edge(Edge::new(from, to, label))
    }

    /// Adiciona uma aresta de exceção `from -label-> to`.
    pub fn add_exception(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        label: impl Into<String>,
    ) -> &mut Self {
        self.push_edge(Edge::exception(from, to, label))
    }

    /// Adiciona uma aresta já construída (de qualquer tipo).
    pub fn push_edge(&mut self, edge: Edge) -> &mut Self {
        tracing::debug!(from = %edge.from, to = %edge.to, label = %edge.label, "Rede: aresta armazenada");
        self.edges.push(edge);
        self.index_edge(self.edges.len() - 1);
        self
    }

    /// Todos os nós, na ordem de inserção.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Todas as arestas, na ordem de inserção (incluindo as pendentes).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Número de arestas inertes por referenciarem nós inexistentes.
    pub fn dangling_count(&self) -> usize {
        self.index.dangling.len()
    }

    /// Labels de todos os nós, na ordem de inserção (com repetições).
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    /// Busca nó por label (exato, case-sensitive).
    ///
    /// Com labels duplicados, retorna o **primeiro** nó na ordem de inserção.
    pub fn node_by_label(&self, label: &str) -> Option<&Node> {
        self.resolve(label).map(|pos| &self.nodes[pos])
    }

    /// Busca nó por id.
    pub fn node_by_id(&self, id: &NodeId) -> Option<&Node> {
        self.index.by_id.get(id).map(|&pos| &self.nodes[pos])
    }

    /// Posição do nó resolvido por label.
    pub(crate) fn resolve(&self, label: &str) -> Option<usize> {
        self.index.by_label.get(label).copied()
    }

    pub(crate) fn node_at(&self, pos: usize) -> &Node {
        &self.nodes[pos]
    }

    /// Arestas de saída do nó na posição `pos`, com a posição do destino.
    pub(crate) fn outgoing(&self, pos: usize) -> impl Iterator<Item = (&Edge, usize)> {
        self.index.outgoing[pos]
            .iter()
            .map(move |adj| (&self.edges[adj.edge], adj.node))
    }

    /// Arestas taxonômicas que levam do nó em `pos` a cada pai imediato, com
    /// a posição do pai. Respeita o sentido configurado na [`Taxonomy`].
    pub(crate) fn parent_links<'a>(
        &'a self,
        pos: usize,
        taxonomy: &'a Taxonomy,
    ) -> impl Iterator<Item = (&'a Edge, usize)> + 'a {
        let adjacency = match taxonomy.direction {
            HierarchyDirection::ChildToParent => &self.index.outgoing[pos],
            HierarchyDirection::ParentToChild => &self.index.incoming[pos],
        };
        adjacency
            .iter()
            .map(move |adj| (&self.edges[adj.edge], adj.node))
            .filter(move |(edge, _)| taxonomy.is_taxonomic(edge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SemanticNetwork {
        let mut net = SemanticNetwork::new();
        net.add_node("1", "Chat")
            .add_node("2", "Animal")
            .add_node("3", "Chat");
        net.add_edge("1", "2", "is-a").add_edge("2", "3", "mange");
        net
    }

    /// Labels duplicados resolvem para o primeiro nó inserido
    #[test]
    fn duplicate_label_resolves_to_first_inserted() {
        let net = sample();
        assert_eq!(net.node_by_label("Chat").unwrap().id.as_str(), "1");
        assert!(net.node_by_label("chat").is_none());
    }

    #[test]
    fn dangling_edge_is_kept_but_inert() {
        let mut net = sample();
        net.add_edge("1", "99", "is-a");
        assert_eq!(net.edge_count(), 3);
        assert_eq!(net.dangling_count(), 1);
        let pos = net.resolve("Chat").unwrap();
        let parents: Vec<usize> = net
            .parent_links(pos, &Taxonomy::default())
            .map(|(_, p)| p)
            .collect();
        assert_eq!(parents, vec![1]);
    }

    /// Aresta adicionada antes do nó de destino é ligada quando o nó chega
    #[test]
    fn pending_edge_is_indexed_when_node_arrives() {
        let mut net = SemanticNetwork::new();
        net.add_node("a", "A");
        net.add_edge("a", "b", "is-a");
        assert_eq!(net.dangling_count(), 1);
        net.add_node("b", "B");
        assert_eq!(net.dangling_count(), 0);
        assert_eq!(net.outgoing(0).count(), 1);
    }

    #[test]
    fn parent_links_follow_configured_direction() {
        let mut net = SemanticNetwork::new();
        net.add_node("g", "General").add_node("s", "Specific");
        net.add_edge("g", "s", "is a");

        let down = Taxonomy::new("is a", HierarchyDirection::ParentToChild);
        let up = Taxonomy::new("is a", HierarchyDirection::ChildToParent);
        let specific = net.resolve("Specific").unwrap();

        let parents: Vec<usize> = net.parent_links(specific, &down).map(|(_, p)| p).collect();
        assert_eq!(parents, vec![0]);
        assert_eq!(net.parent_links(specific, &up).count(), 0);
    }

    #[test]
    fn json_document_round_trip_rebuilds_index() {
        let doc = r#"{
            "nodes": [{"id": 1, "label": "A"}, {"id": 2, "label": "B"}],
            "edges": [{"from": 1, "to": 2, "label": "is-a", "edge_type": "exception"}]
        }"#;
        let net: SemanticNetwork = serde_json::from_str(doc).unwrap();
        assert_eq!(net.node_count(), 2);
        assert!(net.edges()[0].is_exception());
        assert_eq!(net.outgoing(0).count(), 1);

        let back = serde_json::to_value(&net).unwrap();
        assert_eq!(back["nodes"][1]["id"], "2");
        assert_eq!(back["edges"][0]["edge_type"], "exception");
        assert!(back.get("index").is_none());
    }
}
