//! # Edge — Relação Rotulada Entre Nós
//!
//! Uma [`Edge`] liga dois nós (`from` → `to`) e carrega um `label` que nomeia a
//! relação. O label taxonômico (por padrão `is-a`, veja
//! [`Taxonomy`](super::Taxonomy)) marca subsunção; qualquer outro label é um
//! atributo ou relação comum.
//!
//! ## Tipos de Aresta ([`EdgeKind`])
//!
//! | Tipo | JSON (`edge_type`) | Significado |
//! |------|--------------------|-------------|
//! | `Ordinary` | ausente, `null` ou qualquer outro valor | Afirma a relação |
//! | `Exception` | `"exception"` | Bloqueia a herança padrão da relação naquele ponto |
//!
//! O motor simples ignora o tipo e trata exceções como arestas comuns; só o
//! motor com exceções ([`Mode::Defeasible`](crate::inference::Mode)) as
//! interpreta.
//!
//! ## Exemplo
//!
//! ```json
//! { "from": 1, "to": 4, "label": "contient", "edge_type": "exception" }
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use super::node::NodeId;

/// Tipo de uma [`Edge`]: comum ou exceção.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Aresta comum — afirma a relação.
    #[default]
    Ordinary,
    /// Aresta de exceção — bloqueia a herança padrão da relação.
    Exception,
}

impl EdgeKind {
    /// `true` para [`EdgeKind::Ordinary`]. Usado para omitir o campo no JSON.
    pub fn is_ordinary(&self) -> bool {
        matches!(self, EdgeKind::Ordinary)
    }
}

/// Lê `edge_type` com a mesma tolerância dos documentos existentes:
/// só `"exception"` marca exceção.
fn kind_from_tag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EdgeKind, D::Error> {
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(match tag.as_deref() {
        Some("exception") => EdgeKind::Exception,
        _ => EdgeKind::Ordinary,
    })
}

/// Aresta dirigida e rotulada da rede semântica.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Nó de origem.
    pub from: NodeId,
    /// Nó de destino.
    pub to: NodeId,
    /// Nome da relação (ex: "is-a", "contient").
    pub label: String,
    /// Comum ou exceção. Serializado como `edge_type`, omitido quando comum.
    #[serde(
        rename = "edge_type",
        default,
        deserialize_with = "kind_from_tag",
        skip_serializing_if = "EdgeKind::is_ordinary"
    )]
    pub kind: EdgeKind,
}

impl Edge {
    /// Cria uma aresta comum.
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: label.into(),
            kind: EdgeKind::Ordinary,
        }
    }

    /// Cria uma aresta de exceção.
    pub fn exception(
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind: EdgeKind::Exception,
            ..Self::new(from, to, label)
        }
    }

    pub fn is_exception(&self) -> bool {
        self.kind == EdgeKind::Exception
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_type_exception_is_recognized() {
        let e: Edge =
            serde_json::from_str(r#"{"from": 1, "to": 2, "label": "r", "edge_type": "exception"}"#)
                .unwrap();
        assert!(e.is_exception());
    }

    /// Ausência, `null` ou valores desconhecidos contam como aresta comum
    #[test]
    fn other_edge_types_are_ordinary() {
        for doc in [
            r#"{"from": 1, "to": 2, "label": "r"}"#,
            r#"{"from": 1, "to": 2, "label": "r", "edge_type": null}"#,
            r#"{"from": 1, "to": 2, "label": "r", "edge_type": "default"}"#,
        ] {
            let e: Edge = serde_json::from_str(doc).unwrap();
            assert_eq!(e.kind, EdgeKind::Ordinary, "{doc}");
        }
    }

    #[test]
    fn ordinary_kind_is_omitted_when_serializing() {
        let json = serde_json::to_value(Edge::new("a", "b", "r")).unwrap();
        assert!(json.get("edge_type").is_none());
        let json = serde_json::to_value(Edge::exception("a", "b", "r")).unwrap();
        assert_eq!(json["edge_type"], "exception");
    }
}
