//! # Node — Conceito da Rede Semântica
//!
//! Um [`Node`] é um vértice da rede: uma identidade estável ([`NodeId`]) e um
//! `label` legível. O label **não** é garantidamente único — as consultas
//! resolvem nós por label, e a política para labels duplicados fica em
//! [`SemanticNetwork::node_by_label`](super::SemanticNetwork::node_by_label).
//!
//! ## Formato no Documento JSON
//!
//! ```json
//! { "id": 3, "label": "Reseaux Semantique" }
//! { "id": "n3", "label": "Reseaux Semantique" }
//! ```
//!
//! Ambos os formatos de `id` (inteiro ou string) são aceitos e viram o mesmo
//! [`NodeId`] textual.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identificador de um [`Node`], único dentro de uma rede.
///
/// Newtype sobre `String`. Na desserialização aceita inteiros e strings,
/// porque os documentos de rede existentes usam os dois.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Cria um id a partir de qualquer valor textual.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Retorna o id como `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Forma bruta do id no JSON: número ou texto.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Vértice da rede semântica: um conceito com identidade e nome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Identidade estável do nó.
    pub id: NodeId,
    /// Nome legível (ex: "Logiques Classiques"). Pode repetir entre nós.
    pub label: String,
}

impl Node {
    /// Cria um nó com o id e label fornecidos.
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
