//! # Taxonomy — Quais Arestas São "is-a"
//!
//! A [`Taxonomy`] diz ao motor **qual label** marca subsunção e **em que
//! sentido** essas arestas apontam. Os documentos de rede existentes usam duas
//! convenções:
//!
//! ```text
//! ChildToParent:  Chat ──is-a──▶ Animal     ("Chat is-a Animal")
//! ParentToChild:  Animal ──is a──▶ Chat     (ascensão segue arestas cujo `to`
//!                                             é o nó atual e sobe para o `from`)
//! ```
//!
//! O padrão é `is-a` com [`HierarchyDirection::ChildToParent`]: a ascensão
//! parte do nó atual pelas arestas cujo `from` é ele e sobe para o `to`. É o
//! inverso da regra de propagação "arestas is-a cujo `to` é o nó atual". Para
//! redes escritas nessa convenção use [`HierarchyDirection::ParentToChild`]
//! (ou `SEMNET_HIERARCHY=parent-to-child`), que reproduz a regra literalmente.
//! O coletor de herança, por sua vez, sempre usou `from` → `to`; com o padrão
//! os dois algoritmos leem a hierarquia no mesmo sentido.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::edge::Edge;

/// Label taxonômico padrão.
pub const DEFAULT_TAXONOMY_LABEL: &str = "is-a";

/// Sentido em que as arestas taxonômicas são armazenadas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HierarchyDirection {
    /// `from` é o conceito específico, `to` o genérico.
    #[default]
    ChildToParent,
    /// `from` é o conceito genérico, `to` o específico.
    ParentToChild,
}

impl HierarchyDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            HierarchyDirection::ChildToParent => "child-to-parent",
            HierarchyDirection::ParentToChild => "parent-to-child",
        }
    }
}

impl fmt::Display for HierarchyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HierarchyDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "child-to-parent" | "child_to_parent" | "up" => Ok(HierarchyDirection::ChildToParent),
            "parent-to-child" | "parent_to_child" | "down" => Ok(HierarchyDirection::ParentToChild),
            other => Err(format!(
                "direção de hierarquia desconhecida: '{other}' (use child-to-parent ou parent-to-child)"
            )),
        }
    }
}

/// Identificação das arestas taxonômicas: label + sentido.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Label que marca subsunção (ex: "is-a", "is a").
    pub label: String,
    /// Sentido das arestas com esse label.
    pub direction: HierarchyDirection,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            label: DEFAULT_TAXONOMY_LABEL.to_string(),
            direction: HierarchyDirection::default(),
        }
    }
}

impl Taxonomy {
    pub fn new(label: impl Into<String>, direction: HierarchyDirection) -> Self {
        Self {
            label: label.into(),
            direction,
        }
    }

    /// `true` se a aresta é taxonômica (label igual ao configurado).
    pub fn is_taxonomic(&self, edge: &Edge) -> bool {
        edge.label == self.label
    }
}
