//! # Consultas e Resultados
//!
//! Uma [`Query`] pergunta se `relation` vale de `source` para `target`,
//! diretamente ou por herança. A resposta é um [`QueryResult`] com três
//! desfechos distintos — e a distinção entre "não vale" e "não sei" importa:
//!
//! | Desfecho | Quando |
//! |----------|--------|
//! | `Holds` | Aresta direta, ou herdada de algum ancestral |
//! | `DoesNotHold` | Ascensão esgotada sem encontrar a relação |
//! | `InsufficientKnowledge` | `source` ou `target` não existe na rede |
//!
//! ## JSON
//!
//! ```json
//! { "outcome": "holds", "derivation": "inherited", "evidence": ["Logiques Classiques"] }
//! { "outcome": "does-not-hold" }
//! { "outcome": "insufficient-knowledge", "missing": ["Ghost"] }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Uma consulta relacional: "`source` tem `relation` com `target`?".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    pub source: String,
    pub target: String,
    pub relation: String,
}

impl Query {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation: relation.into(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.relation, self.target)
    }
}

/// Qual variante do motor avaliar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Motor simples — exceções são arestas comuns.
    #[default]
    Plain,
    /// Motor com exceções — arestas de exceção bloqueiam a herança.
    Defeasible,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Plain => "propagação de marcadores",
            Mode::Defeasible => "propagação com exceções",
        }
    }
}

/// Como um `Holds` foi estabelecido.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Derivation {
    /// Existe a aresta `source -relation-> target`.
    Direct,
    /// A relação foi herdada de um ou mais ancestrais.
    Inherited,
}

/// Resultado de uma consulta.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum QueryResult {
    /// A relação vale.
    ///
    /// `evidence`: para relação direta, o próprio label do alvo; para relação
    /// herdada, os labels dos ancestrais que afirmam a relação diretamente,
    /// na ordem em que foram descobertos, sem repetição.
    Holds {
        derivation: Derivation,
        evidence: Vec<String>,
    },
    /// A relação não vale — resposta negativa válida.
    DoesNotHold,
    /// Algum dos labels consultados não existe na rede.
    InsufficientKnowledge { missing: Vec<String> },
}

impl QueryResult {
    pub fn holds(&self) -> bool {
        matches!(self, QueryResult::Holds { .. })
    }

    /// Labels de evidência, vazio quando a relação não vale.
    pub fn evidence(&self) -> &[String] {
        match self {
            QueryResult::Holds { evidence, .. } => evidence,
            _ => &[],
        }
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryResult::Holds { evidence, .. } => {
                write!(f, "existe um vínculo entre os 2 nós: {}", evidence.join(", "))
            }
            QueryResult::DoesNotHold => f.write_str("não existe vínculo entre os 2 nós"),
            QueryResult::InsufficientKnowledge { missing } => write!(
                f,
                "nenhuma resposta por falta de conhecimento (desconhecido: {})",
                missing.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_is_internally_tagged() {
        let r = QueryResult::Holds {
            derivation: Derivation::Inherited,
            evidence: vec!["B".into()],
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["outcome"], "holds");
        assert_eq!(json["derivation"], "inherited");

        let json = serde_json::to_value(QueryResult::DoesNotHold).unwrap();
        assert_eq!(json["outcome"], "does-not-hold");
    }

    #[test]
    fn mode_defaults_to_plain() {
        let m: Mode = serde_json::from_str(r#""defeasible""#).unwrap();
        assert_eq!(m, Mode::Defeasible);
        assert_eq!(Mode::default(), Mode::Plain);
    }
}
