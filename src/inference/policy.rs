//! # Políticas de Aresta — O Único Ponto de Variação
//!
//! O motor simples e o motor com exceções são **o mesmo algoritmo** de
//! ascensão; só muda a pergunta "esta aresta conta?". Essa pergunta é o trait
//! [`EdgePolicy`]:
//!
//! | Política | `admits` | `defeats` |
//! |----------|----------|-----------|
//! | [`Plain`] | toda aresta | nenhuma |
//! | [`Defeasible`] | só arestas comuns | arestas de exceção |
//!
//! - **admits** — a aresta pode afirmar a relação e pode ser seguida na ascensão.
//! - **defeats** — a aresta anula, naquele nó, o padrão "este nó tem a relação
//!   com o alvo"; a ascensão não sobe além desse nó por esse caminho.
//!
//! Em redes sem nenhuma aresta de exceção as duas políticas respondem igual,
//! portanto os dois motores concordam.

use crate::core::Edge;

/// Decide quais arestas participam de uma avaliação.
pub trait EdgePolicy: Sync {
    /// A aresta pode afirmar a relação consultada e pode ser seguida na ascensão.
    fn admits(&self, edge: &Edge) -> bool;

    /// A aresta bloqueia a herança padrão da relação no nó de onde sai.
    fn defeats(&self, _edge: &Edge) -> bool {
        false
    }
}

/// Política do motor simples: ignora o tipo da aresta.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl EdgePolicy for Plain {
    fn admits(&self, _edge: &Edge) -> bool {
        true
    }
}

/// Política do motor com exceções: exceções nunca afirmam, só bloqueiam.
#[derive(Clone, Copy, Debug, Default)]
pub struct Defeasible;

impl EdgePolicy for Defeasible {
    fn admits(&self, edge: &Edge) -> bool {
        !edge.is_exception()
    }

    fn defeats(&self, edge: &Edge) -> bool {
        edge.is_exception()
    }
}
