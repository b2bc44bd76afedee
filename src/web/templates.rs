//! # Templates Maud — HTML Server-Side Rendering
//!
//! Páginas e fragmentos HTMX renderizados com o macro
//! [`maud`](https://maud.lambda.xyz/). O servidor devolve **fragmentos HTML**
//! que o HTMX injeta em `#results`.
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`full_page()`] | Página completa | Resumo da rede, nós, formulários |
//! | [`query_result()`] | Fragment | Desfecho de uma consulta |
//! | [`inheritance_report()`] | Fragment | Ancestrais + propriedades |
//! | [`error_fragment()`] | Fragment | Mensagem de erro |
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────── nav-bar ──────────────────────┐
//! │ RS │ N nós · M arestas · taxonomia │ carga    │
//! ├────────────────────────┬──────────────────────┤
//! │ Consulta  [src][tgt][r]│ Nós disponíveis      │
//! │ Herança   [start]      │  - ...               │
//! │ Upload    [json]       │                      │
//! ├────────────────────────┴──────────────────────┤
//! │ #results (fragmentos acumulados)              │
//! └───────────────────────────────────────────────┘
//! ```

use maud::{html, Markup, DOCTYPE};

use crate::core::Taxonomy;
use crate::inference::{Derivation, InheritanceReport, Mode, Query, QueryResult};

use super::state::ServedNetwork;

/// Página principal.
pub fn full_page(served: &ServedNetwork, taxonomy: &Taxonomy) -> Markup {
    let network = &served.network;
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Rede Semântica — Propagação de Marcadores" }
                link rel="stylesheet" href="/assets/style.css";
                script src="https://unpkg.com/htmx.org@2.0.4" {}
            }
            body {
                nav class="nav-bar" {
                    span class="nav-brand" { "RS" }
                    span class="nav-summary" {
                        (network.node_count()) " nós · "
                        (network.edge_count()) " arestas · taxonomia "
                        code { (taxonomy.label) } " (" (taxonomy.direction.as_str()) ")"
                    }
                    span class="nav-origin" {
                        (served.origin) " — carregada em "
                        (served.loaded_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                    }
                }
                @if network.dangling_count() > 0 {
                    div class="warning" {
                        "⚠️ " (network.dangling_count())
                        " aresta(s) referenciam nós inexistentes e serão ignoradas."
                    }
                }
                div class="app-container" {
                    div class="forms" {
                        section {
                            h2 { "Consulta" }
                            form hx-post="/query" hx-target="#results" hx-swap="afterbegin" {
                                (node_input("source", "Origem"))
                                (node_input("target", "Destino"))
                                input type="text" name="relation" placeholder="Relação" required;
                                select name="mode" {
                                    option value="plain" { (Mode::Plain.label()) }
                                    option value="defeasible" { (Mode::Defeasible.label()) }
                                }
                                button type="submit" { "Avaliar" }
                            }
                        }
                        section {
                            h2 { "Herança" }
                            form hx-post="/inheritance" hx-target="#results" hx-swap="afterbegin" {
                                (node_input("start", "Nó de partida"))
                                button type="submit" { "Coletar" }
                            }
                        }
                        section {
                            h2 { "Carregar rede" }
                            form hx-post="/upload" hx-target="#results" hx-swap="afterbegin"
                                hx-encoding="multipart/form-data" {
                                input type="file" name="network" accept="application/json,.json";
                                button type="submit" { "Enviar" }
                            }
                        }
                    }
                    aside class="nodes" {
                        h2 { "Nós disponíveis" }
                        datalist id="node-labels" {
                            @for label in network.labels() {
                                option value=(label) {}
                            }
                        }
                        @if network.node_count() == 0 {
                            p class="empty" { "Rede vazia — carregue um documento JSON." }
                        } @else {
                            ul {
                                @for label in network.labels() {
                                    li { (label) }
                                }
                            }
                        }
                    }
                }
                div id="results" class="results" {}
            }
        }
    }
}

fn node_input(name: &str, placeholder: &str) -> Markup {
    html! {
        input type="text" name=(name) placeholder=(placeholder) list="node-labels" required;
    }
}

/// Fragmento com o desfecho de uma consulta.
pub fn query_result(query: &Query, mode: Mode, result: &QueryResult) -> Markup {
    let (class, title) = match result {
        QueryResult::Holds { derivation: Derivation::Direct, .. } => ("holds", "Relação direta"),
        QueryResult::Holds { derivation: Derivation::Inherited, .. } => ("holds", "Relação herdada"),
        QueryResult::DoesNotHold => ("does-not-hold", "Não vale"),
        QueryResult::InsufficientKnowledge { .. } => ("insufficient", "Conhecimento insuficiente"),
    };
    html! {
        div class=(format!("result {class}")) {
            div class="result-title" {
                (title) " · " span class="mode" { (mode.label()) }
            }
            div class="result-query" {
                strong { (query.source) } " " em { (query.relation) } " " strong { (query.target) }
            }
            div class="result-content" { (result.to_string()) }
        }
    }
}

/// Fragmento com ancestrais e propriedades herdadas.
///
/// Lista vazia de propriedades é exibida como "nenhuma".
pub fn inheritance_report(start: &str, report: &InheritanceReport) -> Markup {
    html! {
        div class="result inheritance" {
            div class="result-title" { "Inferência a partir de " strong { (start) } }
            h3 { "Ancestrais" }
            @if report.ancestors.is_empty() {
                p class="empty" { "nenhum" }
            } @else {
                ul {
                    @for ancestor in &report.ancestors {
                        li { (ancestor) }
                    }
                }
            }
            h3 { "Propriedades deduzidas" }
            @if report.properties.is_empty() {
                p class="empty" { "nenhuma" }
            } @else {
                ul {
                    @for property in &report.properties {
                        li { (property.to_string()) }
                    }
                }
            }
        }
    }
}

/// Fragmento de erro.
pub fn error_fragment(message: &str) -> Markup {
    html! {
        div class="result error" {
            div class="result-title" { "Erro" }
            div class="result-content" { (message) }
        }
    }
}
