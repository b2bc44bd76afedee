//! # Configuração — Variáveis de Ambiente
//!
//! Toda configuração vem de variáveis de ambiente com padrões sensatos, no
//! mesmo espírito do `RUST_LOG` usado pelo tracing:
//!
//! | Variável | Padrão | Significado |
//! |----------|--------|-------------|
//! | `SEMNET_ADDR` | `0.0.0.0:3000` | Endereço do servidor |
//! | `SEMNET_NETWORK` | `data/network.json` | Documento da rede |
//! | `SEMNET_TAXONOMY_LABEL` | `is-a` | Label das arestas taxonômicas |
//! | `SEMNET_HIERARCHY` | `child-to-parent` | Ou `parent-to-child` |
//!
//! ```bash
//! SEMNET_TAXONOMY_LABEL="is a" SEMNET_HIERARCHY=parent-to-child cargo run
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::core::{HierarchyDirection, Taxonomy, DEFAULT_TAXONOMY_LABEL};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_NETWORK_PATH: &str = "data/network.json";

/// Configuração do servidor e do motor.
#[derive(Clone, Debug)]
pub struct Settings {
    pub addr: SocketAddr,
    pub network_path: PathBuf,
    pub taxonomy: Taxonomy,
}

impl Settings {
    /// Lê a configuração das variáveis de ambiente do processo.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lê a configuração de uma função de busca qualquer (útil em testes).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("SEMNET_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("SEMNET_ADDR inválido: '{addr}'"))?;

        let network_path = lookup("SEMNET_NETWORK")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NETWORK_PATH));

        let label = lookup("SEMNET_TAXONOMY_LABEL")
            .unwrap_or_else(|| DEFAULT_TAXONOMY_LABEL.to_string());
        if label.trim().is_empty() {
            return Err(anyhow!("SEMNET_TAXONOMY_LABEL não pode ser vazio"));
        }

        let direction = match lookup("SEMNET_HIERARCHY") {
            Some(raw) => raw
                .parse::<HierarchyDirection>()
                .map_err(|e| anyhow!("SEMNET_HIERARCHY: {e}"))?,
            None => HierarchyDirection::default(),
        };

        Ok(Self {
            addr,
            network_path,
            taxonomy: Taxonomy::new(label, direction),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.addr.port(), 3000);
        assert_eq!(s.network_path, PathBuf::from("data/network.json"));
        assert_eq!(s.taxonomy, Taxonomy::default());
    }

    #[test]
    fn overrides_are_read() {
        let s = settings(&[
            ("SEMNET_ADDR", "127.0.0.1:8080"),
            ("SEMNET_NETWORK", "/tmp/net.json"),
            ("SEMNET_TAXONOMY_LABEL", "is a"),
            ("SEMNET_HIERARCHY", "parent-to-child"),
        ])
        .unwrap();
        assert_eq!(s.addr.port(), 8080);
        assert_eq!(s.taxonomy.label, "is a");
        assert_eq!(s.taxonomy.direction, HierarchyDirection::ParentToChild);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(settings(&[("SEMNET_ADDR", "not-an-addr")]).is_err());
        assert!(settings(&[("SEMNET_HIERARCHY", "sideways")]).is_err());
        assert!(settings(&[("SEMNET_TAXONOMY_LABEL", "  ")]).is_err());
    }
}
