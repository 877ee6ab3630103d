//! Built-in technology catalog.
//!
//! Category labels double as the `tiers` value of a technology choice, so
//! they are the French labels the document template prints.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A product offered by the catalog, with its selectable versions
/// (newest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogProduct {
    pub name: &'static str,
    pub versions: &'static [&'static str],
}

const fn product(name: &'static str, versions: &'static [&'static str]) -> CatalogProduct {
    CatalogProduct { name, versions }
}

const OS_PRODUCTS: &[CatalogProduct] = &[
    product("Debian", &["12 (Bookworm)", "11 (Bullseye)", "10 (Buster)"]),
    product("Ubuntu Server", &["24.04 LTS", "22.04 LTS", "20.04 LTS"]),
    product("RHEL", &["9", "8", "7"]),
    product("Rocky Linux", &["9", "8"]),
    product("AlmaLinux", &["9", "8"]),
    product("Windows Server", &["2022", "2019", "2016"]),
];

const WEB_PRODUCTS: &[CatalogProduct] = &[
    product("Nginx", &["1.26", "1.24", "1.22"]),
    product("Apache", &["2.4.58", "2.4.57", "2.4.54"]),
    product("Traefik", &["3.0", "2.11", "2.10"]),
    product("Caddy", &["2.7", "2.6"]),
];

const DATABASE_PRODUCTS: &[CatalogProduct] = &[
    product("PostgreSQL", &["16", "15", "14", "13"]),
    product("MariaDB", &["11.2", "10.11", "10.6"]),
    product("MySQL", &["8.2", "8.0", "5.7"]),
    product("MongoDB", &["7.0", "6.0", "5.0"]),
    product("Redis", &["7.2", "7.0", "6.2"]),
];

const RUNTIME_PRODUCTS: &[CatalogProduct] = &[
    product("Node.js", &["22 LTS", "20 LTS", "18 LTS"]),
    product("Python", &["3.12", "3.11", "3.10", "3.9"]),
    product("Java (OpenJDK)", &["21 LTS", "17 LTS", "11 LTS"]),
    product("PHP", &["8.3", "8.2", "8.1"]),
    product(".NET", &["8.0", "7.0", "6.0 LTS"]),
    product("Go", &["1.22", "1.21", "1.20"]),
];

const CONTAINER_PRODUCTS: &[CatalogProduct] = &[
    product("Docker", &["25.0", "24.0", "23.0"]),
    product("Podman", &["4.9", "4.8", "4.7"]),
    product("Kubernetes", &["1.29", "1.28", "1.27"]),
    product("Docker Compose", &["2.24", "2.23", "2.22"]),
];

const MESSAGING_PRODUCTS: &[CatalogProduct] = &[
    product("RabbitMQ", &["3.13", "3.12", "3.11"]),
    product("Apache Kafka", &["3.6", "3.5", "3.4"]),
    product("ActiveMQ", &["6.0", "5.18", "5.17"]),
];

const MONITORING_PRODUCTS: &[CatalogProduct] = &[
    product("Prometheus", &["2.49", "2.48", "2.47"]),
    product("Grafana", &["10.3", "10.2", "10.1"]),
    product("ELK Stack", &["8.12", "8.11", "8.10"]),
    product("Zabbix", &["7.0", "6.4", "6.0 LTS"]),
];

/// Technology categories ("tiers") of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechCategory {
    OperatingSystem,
    WebServer,
    Database,
    Runtime,
    Container,
    Messaging,
    Monitoring,
}

static BY_LABEL: Lazy<HashMap<&'static str, TechCategory>> = Lazy::new(|| {
    TechCategory::ALL
        .into_iter()
        .map(|category| (category.label(), category))
        .collect()
});

impl TechCategory {
    /// All categories, in display order.
    pub const ALL: [TechCategory; 7] = [
        TechCategory::OperatingSystem,
        TechCategory::WebServer,
        TechCategory::Database,
        TechCategory::Runtime,
        TechCategory::Container,
        TechCategory::Messaging,
        TechCategory::Monitoring,
    ];

    /// The tier label stored in technology choices.
    pub fn label(&self) -> &'static str {
        match self {
            TechCategory::OperatingSystem => "Systèmes d'exploitation",
            TechCategory::WebServer => "Serveurs Web",
            TechCategory::Database => "Bases de données",
            TechCategory::Runtime => "Runtimes & Langages",
            TechCategory::Container => "Conteneurisation & Orchestration",
            TechCategory::Messaging => "Messaging & Queue",
            TechCategory::Monitoring => "Monitoring & Logs",
        }
    }

    /// Products offered in this category.
    pub fn products(&self) -> &'static [CatalogProduct] {
        match self {
            TechCategory::OperatingSystem => OS_PRODUCTS,
            TechCategory::WebServer => WEB_PRODUCTS,
            TechCategory::Database => DATABASE_PRODUCTS,
            TechCategory::Runtime => RUNTIME_PRODUCTS,
            TechCategory::Container => CONTAINER_PRODUCTS,
            TechCategory::Messaging => MESSAGING_PRODUCTS,
            TechCategory::Monitoring => MONITORING_PRODUCTS,
        }
    }

    /// Looks up a catalog product by name.
    pub fn product(&self, name: &str) -> Option<&'static CatalogProduct> {
        self.products().iter().find(|p| p.name == name)
    }

    /// Maps a tier label back to its category. Manually entered tiers
    /// have no category.
    pub fn from_label(label: &str) -> Option<TechCategory> {
        BY_LABEL.get(label).copied()
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
