//! Row records of the draft collections.
//!
//! Field names are English; payload keys follow the generation backend's
//! schema. Each record's `Default` is the template inserted by
//! `append_row`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::YesNo;
use crate::impl_row_record;

// ════════════════════════════════════════════════════════════════════════════════
// Introduction
// ════════════════════════════════════════════════════════════════════════════════

/// A document the DAT refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceDocument {
    #[serde(rename = "emetteur")]
    pub issuer: String,
    #[serde(rename = "document")]
    pub title: String,
    pub version: String,
}

impl Default for ReferenceDocument {
    fn default() -> Self {
        Self {
            issuer: String::new(),
            title: String::new(),
            version: "1.0".to_string(),
        }
    }
}

impl_row_record!(
    ReferenceDocument,
    text { "emetteur" => issuer, "document" => title, "version" => version }
);

/// A glossary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaryTerm {
    #[serde(rename = "abreviation")]
    pub abbreviation: String,
    #[serde(rename = "signification")]
    pub meaning: String,
}

impl_row_record!(
    GlossaryTerm,
    text { "abreviation" => abbreviation, "signification" => meaning }
);

// ════════════════════════════════════════════════════════════════════════════════
// Functional specification
// ════════════════════════════════════════════════════════════════════════════════

/// A person or team interacting with the system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    #[serde(rename = "acteur")]
    pub name: String,
    pub role: String,
    #[serde(rename = "droits")]
    pub rights: String,
    #[serde(rename = "commentaires")]
    pub comments: String,
}

impl_row_record!(
    Actor,
    text {
        "acteur" => name,
        "role" => role,
        "droits" => rights,
        "commentaires" => comments,
    }
);

/// A functional diagram attached to the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionalDiagram {
    #[serde(rename = "titre")]
    pub title: String,
    pub description: String,
    /// Path of the image on the generation host, may be empty.
    pub image: String,
}

impl_row_record!(
    FunctionalDiagram,
    text { "titre" => title, "description" => description, "image" => image }
);

/// A functional building block of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingBlock {
    #[serde(rename = "brique")]
    pub name: String,
    pub description: String,
}

impl_row_record!(
    BuildingBlock,
    text { "brique" => name, "description" => description }
);

/// A data exchange and its volumetry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataExchange {
    #[serde(rename = "type_echange")]
    pub exchange_type: String,
    #[serde(rename = "brique_fonctionnelle")]
    pub building_block: String,
    pub source: String,
    pub destination: String,
    #[serde(rename = "type_donnees")]
    pub data_type: String,
    #[serde(rename = "volumetrie")]
    pub volume: String,
    #[serde(rename = "volumetrie_journaliere")]
    pub daily_volume: String,
    #[serde(rename = "nb_fichiers_jour")]
    pub files_per_day: String,
    #[serde(rename = "frequence")]
    pub frequency: String,
    /// Exchange only runs out of business hours.
    #[serde(rename = "hno")]
    pub out_of_hours: YesNo,
}

impl Default for DataExchange {
    fn default() -> Self {
        Self {
            exchange_type: "API REST".to_string(),
            building_block: String::new(),
            source: String::new(),
            destination: String::new(),
            data_type: String::new(),
            volume: String::new(),
            daily_volume: String::new(),
            files_per_day: String::new(),
            frequency: String::new(),
            out_of_hours: YesNo::No,
        }
    }
}

impl_row_record!(
    DataExchange,
    text {
        "type_echange" => exchange_type,
        "brique_fonctionnelle" => building_block,
        "source" => source,
        "destination" => destination,
        "type_donnees" => data_type,
        "volumetrie" => volume,
        "volumetrie_journaliere" => daily_volume,
        "nb_fichiers_jour" => files_per_day,
        "frequence" => frequency,
    },
    yes_no { "hno" => out_of_hours }
);

// ════════════════════════════════════════════════════════════════════════════════
// Technical specification
// ════════════════════════════════════════════════════════════════════════════════

/// A physical component of the hosting infrastructure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalComponent {
    #[serde(rename = "type_machine")]
    pub machine_type: String,
    #[serde(rename = "environnement")]
    pub environment: String,
    pub cluster: String,
}

impl_row_record!(
    PhysicalComponent,
    text {
        "type_machine" => machine_type,
        "environnement" => environment,
        "cluster" => cluster,
    }
);

/// A network flow between systems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkFlow {
    #[serde(rename = "type_echange")]
    pub exchange_type: String,
    #[serde(rename = "brique_fonctionnelle")]
    pub building_block: String,
    pub source: String,
    pub destination: String,
    pub description: String,
    #[serde(rename = "type_flux")]
    pub flow_type: String,
}

impl_row_record!(
    NetworkFlow,
    text {
        "type_echange" => exchange_type,
        "brique_fonctionnelle" => building_block,
        "source" => source,
        "destination" => destination,
        "description" => description,
        "type_flux" => flow_type,
    }
);

/// A selected technology: tier label, product and version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnologyChoice {
    #[serde(rename = "tiers")]
    pub tier: String,
    #[serde(rename = "produit")]
    pub product: String,
    pub version: String,
}

impl TechnologyChoice {
    pub fn new(
        tier: impl Into<String>,
        product: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            tier: tier.into(),
            product: product.into(),
            version: version.into(),
        }
    }

    /// "product version", the form written into VM rows.
    pub fn product_version(&self) -> String {
        format!("{} {}", self.product, self.version)
    }
}

impl_row_record!(
    TechnologyChoice,
    text { "tiers" => tier, "produit" => product, "version" => version }
);

/// A DNS name and the host it points to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsName {
    #[serde(rename = "nom_dns")]
    pub name: String,
    #[serde(rename = "machine_associe")]
    pub host: String,
}

impl_row_record!(
    DnsName,
    text { "nom_dns" => name, "machine_associe" => host }
);

// ════════════════════════════════════════════════════════════════════════════════
// Dependencies
// ════════════════════════════════════════════════════════════════════════════════

/// Something that depends on this system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundDependency {
    #[serde(rename = "dependance")]
    pub dependency: String,
    pub impact: String,
}

impl_row_record!(
    InboundDependency,
    text { "dependance" => dependency, "impact" => impact }
);

/// An external application this system depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutboundDependency {
    #[serde(rename = "name_application")]
    pub application: String,
    #[serde(rename = "description_impact")]
    pub impact: String,
}

impl_row_record!(
    OutboundDependency,
    text { "name_application" => application, "description_impact" => impact }
);

// ════════════════════════════════════════════════════════════════════════════════
// Infrastructure
// ════════════════════════════════════════════════════════════════════════════════

/// A virtual machine to provision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualMachine {
    #[serde(rename = "environnement")]
    pub environment: String,
    #[serde(rename = "nom")]
    pub name: String,
    pub role: String,
    pub os: String,
    pub cpu: u32,
    /// RAM in GB.
    pub ram: u32,
    pub resilience: String,
}

impl Default for VirtualMachine {
    fn default() -> Self {
        Self {
            environment: "Production".to_string(),
            name: String::new(),
            role: String::new(),
            os: "Linux".to_string(),
            cpu: 2,
            ram: 4,
            resilience: String::new(),
        }
    }
}

impl_row_record!(
    VirtualMachine,
    text {
        "environnement" => environment,
        "nom" => name,
        "role" => role,
        "os" => os,
        "resilience" => resilience,
    },
    count { "cpu" => cpu, "ram" => ram }
);

/// A container workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    #[serde(rename = "nom")]
    pub name: String,
    pub image: String,
    pub ports: String,
    pub volumes: String,
    #[serde(rename = "ressources_cpu")]
    pub cpu: String,
    #[serde(rename = "ressources_ram")]
    pub ram: String,
}

impl_row_record!(
    Container,
    text {
        "nom" => name,
        "image" => image,
        "ports" => ports,
        "volumes" => volumes,
        "ressources_cpu" => cpu,
        "ressources_ram" => ram,
    }
);

/// A database instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    #[serde(rename = "moteur")]
    pub engine: String,
    pub version: String,
    #[serde(rename = "taille")]
    pub size: String,
    pub backup: String,
    #[serde(rename = "ha")]
    pub high_availability: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            engine: "PostgreSQL".to_string(),
            version: String::new(),
            size: String::new(),
            backup: String::new(),
            high_availability: String::new(),
        }
    }
}

impl_row_record!(
    Database,
    text {
        "moteur" => engine,
        "version" => version,
        "taille" => size,
        "backup" => backup,
        "ha" => high_availability,
    }
);

/// Object storage needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectStorage {
    #[serde(rename = "nb_buckets")]
    pub buckets: String,
    #[serde(rename = "taille_totale")]
    pub total_size: String,
    #[serde(rename = "politique_retention")]
    pub retention: String,
}

impl_row_record!(
    ObjectStorage,
    text {
        "nb_buckets" => buckets,
        "taille_totale" => total_size,
        "politique_retention" => retention,
    }
);

/// An NFS share mounted by an application module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NfsShare {
    #[serde(rename = "machine_cliente")]
    pub client_host: String,
    #[serde(rename = "module_applicatif")]
    pub module: String,
    #[serde(rename = "droits")]
    pub rights: String,
}

impl Default for NfsShare {
    fn default() -> Self {
        Self {
            client_host: String::new(),
            module: String::new(),
            rights: "rw".to_string(),
        }
    }
}

impl_row_record!(
    NfsShare,
    text {
        "machine_cliente" => client_host,
        "module_applicatif" => module,
        "droits" => rights,
    }
);
