//! DocumentDraft aggregate - the DAT being authored.
//!
//! The draft is one record holding every scalar field and every list
//! section of the document. It serializes to the exact payload the
//! generation backend expects.

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::YesNo;
use crate::domain::tech_stack::{self, TechCategory, ToggleOutcome};

use super::{
    Actor, BuildingBlock, CollectionKind, Container, DataExchange, Database, DnsName,
    DraftEdit, EditOutcome, EditResult, FieldValue, FieldWrite, FunctionalDiagram, GlossaryTerm,
    IgnoreReason, InboundDependency, NetworkFlow, NfsShare, ObjectStorage, OutboundDependency,
    PhysicalComponent, ReferenceDocument, RowCollection, Rows, ScalarField, TechnologyChoice,
    VirtualMachine,
};

/// The document draft aggregate.
///
/// `Default` is the empty payload (what the backend assumes for missing
/// keys). [`DocumentDraft::new`] is the seeded draft a wizard opens with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentDraft {
    // General information
    #[serde(rename = "titre_projet")]
    pub project_title: String,
    #[serde(rename = "chef_projet")]
    pub project_lead: String,
    #[serde(rename = "contact_tech")]
    pub technical_contact: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    #[serde(rename = "description_doc")]
    pub description: String,

    // Introduction
    #[serde(rename = "objet_document")]
    pub purpose: String,
    #[serde(rename = "documents_reference")]
    pub reference_documents: Rows<ReferenceDocument>,
    #[serde(rename = "glossaire")]
    pub glossary: Rows<GlossaryTerm>,

    // Functional specification
    #[serde(rename = "acteurs")]
    pub actors: Rows<Actor>,
    #[serde(rename = "has_schema")]
    pub has_functional_diagram: bool,
    #[serde(rename = "schemas")]
    pub functional_diagrams: Rows<FunctionalDiagram>,
    #[serde(rename = "schema_description")]
    pub diagram_description: String,
    #[serde(rename = "briques_fonctionnelles")]
    pub building_blocks: Rows<BuildingBlock>,
    #[serde(rename = "echanges_donnees")]
    pub data_exchanges: Rows<DataExchange>,

    // Technical specification
    #[serde(rename = "composants_physiques")]
    pub physical_components: Rows<PhysicalComponent>,
    #[serde(rename = "description_architecture")]
    pub architecture: String,
    #[serde(rename = "description_authentification")]
    pub authentication: String,
    #[serde(rename = "description_administrationtechnique")]
    pub technical_administration: String,
    #[serde(rename = "description_adminfonctionnelle")]
    pub functional_administration: String,
    #[serde(rename = "description_interapplicative")]
    pub inter_application_administration: String,
    #[serde(rename = "flux_reseau")]
    pub network_flows: Rows<NetworkFlow>,
    #[serde(rename = "choix_technologiques")]
    pub technologies: Rows<TechnologyChoice>,
    /// Whether the application handles sensitive (DR) data.
    #[serde(rename = "segmentation_dr")]
    pub sensitive_data: YesNo,
    #[serde(rename = "dns_nom")]
    pub dns_names: Rows<DnsName>,

    // Lifecycle
    #[serde(rename = "deploiement")]
    pub deployment: String,
    #[serde(rename = "migration_reprise")]
    pub migration: String,
    #[serde(rename = "supervision")]
    pub monitoring: String,
    #[serde(rename = "sauvegarde_restauration")]
    pub backup_restore: String,

    // Dependencies
    #[serde(rename = "dependances_externes")]
    pub inbound_dependencies: Rows<InboundDependency>,
    #[serde(rename = "dependance_app_externes")]
    pub outbound_dependencies: Rows<OutboundDependency>,

    // Infrastructure needs
    pub vms: Rows<VirtualMachine>,
    #[serde(rename = "conteneurs")]
    pub containers: Rows<Container>,
    #[serde(rename = "bases_donnees")]
    pub databases: Rows<Database>,
    #[serde(rename = "stockage")]
    pub object_storage: Rows<ObjectStorage>,
    #[serde(rename = "partages_nfs")]
    pub nfs_shares: Rows<NfsShare>,
    #[serde(rename = "contraintes")]
    pub constraints: String,
    #[serde(rename = "niveau_services")]
    pub service_level: String,
}

impl Default for DocumentDraft {
    fn default() -> Self {
        Self {
            project_title: String::new(),
            project_lead: String::new(),
            technical_contact: String::new(),
            date: String::new(),
            description: String::new(),
            purpose: String::new(),
            reference_documents: Rows::new(),
            glossary: Rows::new(),
            actors: Rows::new(),
            has_functional_diagram: false,
            functional_diagrams: Rows::new(),
            diagram_description: String::new(),
            building_blocks: Rows::new(),
            data_exchanges: Rows::new(),
            physical_components: Rows::new(),
            architecture: String::new(),
            authentication: String::new(),
            technical_administration: String::new(),
            functional_administration: String::new(),
            inter_application_administration: String::new(),
            network_flows: Rows::new(),
            technologies: Rows::new(),
            sensitive_data: YesNo::No,
            dns_names: Rows::new(),
            deployment: String::new(),
            migration: String::new(),
            monitoring: String::new(),
            backup_restore: String::new(),
            inbound_dependencies: Rows::new(),
            outbound_dependencies: Rows::new(),
            vms: Rows::new(),
            containers: Rows::new(),
            databases: Rows::new(),
            object_storage: Rows::new(),
            nfs_shares: Rows::new(),
            constraints: String::new(),
            service_level: String::new(),
        }
    }
}

impl DocumentDraft {
    // ════════════════════════════════════════════════════════════════════════════════
    // Construction
    // ════════════════════════════════════════════════════════════════════════════════

    /// Creates the seeded draft: today's date, one empty actor and one
    /// default VM.
    pub fn new() -> Self {
        Self::seeded_on(Local::now().format("%Y-%m-%d").to_string())
    }

    /// Creates the seeded draft with an explicit document date.
    pub fn seeded_on(date: impl Into<String>) -> Self {
        let mut draft = Self {
            date: date.into(),
            ..Self::default()
        };
        draft.actors.push(Actor::default());
        draft.vms.push(VirtualMachine::default());
        draft
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Collection access
    // ════════════════════════════════════════════════════════════════════════════════

    /// Returns a type-erased view of a collection.
    pub fn collection(&self, kind: CollectionKind) -> &dyn RowCollection {
        match kind {
            CollectionKind::ReferenceDocuments => &self.reference_documents,
            CollectionKind::Glossary => &self.glossary,
            CollectionKind::Actors => &self.actors,
            CollectionKind::FunctionalDiagrams => &self.functional_diagrams,
            CollectionKind::BuildingBlocks => &self.building_blocks,
            CollectionKind::DataExchanges => &self.data_exchanges,
            CollectionKind::PhysicalComponents => &self.physical_components,
            CollectionKind::NetworkFlows => &self.network_flows,
            CollectionKind::Technologies => &self.technologies,
            CollectionKind::DnsNames => &self.dns_names,
            CollectionKind::InboundDependencies => &self.inbound_dependencies,
            CollectionKind::OutboundDependencies => &self.outbound_dependencies,
            CollectionKind::VirtualMachines => &self.vms,
            CollectionKind::Containers => &self.containers,
            CollectionKind::Databases => &self.databases,
            CollectionKind::ObjectStorage => &self.object_storage,
            CollectionKind::NfsShares => &self.nfs_shares,
        }
    }

    fn collection_mut(&mut self, kind: CollectionKind) -> &mut dyn RowCollection {
        match kind {
            CollectionKind::ReferenceDocuments => &mut self.reference_documents,
            CollectionKind::Glossary => &mut self.glossary,
            CollectionKind::Actors => &mut self.actors,
            CollectionKind::FunctionalDiagrams => &mut self.functional_diagrams,
            CollectionKind::BuildingBlocks => &mut self.building_blocks,
            CollectionKind::DataExchanges => &mut self.data_exchanges,
            CollectionKind::PhysicalComponents => &mut self.physical_components,
            CollectionKind::NetworkFlows => &mut self.network_flows,
            CollectionKind::Technologies => &mut self.technologies,
            CollectionKind::DnsNames => &mut self.dns_names,
            CollectionKind::InboundDependencies => &mut self.inbound_dependencies,
            CollectionKind::OutboundDependencies => &mut self.outbound_dependencies,
            CollectionKind::VirtualMachines => &mut self.vms,
            CollectionKind::Containers => &mut self.containers,
            CollectionKind::Databases => &mut self.databases,
            CollectionKind::ObjectStorage => &mut self.object_storage,
            CollectionKind::NfsShares => &mut self.nfs_shares,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Row edits
    // ════════════════════════════════════════════════════════════════════════════════

    /// Appends the collection's row template at the end.
    pub fn append_row(&mut self, kind: CollectionKind) -> EditOutcome {
        let rows = self.collection_mut(kind);
        let id = rows.append_template();
        EditOutcome::RowAppended {
            collection: kind,
            index: rows.len() - 1,
            id,
        }
    }

    /// Removes the row at `index`. Actors and VMs keep at least one row.
    pub fn remove_row(&mut self, kind: CollectionKind, index: usize) -> EditOutcome {
        let rows = self.collection_mut(kind);
        let len = rows.len();
        if index >= len {
            return EditOutcome::Ignored(IgnoreReason::IndexOutOfRange {
                collection: kind,
                index,
                len,
            });
        }
        let min = kind.min_rows();
        if len <= min {
            return EditOutcome::Ignored(IgnoreReason::AtFloor {
                collection: kind,
                min,
            });
        }
        match rows.remove_at(index) {
            Some(id) => EditOutcome::RowRemoved {
                collection: kind,
                index,
                id,
            },
            None => EditOutcome::Ignored(IgnoreReason::IndexOutOfRange {
                collection: kind,
                index,
                len,
            }),
        }
    }

    /// Writes one field of one row, addressed by payload key.
    pub fn update_field(
        &mut self,
        kind: CollectionKind,
        index: usize,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> EditOutcome {
        let rows = self.collection_mut(kind);
        let len = rows.len();
        match rows.set_field(index, field, value.into()) {
            Some(FieldWrite::Written) => EditOutcome::FieldUpdated {
                collection: kind,
                index,
            },
            Some(FieldWrite::UnknownField) => EditOutcome::Ignored(IgnoreReason::UnknownField {
                collection: kind,
                field: field.to_string(),
            }),
            Some(FieldWrite::Rejected) => {
                debug!(collection = %kind, index, field, "Dropped unparsable field value");
                EditOutcome::Ignored(IgnoreReason::UnparsableValue {
                    field: field.to_string(),
                })
            }
            None => EditOutcome::Ignored(IgnoreReason::IndexOutOfRange {
                collection: kind,
                index,
                len,
            }),
        }
    }

    /// Writes a scalar field.
    pub fn update_scalar(&mut self, field: ScalarField, value: impl Into<FieldValue>) -> EditOutcome {
        let value = value.into();
        let target = match field {
            ScalarField::HasFunctionalDiagram => {
                return match value.as_yes_no() {
                    Some(answer) => {
                        self.has_functional_diagram = answer.is_yes();
                        EditOutcome::ScalarUpdated(field)
                    }
                    None => Self::unparsable(field),
                };
            }
            ScalarField::SensitiveData => {
                return match value.as_yes_no() {
                    Some(answer) => {
                        self.sensitive_data = answer;
                        EditOutcome::ScalarUpdated(field)
                    }
                    None => Self::unparsable(field),
                };
            }
            ScalarField::ProjectTitle => &mut self.project_title,
            ScalarField::ProjectLead => &mut self.project_lead,
            ScalarField::TechnicalContact => &mut self.technical_contact,
            ScalarField::DocumentDate => &mut self.date,
            ScalarField::DocumentDescription => &mut self.description,
            ScalarField::DocumentPurpose => &mut self.purpose,
            ScalarField::DiagramDescription => &mut self.diagram_description,
            ScalarField::ArchitectureDescription => &mut self.architecture,
            ScalarField::AuthenticationDescription => &mut self.authentication,
            ScalarField::TechnicalAdministration => &mut self.technical_administration,
            ScalarField::FunctionalAdministration => &mut self.functional_administration,
            ScalarField::InterApplicationAdministration => {
                &mut self.inter_application_administration
            }
            ScalarField::Deployment => &mut self.deployment,
            ScalarField::Migration => &mut self.migration,
            ScalarField::Monitoring => &mut self.monitoring,
            ScalarField::BackupRestore => &mut self.backup_restore,
            ScalarField::Constraints => &mut self.constraints,
            ScalarField::ServiceLevel => &mut self.service_level,
        };
        *target = value.into_text();
        EditOutcome::ScalarUpdated(field)
    }

    fn unparsable(field: ScalarField) -> EditOutcome {
        EditOutcome::Ignored(IgnoreReason::UnparsableValue {
            field: field.wire_name().to_string(),
        })
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Technology stack
    // ════════════════════════════════════════════════════════════════════════════════

    /// Toggles a catalog selection. Selecting an operating system (new or
    /// switched version) then propagates it to default-looking VM rows.
    pub fn toggle_technology(
        &mut self,
        category: TechCategory,
        product: &str,
        version: &str,
    ) -> EditOutcome {
        let outcome = tech_stack::toggle_technology(&mut self.technologies, category, product, version);

        let vms_rewritten = match (&outcome, category) {
            (ToggleOutcome::Removed, _) => 0,
            (_, TechCategory::OperatingSystem) => {
                let choice = TechnologyChoice::new(category.label(), product, version);
                self.derive_default_os(&choice.product_version())
            }
            _ => 0,
        };

        EditOutcome::TechnologyToggled {
            outcome,
            vms_rewritten,
        }
    }

    /// Removes a catalog selection whatever its version.
    pub fn remove_technology(&mut self, category: TechCategory, product: &str) -> EditOutcome {
        let removed = tech_stack::remove_technology(&mut self.technologies, category, product);
        EditOutcome::TechnologyRemoved { removed }
    }

    /// Rewrites default-looking VM OS values to `os_choice`.
    pub fn derive_default_os(&mut self, os_choice: &str) -> usize {
        tech_stack::derive_default_os(&mut self.vms, os_choice)
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Snapshot edits
    // ════════════════════════════════════════════════════════════════════════════════

    /// Applies an edit in place.
    pub fn apply_mut(&mut self, edit: DraftEdit) -> EditOutcome {
        match edit {
            DraftEdit::AppendRow(kind) => self.append_row(kind),
            DraftEdit::RemoveRow { collection, index } => self.remove_row(collection, index),
            DraftEdit::UpdateField {
                collection,
                index,
                field,
                value,
            } => self.update_field(collection, index, &field, value),
            DraftEdit::UpdateScalar { field, value } => self.update_scalar(field, value),
            DraftEdit::ToggleTechnology {
                category,
                product,
                version,
            } => self.toggle_technology(category, &product, &version),
            DraftEdit::RemoveTechnology { category, product } => {
                self.remove_technology(category, &product)
            }
        }
    }

    /// Applies an edit to a copy of this snapshot and returns the
    /// replacement. `self` is left untouched.
    pub fn apply(&self, edit: DraftEdit) -> EditResult {
        let mut draft = self.clone();
        let outcome = draft.apply_mut(edit);
        EditResult { draft, outcome }
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Export helpers
    // ════════════════════════════════════════════════════════════════════════════════

    /// Title used in download filenames, `"document"` when unset.
    pub fn file_stem(&self) -> &str {
        if self.project_title.is_empty() {
            "document"
        } else {
            &self.project_title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn draft() -> DocumentDraft {
        DocumentDraft::seeded_on("2026-02-18")
    }

    // ───────────────────────────────────────────────────────────────
    // Seeding
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn seeded_draft_has_one_actor_and_one_vm() {
        let d = draft();
        assert_eq!(d.actors.to_values(), vec![Actor::default()]);
        assert_eq!(d.vms.to_values(), vec![VirtualMachine::default()]);
        assert_eq!(d.date, "2026-02-18");
        assert_eq!(d.sensitive_data, YesNo::No);
        for kind in CollectionKind::ALL {
            if kind.min_rows() == 0 {
                assert!(d.collection(kind).is_empty(), "{}", kind);
            }
        }
    }

    #[test]
    fn new_draft_is_dated_today() {
        let today = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(DocumentDraft::new().date, today);
    }

    #[test]
    fn seeded_draft_serializes_backend_shape() {
        let json = serde_json::to_value(draft()).unwrap();
        assert_eq!(json["titre_projet"], "");
        assert_eq!(json["segmentation_dr"], "Non");
        assert_eq!(json["has_schema"], false);
        assert_eq!(json["acteurs"].as_array().unwrap().len(), 1);
        assert_eq!(json["vms"][0]["os"], "Linux");
        assert_eq!(json["choix_technologiques"], serde_json::json!([]));
    }

    #[test]
    fn draft_deserializes_from_partial_payload() {
        let d: DocumentDraft =
            serde_json::from_str(r#"{"titre_projet": "Portail", "vms": [{"nom": "SRV-01"}]}"#)
                .unwrap();
        assert_eq!(d.project_title, "Portail");
        assert_eq!(d.vms.get(0).unwrap().value().name, "SRV-01");
        assert_eq!(d.vms.get(0).unwrap().value().cpu, 2);
        assert!(d.actors.is_empty());
    }

    // ───────────────────────────────────────────────────────────────
    // Row edits
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn append_row_inserts_template_at_end() {
        let mut d = draft();
        let outcome = d.append_row(CollectionKind::DataExchanges);
        assert!(matches!(
            outcome,
            EditOutcome::RowAppended { index: 0, collection: CollectionKind::DataExchanges, .. }
        ));
        assert_eq!(d.data_exchanges.to_values(), vec![DataExchange::default()]);
    }

    #[test]
    fn removing_last_actor_is_a_noop() {
        let mut d = draft();
        let outcome = d.remove_row(CollectionKind::Actors, 0);
        assert_eq!(
            outcome,
            EditOutcome::Ignored(IgnoreReason::AtFloor {
                collection: CollectionKind::Actors,
                min: 1
            })
        );
        assert_eq!(d.actors.len(), 1);
    }

    #[test]
    fn removing_last_vm_is_a_noop() {
        let mut d = draft();
        assert!(!d.remove_row(CollectionKind::VirtualMachines, 0).is_applied());
        assert_eq!(d.vms.len(), 1);
    }

    #[test]
    fn optional_collections_can_be_emptied() {
        let mut d = draft();
        d.append_row(CollectionKind::Glossary);
        assert!(d.remove_row(CollectionKind::Glossary, 0).is_applied());
        assert!(d.glossary.is_empty());
    }

    #[test]
    fn removing_out_of_range_is_ignored() {
        let mut d = draft();
        d.append_row(CollectionKind::Actors);
        let outcome = d.remove_row(CollectionKind::Actors, 5);
        assert_eq!(
            outcome,
            EditOutcome::Ignored(IgnoreReason::IndexOutOfRange {
                collection: CollectionKind::Actors,
                index: 5,
                len: 2
            })
        );
    }

    #[test]
    fn removal_keeps_order_of_remaining_rows() {
        let mut d = draft();
        for name in ["b", "c"] {
            d.append_row(CollectionKind::Actors);
            let last = d.actors.len() - 1;
            d.update_field(CollectionKind::Actors, last, "acteur", name);
        }
        d.update_field(CollectionKind::Actors, 0, "acteur", "a");

        d.remove_row(CollectionKind::Actors, 1);

        let names: Vec<_> = d.actors.values().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn update_field_parses_vm_counts() {
        let mut d = draft();
        assert!(d.update_field(CollectionKind::VirtualMachines, 0, "cpu", "8").is_applied());
        assert!(d.update_field(CollectionKind::VirtualMachines, 0, "ram", 32u32).is_applied());
        let vm = d.vms.get(0).unwrap().value();
        assert_eq!((vm.cpu, vm.ram), (8, 32));
    }

    #[test]
    fn update_field_rejects_negative_count() {
        let mut d = draft();
        let outcome = d.update_field(CollectionKind::VirtualMachines, 0, "ram", "-4");
        assert_eq!(
            outcome,
            EditOutcome::Ignored(IgnoreReason::UnparsableValue { field: "ram".to_string() })
        );
        assert_eq!(d.vms.get(0).unwrap().value().ram, 4);
    }

    #[test]
    fn update_field_reports_unknown_field() {
        let mut d = draft();
        let outcome = d.update_field(CollectionKind::Actors, 0, "email", "x@y.z");
        assert!(matches!(outcome, EditOutcome::Ignored(IgnoreReason::UnknownField { .. })));
    }

    #[test]
    fn update_scalar_writes_text_and_flags() {
        let mut d = draft();
        d.update_scalar(ScalarField::ProjectTitle, "Portail RH");
        d.update_scalar(ScalarField::HasFunctionalDiagram, true);
        d.update_scalar(ScalarField::SensitiveData, "Oui");
        assert_eq!(d.project_title, "Portail RH");
        assert!(d.has_functional_diagram);
        assert_eq!(d.sensitive_data, YesNo::Yes);
    }

    #[test]
    fn update_scalar_rejects_unparsable_flag() {
        let mut d = draft();
        let outcome = d.update_scalar(ScalarField::SensitiveData, "maybe");
        assert!(!outcome.is_applied());
        assert_eq!(d.sensitive_data, YesNo::No);
    }

    #[test]
    fn file_stem_falls_back_to_document() {
        let mut d = draft();
        assert_eq!(d.file_stem(), "document");
        d.project_title = "Portail".to_string();
        assert_eq!(d.file_stem(), "Portail");
    }

    #[test]
    fn file_stem_keeps_title_verbatim() {
        let mut d = draft();
        d.project_title = "  Portail RH ".to_string();
        assert_eq!(d.file_stem(), "  Portail RH ");
    }

    // ───────────────────────────────────────────────────────────────
    // Technology stack
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn selecting_an_os_rewrites_default_vms() {
        let mut d = draft();
        d.append_row(CollectionKind::VirtualMachines);
        d.update_field(CollectionKind::VirtualMachines, 0, "os", "");
        d.update_field(CollectionKind::VirtualMachines, 1, "os", "Custom-OS-X");

        let outcome = d.toggle_technology(TechCategory::OperatingSystem, "Debian", "12");

        assert_eq!(
            outcome,
            EditOutcome::TechnologyToggled {
                outcome: ToggleOutcome::Added,
                vms_rewritten: 1
            }
        );
        let oses: Vec<_> = d.vms.values().map(|vm| vm.os.as_str()).collect();
        assert_eq!(oses, vec!["Debian 12", "Custom-OS-X"]);
    }

    #[test]
    fn switching_os_version_updates_derived_vms() {
        let mut d = draft();
        d.toggle_technology(TechCategory::OperatingSystem, "Debian", "12 (Bookworm)");
        d.toggle_technology(TechCategory::OperatingSystem, "Debian", "11 (Bullseye)");
        assert_eq!(d.vms.get(0).unwrap().value().os, "Debian 11 (Bullseye)");
        assert_eq!(d.technologies.len(), 1);
    }

    #[test]
    fn unselecting_os_leaves_vms_alone() {
        let mut d = draft();
        d.toggle_technology(TechCategory::OperatingSystem, "RHEL", "9");
        let outcome = d.toggle_technology(TechCategory::OperatingSystem, "RHEL", "9");
        assert_eq!(
            outcome,
            EditOutcome::TechnologyToggled {
                outcome: ToggleOutcome::Removed,
                vms_rewritten: 0
            }
        );
        assert_eq!(d.vms.get(0).unwrap().value().os, "RHEL 9");
    }

    #[test]
    fn non_os_selection_does_not_touch_vms() {
        let mut d = draft();
        d.toggle_technology(TechCategory::Database, "PostgreSQL", "16");
        assert_eq!(d.vms.get(0).unwrap().value().os, "Linux");
    }

    #[test]
    fn editing_vm_os_does_not_change_selection() {
        let mut d = draft();
        d.toggle_technology(TechCategory::OperatingSystem, "Debian", "12");
        d.update_field(CollectionKind::VirtualMachines, 0, "os", "Custom-OS-X");
        assert_eq!(
            d.technologies.to_values(),
            vec![TechnologyChoice::new("Systèmes d'exploitation", "Debian", "12")]
        );
    }

    #[test]
    fn manual_technology_rows_are_plain_rows() {
        let mut d = draft();
        d.append_row(CollectionKind::Technologies);
        d.update_field(CollectionKind::Technologies, 0, "tiers", "Frontend");
        d.update_field(CollectionKind::Technologies, 0, "produit", "React");
        assert_eq!(d.technologies.get(0).unwrap().value().tier, "Frontend");
        assert!(d.remove_row(CollectionKind::Technologies, 0).is_applied());
    }

    // ───────────────────────────────────────────────────────────────
    // Snapshot edits
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn apply_returns_replacement_and_keeps_original() {
        let original = draft();
        let result = original.apply(DraftEdit::AppendRow(CollectionKind::DnsNames));
        assert!(original.dns_names.is_empty());
        assert_eq!(result.draft.dns_names.len(), 1);
        assert!(result.outcome.is_applied());
    }

    #[test]
    fn apply_at_floor_returns_identical_snapshot() {
        let original = draft();
        let result = original.apply(DraftEdit::RemoveRow {
            collection: CollectionKind::VirtualMachines,
            index: 0,
        });
        assert_eq!(result.draft, original);
        assert!(!result.outcome.is_applied());
    }

    proptest! {
        #[test]
        fn append_then_remove_restores_every_collection(
            kind_index in 0usize..17,
            prefill in 0usize..4,
        ) {
            let kind = CollectionKind::ALL[kind_index];
            let mut d = draft();
            for _ in 0..prefill {
                d.append_row(kind);
            }
            let before = d.clone();

            let appended = d.append_row(kind);
            let index = match appended {
                EditOutcome::RowAppended { index, .. } => index,
                other => panic!("append_row did not append: {:?}", other),
            };
            let removed = d.remove_row(kind, index);

            prop_assert!(removed.is_applied());
            prop_assert_eq!(d, before);
        }

        #[test]
        fn mandatory_collections_never_drop_below_one(
            removals in proptest::collection::vec(0usize..4, 0..10),
            extra in 0usize..3,
        ) {
            let mut d = draft();
            for _ in 0..extra {
                d.append_row(CollectionKind::Actors);
                d.append_row(CollectionKind::VirtualMachines);
            }
            for index in removals {
                d.remove_row(CollectionKind::Actors, index);
                d.remove_row(CollectionKind::VirtualMachines, index);
                prop_assert!(d.actors.len() >= 1);
                prop_assert!(d.vms.len() >= 1);
            }
        }
    }
}
