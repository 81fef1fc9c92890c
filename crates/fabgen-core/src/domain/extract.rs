//! Pattern-based requirement extraction.
//!
//! [`extract_requirements`] turns a [`SpecificationSet`] into a
//! [`RequirementRecord`]. It has no failure mode: a missing or oddly
//! formatted document contributes defaults, never an error.
//!
//! ## Extraction is intentionally presence-driven
//!
//! The component catalog and the feature list are static tables keyed off
//! the *presence* of the primary document, and the endpoint match is a
//! presence trigger for the fixed broker defaults rather than a source of
//! the actual host. The generated payloads embed that same fixed endpoint,
//! so a data-driven record here would misrepresent the emitted code. Only
//! equipment identifiers are genuinely derived from document content.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::requirements::{
    ComponentRequirement, ConnectionConfig, FeatureToggle, Priority, RequirementRecord,
};
use super::spec::{SpecKind, SpecificationSet};

/// Equipment identifier family: a short uppercase station prefix followed
/// by digits (LASER01, BEND02, CH12, ...).
static EQUIPMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(LASER\d+|BEND\d+|COAT\d+|ASSY\d+|CUT\d+|CH\d+|TR\d+|HT\d+)")
        .expect("equipment pattern is valid")
});

/// Broker endpoint mention in the primary document.
static ENDPOINT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ws://([^/\s]+)/mqtt").expect("endpoint pattern is valid"));

/// Extract a requirement record from the loaded specification set.
///
/// Never fails; see the module docs for what is content-derived and what
/// is presence-derived.
pub fn extract_requirements(specs: &SpecificationSet) -> RequirementRecord {
    let mut record = RequirementRecord::default();

    if let Some(prd) = specs.get(SpecKind::ProductRequirements) {
        record.components = component_catalog();
        record.features = feature_list();

        if let Some(m) = ENDPOINT_RE.captures(prd) {
            debug!(matched_host = &m[1], "endpoint mention found in PRD");
            // Presence trigger only: the populated config is the fixed
            // scaffold default, not the matched host.
            record.connection = Some(ConnectionConfig::scaffold_default());
        }
    }

    if let Some(dashboard) = specs.get(SpecKind::Dashboard) {
        record.equipment = extract_equipment(dashboard);
    }

    record
}

/// Scan text for equipment identifiers, deduplicating into a set.
///
/// Idempotent and order-independent: permuting mentions in the source
/// text cannot change the result.
pub fn extract_equipment(text: &str) -> BTreeSet<String> {
    EQUIPMENT_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The fixed component requirement catalog, returned whenever the primary
/// document is present.
fn component_catalog() -> Vec<ComponentRequirement> {
    vec![
        ComponentRequirement {
            name: "KPICards",
            kind: "metrics",
            priority: Priority::High,
        },
        ComponentRequirement {
            name: "EquipmentStatusGrid",
            kind: "grid",
            priority: Priority::High,
        },
        ComponentRequirement {
            name: "ActiveAlertsPanel",
            kind: "list",
            priority: Priority::Medium,
        },
        ComponentRequirement {
            name: "ProductionScheduleView",
            kind: "table",
            priority: Priority::Medium,
        },
        ComponentRequirement {
            name: "MaterialToolingStatus",
            kind: "status",
            priority: Priority::Low,
        },
        ComponentRequirement {
            name: "ControlActionsPanel",
            kind: "actions",
            priority: Priority::Medium,
        },
        ComponentRequirement {
            name: "MessageFeed",
            kind: "feed",
            priority: Priority::Low,
        },
    ]
}

/// The fixed feature toggle list, emitted alongside the component catalog.
fn feature_list() -> Vec<FeatureToggle> {
    vec![
        FeatureToggle {
            name: "real_time_updates",
            params: vec!["interval=5"],
        },
        FeatureToggle {
            name: "filtering",
            params: vec!["工序", "工站", "状态", "产品"],
        },
        FeatureToggle {
            name: "alerts",
            params: vec!["changeover", "quality", "maintenance"],
        },
        FeatureToggle {
            name: "actions",
            params: vec!["dispatch", "start", "complete"],
        },
    ]
}
