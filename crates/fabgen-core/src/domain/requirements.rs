//! The structured result of requirement extraction.
//!
//! A [`RequirementRecord`] is what the rest of the pipeline sees instead of
//! raw markdown: the component catalog, the detected equipment identifiers,
//! the feature toggles, and the optional broker connection parameters.
//!
//! All types here are plain data with serde derives so the record can be
//! printed as JSON (`fabgen extract --format json`) and attached to
//! structured log events.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Implementation priority of a cataloged component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// One entry in the component requirement catalog.
///
/// Serialize-only: records flow out as JSON (reports, log payloads) and
/// are never read back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRequirement {
    /// Requirement-level component name (e.g. "EquipmentStatusGrid").
    pub name: &'static str,
    /// Coarse component kind ("metrics", "grid", "list", ...).
    pub kind: &'static str,
    pub priority: Priority,
}

/// A feature the generated application should carry, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureToggle {
    pub name: &'static str,
    /// Free-form parameter values; meaning depends on the feature
    /// (refresh interval, filter dimensions, alert classes, ...).
    pub params: Vec<&'static str>,
}

/// Wire transport for the message broker connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Websocket,
    Tcp,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Websocket => write!(f, "ws"),
            Self::Tcp => write!(f, "tcp"),
        }
    }
}

/// Broker connection parameters embedded into the generated provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub transport: Transport,
    pub topic_prefix: String,
}

impl ConnectionConfig {
    /// The default broker parameters used whenever an endpoint mention is
    /// detected in the primary document. These match the endpoint baked
    /// into the generated `MqttProvider` payload.
    pub fn scaffold_default() -> Self {
        Self {
            host: "broker.hivemq.com".into(),
            port: 8884,
            transport: Transport::Websocket,
            topic_prefix: "v1/FY-Fab".into(),
        }
    }
}

/// Everything extraction learned from the specification set.
///
/// Invariant: a missing document contributes empty/default sub-fields,
/// never an error. See [`crate::domain::extract_requirements`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequirementRecord {
    /// Ordered component catalog (empty when the primary document is absent).
    pub components: Vec<ComponentRequirement>,
    /// Deduplicated equipment identifiers; ordering is not meaningful.
    pub equipment: BTreeSet<String>,
    /// Feature toggles (empty when the primary document is absent).
    pub features: Vec<FeatureToggle>,
    /// Present only when an endpoint mention was found in the primary
    /// document.
    pub connection: Option<ConnectionConfig>,
}

impl RequirementRecord {
    /// `true` when nothing at all was extracted (all documents absent).
    pub fn is_default(&self) -> bool {
        self.components.is_empty()
            && self.equipment.is_empty()
            && self.features.is_empty()
            && self.connection.is_none()
    }
}
