//! The fixed implementation plan.
//!
//! The plan is advisory metadata: it is logged and printable
//! (`fabgen plan`) but does not drive generation, which always emits the
//! full cataloged artifact set. [`implementation_plan`] is therefore
//! documented as constant with respect to its input rather than
//! re-derived from it.

use serde::Serialize;

use super::requirements::{Priority, RequirementRecord};

/// Number of steps in the plan; the sequence numbers are `1..=PLAN_LEN`
/// with no gaps.
pub const PLAN_LEN: u8 = 10;

/// One entry in the ordered implementation plan.
///
/// Serialize-only: plans are printed and logged, never parsed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// 1-based position; strictly increasing across the plan.
    pub sequence: u8,
    pub task: &'static str,
    /// Artifact names this step touches.
    pub artifacts: Vec<&'static str>,
    pub priority: Priority,
    /// Visualization style, where the step produces one.
    pub visualization: Option<&'static str>,
}

/// Build the ten-step implementation plan.
///
/// Constant with respect to `_record`: plan content does not vary with
/// extracted requirement values. The parameter documents the data flow
/// (extraction precedes planning) and keeps the signature stable should
/// the plan ever become requirement-driven.
pub fn implementation_plan(_record: &RequirementRecord) -> Vec<PlanStep> {
    vec![
        PlanStep {
            sequence: 1,
            task: "Setup React application structure",
            artifacts: vec!["App.tsx", "index.tsx", "main layout"],
            priority: Priority::Critical,
            visualization: None,
        },
        PlanStep {
            sequence: 2,
            task: "Implement MQTT connection",
            artifacts: vec!["MqttProvider", "useMqtt hook"],
            priority: Priority::Critical,
            visualization: None,
        },
        PlanStep {
            sequence: 3,
            task: "Create KPI Cards Component",
            artifacts: vec!["KPICards.tsx", "MetricCard.tsx"],
            priority: Priority::High,
            visualization: Some("numeric_display"),
        },
        PlanStep {
            sequence: 4,
            task: "Create Equipment Status Grid",
            artifacts: vec!["EquipmentGrid.tsx", "EquipmentCard.tsx"],
            priority: Priority::High,
            visualization: Some("status_grid"),
        },
        PlanStep {
            sequence: 5,
            task: "Implement Alerts Panel",
            artifacts: vec!["AlertsPanel.tsx", "AlertItem.tsx"],
            priority: Priority::Medium,
            visualization: Some("list_with_severity"),
        },
        PlanStep {
            sequence: 6,
            task: "Create Production Schedule View",
            artifacts: vec!["ScheduleView.tsx", "JobTable.tsx"],
            priority: Priority::Medium,
            visualization: Some("data_table"),
        },
        PlanStep {
            sequence: 7,
            task: "Implement Control Actions",
            artifacts: vec!["ControlPanel.tsx", "ActionButton.tsx"],
            priority: Priority::Medium,
            visualization: None,
        },
        PlanStep {
            sequence: 8,
            task: "Add Message Feed",
            artifacts: vec!["MessageFeed.tsx"],
            priority: Priority::Low,
            visualization: Some("scrollable_feed"),
        },
        PlanStep {
            sequence: 9,
            task: "Implement responsive layout",
            artifacts: vec!["Layout adjustments", "Tailwind config"],
            priority: Priority::Medium,
            visualization: None,
        },
        PlanStep {
            sequence: 10,
            task: "Add real-time data updates",
            artifacts: vec!["Data hooks", "State management"],
            priority: Priority::High,
            visualization: None,
        },
    ]
}
