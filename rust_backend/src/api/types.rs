//! Chart descriptor and dashboard control DTOs.
//!
//! A [`ChartDescriptor`] is a language-neutral description of a chart to
//! render: its kind, exact title, data rows, and the field bindings the
//! front end needs to read those rows. Descriptors are ephemeral - built
//! fresh on every recomputation and never persisted.

use serde::{Deserialize, Serialize};

use crate::core::domain::AggregateRow;

/// Semantic field names used in chart encodings.
pub const LAUNCH_SITE_FIELD: &str = "launchSite";
pub const OUTCOME_CLASS_FIELD: &str = "outcomeClass";
pub const PAYLOAD_MASS_FIELD: &str = "payloadMassKg";
pub const BOOSTER_CATEGORY_FIELD: &str = "boosterVersionCategory";
pub const COUNT_FIELD: &str = "count";

/// Chart type understood by the dashboard front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Scatter,
}

/// Field bindings telling the front end how to read the descriptor's rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEncoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_field: Option<String>,
}

impl ChartEncoding {
    /// Encoding for a pie chart: label plus value.
    pub fn pie(label_field: &str, value_field: &str) -> Self {
        Self {
            label_field: Some(label_field.to_string()),
            value_field: Some(value_field.to_string()),
            ..Self::default()
        }
    }

    /// Encoding for a scatter chart: x, y and point color.
    pub fn scatter(x_field: &str, y_field: &str, color_field: &str) -> Self {
        Self {
            x_field: Some(x_field.to_string()),
            y_field: Some(y_field.to_string()),
            color_field: Some(color_field.to_string()),
            ..Self::default()
        }
    }
}

/// One point of the payload/outcome scatter view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_version_category: String,
}

/// Rows carried by a chart descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartData {
    Pie(Vec<AggregateRow>),
    Scatter(Vec<ScatterPoint>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Pie(rows) => rows.len(),
            ChartData::Scatter(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Language-neutral description of a chart to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub kind: ChartKind,
    pub title: String,
    pub data: ChartData,
    pub encoding: ChartEncoding,
}

/// One entry of the launch-site selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Payload range slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    /// Default selected interval: the payload bounds observed in the data.
    pub value: (f64, f64),
}

/// Complete control surface exposed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardControls {
    pub site_options: Vec<SiteOption>,
    pub payload_slider: PayloadSliderConfig,
}
