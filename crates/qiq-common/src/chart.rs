use serde::{Deserialize, Serialize};

/// One observation on the failure heatmap: failures in category `x` on day `y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub x: String,
    pub y: String,
    pub value: u32,
}

impl HeatmapCell {
    pub fn new(x: impl Into<String>, y: impl Into<String>, value: u32) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            value,
        }
    }
}

/// A labelled series of per-period failure counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub label: String,
    pub data: Vec<u32>,
}
