use qiq_common::TrendSeries;
use serde::Serialize;

/// Per-period failure series sharing one set of period labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub labels: Vec<String>,
    pub series: Vec<TrendSeries>,
}

impl TrendChart {
    pub fn new(labels: Vec<String>, series: Vec<TrendSeries>) -> Self {
        Self { labels, series }
    }

    /// Largest value across every series.
    pub fn max(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Bar heights as a percentage of [`Self::max`], `heights[series][period]`.
    /// Every bar is 0 when the chart has no positive value.
    pub fn bar_heights(&self) -> Vec<Vec<f64>> {
        let max = self.max();
        self.series
            .iter()
            .map(|s| {
                s.data
                    .iter()
                    .map(|v| {
                        if max == 0 {
                            0.0
                        } else {
                            f64::from(*v) / f64::from(max) * 100.0
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Value of `series` at `period`, absent periods count as zero.
    pub fn value(&self, series: usize, period: usize) -> u32 {
        self.series
            .get(series)
            .and_then(|s| s.data.get(period))
            .copied()
            .unwrap_or(0)
    }
}
