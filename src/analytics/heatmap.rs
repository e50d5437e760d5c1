use qiq_common::HeatmapCell;
use serde::Serialize;

/// Colour bucket for a heatmap cell, by share of the maximum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatLevel {
    Minimal,
    Low,
    Moderate,
    High,
    Severe,
}

impl HeatLevel {
    pub const ALL: [HeatLevel; 5] = [
        HeatLevel::Minimal,
        HeatLevel::Low,
        HeatLevel::Moderate,
        HeatLevel::High,
        HeatLevel::Severe,
    ];

    /// Bucket an intensity in `0.0..=1.0`.
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity < 0.2 {
            Self::Minimal
        } else if intensity < 0.4 {
            Self::Low
        } else if intensity < 0.6 {
            Self::Moderate
        } else if intensity < 0.8 {
            Self::High
        } else {
            Self::Severe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }
}

/// Failure counts laid out on a category (x) by weekday (y) grid.
///
/// Axis labels keep the order in which they first appear in the input.
/// Combinations with no observation count as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    /// `values[y][x]`.
    pub values: Vec<Vec<u32>>,
    pub max: u32,
}

impl Heatmap {
    pub fn build(cells: &[HeatmapCell]) -> Self {
        let mut x_labels: Vec<String> = Vec::new();
        let mut y_labels: Vec<String> = Vec::new();
        for cell in cells {
            if !x_labels.contains(&cell.x) {
                x_labels.push(cell.x.clone());
            }
            if !y_labels.contains(&cell.y) {
                y_labels.push(cell.y.clone());
            }
        }

        // First cell for an (x, y) pair wins; later duplicates are ignored.
        let mut slots: Vec<Vec<Option<u32>>> = vec![vec![None; x_labels.len()]; y_labels.len()];
        for cell in cells {
            let x = x_labels.iter().position(|l| *l == cell.x);
            let y = y_labels.iter().position(|l| *l == cell.y);
            if let (Some(x), Some(y)) = (x, y) {
                slots[y][x].get_or_insert(cell.value);
            }
        }
        let values: Vec<Vec<u32>> = slots
            .into_iter()
            .map(|row| row.into_iter().map(|v| v.unwrap_or(0)).collect())
            .collect();

        let max = cells.iter().map(|c| c.value).max().unwrap_or(0);

        Self {
            x_labels,
            y_labels,
            values,
            max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x_labels.is_empty()
    }

    pub fn value(&self, x: &str, y: &str) -> u32 {
        let xi = self.x_labels.iter().position(|l| l == x);
        let yi = self.y_labels.iter().position(|l| l == y);
        match (xi, yi) {
            (Some(xi), Some(yi)) => self.values[yi][xi],
            _ => 0,
        }
    }

    /// Bucket `value` against this map's maximum. An all-zero map is all `Minimal`.
    pub fn level(&self, value: u32) -> HeatLevel {
        if self.max == 0 {
            return HeatLevel::Minimal;
        }
        HeatLevel::from_intensity(f64::from(value) / f64::from(self.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells() -> Vec<HeatmapCell> {
        vec![
            HeatmapCell::new("Packaging", "Monday", 3),
            HeatmapCell::new("Packaging", "Tuesday", 5),
            HeatmapCell::new("Storage", "Monday", 1),
        ]
    }

    #[test]
    fn axes_keep_first_appearance_order() {
        let map = Heatmap::build(&cells());
        assert_eq!(map.x_labels, vec!["Packaging", "Storage"]);
        assert_eq!(map.y_labels, vec!["Monday", "Tuesday"]);
        assert_eq!(map.max, 5);
    }

    #[test]
    fn absent_combinations_are_zero() {
        let map = Heatmap::build(&cells());
        assert_eq!(map.value("Storage", "Tuesday"), 0);
        assert_eq!(map.value("Packaging", "Tuesday"), 5);
        assert_eq!(map.value("Nowhere", "Monday"), 0);
        assert_eq!(map.values, vec![vec![3, 1], vec![5, 0]]);
    }

    #[test]
    fn levels_bucket_by_share_of_max() {
        let map = Heatmap::build(&[HeatmapCell::new("a", "b", 10)]);
        assert_eq!(map.level(0), HeatLevel::Minimal);
        assert_eq!(map.level(1), HeatLevel::Minimal);
        assert_eq!(map.level(2), HeatLevel::Low);
        assert_eq!(map.level(5), HeatLevel::Moderate);
        assert_eq!(map.level(7), HeatLevel::High);
        assert_eq!(map.level(8), HeatLevel::Severe);
        assert_eq!(map.level(10), HeatLevel::Severe);
    }

    #[test]
    fn duplicate_cells_keep_the_first_value() {
        let map = Heatmap::build(&[
            HeatmapCell::new("Packaging", "Monday", 3),
            HeatmapCell::new("Storage", "Monday", 1),
            HeatmapCell::new("Packaging", "Monday", 9),
        ]);
        assert_eq!(map.x_labels, vec!["Packaging", "Storage"]);
        assert_eq!(map.value("Packaging", "Monday"), 3);
        assert_eq!(map.value("Storage", "Monday"), 1);
    }

    #[test]
    fn all_zero_map_is_minimal() {
        let map = Heatmap::build(&[HeatmapCell::new("a", "b", 0)]);
        assert_eq!(map.level(0), HeatLevel::Minimal);
    }

    #[test]
    fn empty_input_builds_empty_map() {
        let map = Heatmap::build(&[]);
        assert!(map.is_empty());
        assert_eq!(map.max, 0);
        assert!(map.values.is_empty());
    }
}
