//! Machine-readable JSON reports.

use serde::Serialize;

use crate::analysis::{HueGroup, PercentileSlice};
use crate::error::{HueError, Result};
use crate::types::SortKey;

use super::report::Summary;

/// Hue groups of one image.
#[derive(Debug, Clone, Serialize)]
pub struct GroupsReport<'a> {
    pub image: String,
    pub summary: &'a Summary,
    pub group_size: i32,
    pub groups: &'a [HueGroup],
}

/// Percentile slices of one image.
#[derive(Debug, Clone, Serialize)]
pub struct PercentilesReport<'a> {
    pub image: String,
    pub summary: &'a Summary,
    pub sorted_by: SortKey,
    pub increment: u32,
    pub slices: &'a [PercentileSlice],
}

/// Serialize a report as pretty-printed JSON.
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| HueError::Report {
        message: format!("Failed to serialize report: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::group_by_hue_buckets;
    use crate::types::{Hsv, HueCount, HueFrequencyMap};

    #[test]
    fn test_groups_report_json() {
        let seq = vec![
            HueCount::new(Hsv::new(10.0, 1.0, 1.0), 4),
            HueCount::new(Hsv::new(200.0, 1.0, 0.5), 2),
        ];
        let groups = group_by_hue_buckets(&seq, 180).unwrap();
        let summary = Summary::new(&HueFrequencyMap::new(), &seq, 0);

        let json = to_json(&GroupsReport {
            image: "photo.png".to_string(),
            summary: &summary,
            group_size: 180,
            groups: &groups,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["image"], "photo.png");
        assert_eq!(value["groups"].as_array().unwrap().len(), 2);
        assert_eq!(value["groups"][1]["index"], 1);
        assert_eq!(value["groups"][1]["count"], 2);
        assert_eq!(value["groups"][1]["average"]["hue"], 200.0);
        assert!(value["groups"][0].get("entries").is_none());
        assert_eq!(value["summary"]["above_min_count"], 2);
    }

    #[test]
    fn test_percentiles_report_json() {
        let summary = Summary::new(&HueFrequencyMap::new(), &[], 20);
        let slices = vec![PercentileSlice {
            from_percent: 0,
            to_percent: 100,
            average_hue: 45.0,
            count: 7,
        }];

        let json = to_json(&PercentilesReport {
            image: "a.png".to_string(),
            summary: &summary,
            sorted_by: SortKey::Count,
            increment: 100,
            slices: &slices,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["sorted_by"], "count");
        assert_eq!(value["slices"][0]["count"], 7);
        assert!(value["summary"]["average_hue"].is_null());
    }
}
