//! Group scatter points into one series per vehicle class.

use coe_core::models::ScatterPoint;
use std::collections::BTreeMap;

/// Series colours, assigned by sorted category position and cycled.
pub const PALETTE: [&str; 5] = ["#00D9FF", "#F08F90", "#FFD93D", "#6BCF7F", "#B28DFF"];

/// One category's `[quota, premium]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<[f64; 2]>,
}

/// Split points by `vehicle_class`. Series come out sorted by name so colours
/// stay stable whatever order the backend returns rows in.
pub fn group_by_class(points: &[ScatterPoint]) -> Vec<ScatterSeries> {
    let mut grouped: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for point in points {
        grouped
            .entry(point.vehicle_class.as_str())
            .or_default()
            .push([point.quota, point.premium]);
    }

    grouped
        .into_iter()
        .enumerate()
        .map(|(idx, (name, points))| ScatterSeries {
            name: name.to_string(),
            color: PALETTE[idx % PALETTE.len()],
            points,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(class: &str, quota: f64, premium: f64) -> ScatterPoint {
        ScatterPoint {
            vehicle_class: class.to_string(),
            quota,
            premium,
        }
    }

    #[test]
    fn two_classes_make_two_sorted_series() {
        let series = group_by_class(&[
            point("Category B", 800.0, 70000.0),
            point("Category A", 1000.0, 90000.0),
            point("Category B", 850.0, 72000.0),
        ]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Category A");
        assert_eq!(series[1].name, "Category B");
        assert_eq!(series[0].color, PALETTE[0]);
        assert_eq!(series[1].color, PALETTE[1]);
        assert_eq!(series[1].points, vec![[800.0, 70000.0], [850.0, 72000.0]]);
    }

    #[test]
    fn colours_do_not_depend_on_input_order() {
        let forward = group_by_class(&[point("Category A", 1.0, 2.0), point("Category E", 3.0, 4.0)]);
        let reversed = group_by_class(&[point("Category E", 3.0, 4.0), point("Category A", 1.0, 2.0)]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn palette_cycles_past_five_classes() {
        let points: Vec<ScatterPoint> = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|c| point(c, 1.0, 1.0))
            .collect();
        let series = group_by_class(&points);
        assert_eq!(series[5].color, PALETTE[0]);
    }

    #[test]
    fn empty_input_has_no_series() {
        assert!(group_by_class(&[]).is_empty());
    }
}
