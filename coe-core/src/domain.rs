//! Enumerated filter domains.

use crate::error::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle category partitioning the COE bidding dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleClass {
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "Category A")]
    CategoryA,
    #[serde(rename = "Category B")]
    CategoryB,
    #[serde(rename = "Category C")]
    CategoryC,
    #[serde(rename = "Category D")]
    CategoryD,
    #[serde(rename = "Category E")]
    CategoryE,
}

impl VehicleClass {
    pub const ALL_CLASSES: [VehicleClass; 6] = [
        VehicleClass::All,
        VehicleClass::CategoryA,
        VehicleClass::CategoryB,
        VehicleClass::CategoryC,
        VehicleClass::CategoryD,
        VehicleClass::CategoryE,
    ];

    /// The label the backend filters on.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::All => "ALL",
            VehicleClass::CategoryA => "Category A",
            VehicleClass::CategoryB => "Category B",
            VehicleClass::CategoryC => "Category C",
            VehicleClass::CategoryD => "Category D",
            VehicleClass::CategoryE => "Category E",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleClass {
    type Err = ParseEnumError;

    /// Accepts the backend label case-insensitively, or a bare letter ("b").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        VehicleClass::ALL_CLASSES
            .iter()
            .copied()
            .find(|class| {
                class.as_str().eq_ignore_ascii_case(trimmed)
                    || class
                        .as_str()
                        .strip_prefix("Category ")
                        .is_some_and(|letter| letter.eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| ParseEnumError {
                kind: "vehicle class",
                value: s.to_string(),
            })
    }
}

/// Server-side reducer for month grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    #[default]
    Mean,
    Median,
}

impl Aggregation {
    pub const ALL: [Aggregation; 2] = [Aggregation::Mean, Aggregation::Median];

    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Mean => "mean",
            Aggregation::Median => "median",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Aggregation::Mean => "Mean",
            Aggregation::Median => "Median",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Aggregation {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Aggregation::Mean),
            "median" => Ok(Aggregation::Median),
            _ => Err(ParseEnumError {
                kind: "aggregation",
                value: s.to_string(),
            }),
        }
    }
}

/// X-axis granularity of the premium tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum XAxisMode {
    #[default]
    Year,
    Month,
}

impl XAxisMode {
    pub const ALL: [XAxisMode; 2] = [XAxisMode::Year, XAxisMode::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            XAxisMode::Year => "Year",
            XAxisMode::Month => "Month",
        }
    }
}

impl fmt::Display for XAxisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for XAxisMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(XAxisMode::Year),
            "month" => Ok(XAxisMode::Month),
            _ => Err(ParseEnumError {
                kind: "x-axis mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Which of the two Analysis charts is shown. Not sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisView {
    #[default]
    Histogram,
    Scatter,
}

impl AnalysisView {
    pub const ALL: [AnalysisView; 2] = [AnalysisView::Histogram, AnalysisView::Scatter];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisView::Histogram => "histogram",
            AnalysisView::Scatter => "scatter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisView::Histogram => "Histogram",
            AnalysisView::Scatter => "Scatter Plot",
        }
    }

    /// Card heading above the chart.
    pub fn heading(&self) -> &'static str {
        match self {
            AnalysisView::Histogram => "Price Distribution",
            AnalysisView::Scatter => "Supply vs Price",
        }
    }
}

impl FromStr for AnalysisView {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "histogram" => Ok(AnalysisView::Histogram),
            "scatter" => Ok(AnalysisView::Scatter),
            _ => Err(ParseEnumError {
                kind: "chart view",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_class_parses_labels_and_letters() {
        assert_eq!("ALL".parse::<VehicleClass>(), Ok(VehicleClass::All));
        assert_eq!("all".parse::<VehicleClass>(), Ok(VehicleClass::All));
        assert_eq!(
            "Category C".parse::<VehicleClass>(),
            Ok(VehicleClass::CategoryC)
        );
        assert_eq!("e".parse::<VehicleClass>(), Ok(VehicleClass::CategoryE));
        assert!("Category F".parse::<VehicleClass>().is_err());
    }

    #[test]
    fn vehicle_class_serializes_as_backend_label() {
        let json = serde_json::to_string(&VehicleClass::CategoryB).unwrap();
        assert_eq!(json, "\"Category B\"");
    }

    #[test]
    fn mode_strings_match_query_values() {
        assert_eq!(Aggregation::Median.to_string(), "median");
        assert_eq!(XAxisMode::Month.to_string(), "Month");
        assert_eq!("MONTH".parse::<XAxisMode>(), Ok(XAxisMode::Month));
        assert_eq!("scatter".parse::<AnalysisView>(), Ok(AnalysisView::Scatter));
    }
}
