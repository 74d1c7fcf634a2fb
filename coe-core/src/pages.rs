//! The three dashboard pages: their filters, defaults, query derivation and
//! validation rules.

use crate::domain::{Aggregation, VehicleClass, XAxisMode};
use crate::error::ValidationError;
use crate::models::{AnalysisPayload, PremiumPayload, SeasonalityPayload};
use crate::query::QueryParams;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Static description of one dashboard page and its backend endpoint.
pub trait Page: 'static {
    /// Filter form state. `Default` yields the page's initial values.
    type Filters: Clone + PartialEq + Debug + Default;
    /// Parsed response body.
    type Payload: DeserializeOwned + Default + PartialEq + Debug;

    /// Short name used in log lines.
    const NAME: &'static str;
    /// Endpoint path, resolved against the page origin.
    const PATH: &'static str;
    /// Vehicle classes offered by the page's selector.
    const VEHICLE_CLASSES: &'static [VehicleClass];

    /// Every filter field, string-encoded, in form order.
    fn derive_query(filters: &Self::Filters) -> QueryParams;

    /// Problems that would make the backend reject or misread the query.
    fn validate(filters: &Self::Filters) -> Vec<ValidationError>;

    /// Row count for logging.
    fn row_count(payload: &Self::Payload) -> usize;
}

fn check_years(start_year: i32, end_year: i32, errors: &mut Vec<ValidationError>) {
    if start_year > end_year {
        errors.push(ValidationError::YearRangeInverted {
            start_year,
            end_year,
        });
    }
}

fn check_class<P: Page>(class: VehicleClass, errors: &mut Vec<ValidationError>) {
    if !P::VEHICLE_CLASSES.contains(&class) {
        errors.push(ValidationError::UnsupportedVehicleClass(
            class.as_str().to_string(),
        ));
    }
}

// ───────────────────── Seasonality ─────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalityFilters {
    pub vehicle_class: VehicleClass,
    pub start_year: i32,
    pub end_year: i32,
    pub aggregation: Aggregation,
}

impl Default for SeasonalityFilters {
    fn default() -> Self {
        Self {
            vehicle_class: VehicleClass::CategoryA,
            start_year: 2010,
            end_year: 2019,
            aggregation: Aggregation::Mean,
        }
    }
}

/// Monthly quota vs premium profile.
pub struct SeasonalityPage;

impl Page for SeasonalityPage {
    type Filters = SeasonalityFilters;
    type Payload = SeasonalityPayload;

    const NAME: &'static str = "seasonality";
    const PATH: &'static str = "/api/seasonality";
    const VEHICLE_CLASSES: &'static [VehicleClass] = &[
        VehicleClass::CategoryA,
        VehicleClass::CategoryB,
        VehicleClass::CategoryC,
        VehicleClass::CategoryD,
    ];

    fn derive_query(filters: &SeasonalityFilters) -> QueryParams {
        QueryParams::new()
            .with("vehicle_class", filters.vehicle_class)
            .with("start_year", filters.start_year)
            .with("end_year", filters.end_year)
            .with("aggregation", filters.aggregation)
    }

    fn validate(filters: &SeasonalityFilters) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_class::<Self>(filters.vehicle_class, &mut errors);
        check_years(filters.start_year, filters.end_year, &mut errors);
        errors
    }

    fn row_count(payload: &SeasonalityPayload) -> usize {
        payload.data.len()
    }
}

// ───────────────────── Analysis ─────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisFilters {
    pub vehicle_class: VehicleClass,
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for AnalysisFilters {
    fn default() -> Self {
        Self {
            vehicle_class: VehicleClass::All,
            start_year: 2010,
            end_year: 2025,
        }
    }
}

/// Premium distribution and quota/premium scatter.
pub struct AnalysisPage;

impl Page for AnalysisPage {
    type Filters = AnalysisFilters;
    type Payload = AnalysisPayload;

    const NAME: &'static str = "analysis";
    const PATH: &'static str = "/api/analysis";
    const VEHICLE_CLASSES: &'static [VehicleClass] = &VehicleClass::ALL_CLASSES;

    fn derive_query(filters: &AnalysisFilters) -> QueryParams {
        QueryParams::new()
            .with("vehicle_class", filters.vehicle_class)
            .with("start_year", filters.start_year)
            .with("end_year", filters.end_year)
    }

    fn validate(filters: &AnalysisFilters) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_class::<Self>(filters.vehicle_class, &mut errors);
        check_years(filters.start_year, filters.end_year, &mut errors);
        errors
    }

    fn row_count(payload: &AnalysisPayload) -> usize {
        payload.distribution.len()
    }
}

// ───────────────────── Premium ─────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct PremiumFilters {
    pub vehicle_class: VehicleClass,
    /// Moving-average window in x-axis periods.
    pub window: i64,
    pub x_axis_mode: XAxisMode,
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for PremiumFilters {
    fn default() -> Self {
        Self {
            vehicle_class: VehicleClass::All,
            window: 6,
            x_axis_mode: XAxisMode::Year,
            start_year: 2010,
            end_year: 2019,
        }
    }
}

/// Premium vs moving average tracker.
pub struct PremiumPage;

impl Page for PremiumPage {
    type Filters = PremiumFilters;
    type Payload = PremiumPayload;

    const NAME: &'static str = "premium";
    const PATH: &'static str = "/api/premium";
    const VEHICLE_CLASSES: &'static [VehicleClass] = &[
        VehicleClass::All,
        VehicleClass::CategoryA,
        VehicleClass::CategoryB,
        VehicleClass::CategoryC,
        VehicleClass::CategoryD,
    ];

    fn derive_query(filters: &PremiumFilters) -> QueryParams {
        QueryParams::new()
            .with("vehicle_class", filters.vehicle_class)
            .with("window", filters.window)
            .with("x_axis_mode", filters.x_axis_mode)
            .with("start_year", filters.start_year)
            .with("end_year", filters.end_year)
    }

    fn validate(filters: &PremiumFilters) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_class::<Self>(filters.vehicle_class, &mut errors);
        if filters.window < 1 {
            errors.push(ValidationError::WindowTooSmall(filters.window));
        }
        check_years(filters.start_year, filters.end_year, &mut errors);
        errors
    }

    fn row_count(payload: &PremiumPayload) -> usize {
        payload.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasonality_query_has_documented_parameters() {
        let filters = SeasonalityFilters {
            vehicle_class: VehicleClass::CategoryB,
            start_year: 2018,
            end_year: 2023,
            aggregation: Aggregation::Median,
        };
        let query = SeasonalityPage::derive_query(&filters);
        assert_eq!(
            query.names(),
            vec!["vehicle_class", "start_year", "end_year", "aggregation"]
        );
        assert_eq!(query.get("vehicle_class"), Some("Category B"));
        assert_eq!(query.get("start_year"), Some("2018"));
        assert_eq!(query.get("end_year"), Some("2023"));
        assert_eq!(query.get("aggregation"), Some("median"));
    }

    #[test]
    fn analysis_query_has_documented_parameters() {
        let query = AnalysisPage::derive_query(&AnalysisFilters::default());
        assert_eq!(query.names(), vec!["vehicle_class", "start_year", "end_year"]);
        assert_eq!(
            query.to_query_string(),
            "vehicle_class=ALL&start_year=2010&end_year=2025"
        );
    }

    #[test]
    fn premium_query_has_documented_parameters() {
        let filters = PremiumFilters {
            window: 12,
            x_axis_mode: XAxisMode::Month,
            ..PremiumFilters::default()
        };
        let query = PremiumPage::derive_query(&filters);
        assert_eq!(
            query.names(),
            vec!["vehicle_class", "window", "x_axis_mode", "start_year", "end_year"]
        );
        assert_eq!(query.get("window"), Some("12"));
        assert_eq!(query.get("x_axis_mode"), Some("Month"));
    }

    #[test]
    fn query_tracks_every_field_change() {
        let base = PremiumFilters::default();
        let variants = [
            PremiumFilters { vehicle_class: VehicleClass::CategoryD, ..base.clone() },
            PremiumFilters { window: 3, ..base.clone() },
            PremiumFilters { x_axis_mode: XAxisMode::Month, ..base.clone() },
            PremiumFilters { start_year: 2005, ..base.clone() },
            PremiumFilters { end_year: 2024, ..base.clone() },
        ];
        let base_query = PremiumPage::derive_query(&base);
        for variant in &variants {
            assert_ne!(PremiumPage::derive_query(variant), base_query, "{variant:?}");
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(SeasonalityPage::validate(&SeasonalityFilters::default()).is_empty());
        assert!(AnalysisPage::validate(&AnalysisFilters::default()).is_empty());
        assert!(PremiumPage::validate(&PremiumFilters::default()).is_empty());
    }

    #[test]
    fn inverted_years_are_rejected() {
        let filters = AnalysisFilters {
            start_year: 2020,
            end_year: 2015,
            ..AnalysisFilters::default()
        };
        assert_eq!(
            AnalysisPage::validate(&filters),
            vec![ValidationError::YearRangeInverted {
                start_year: 2020,
                end_year: 2015
            }]
        );
    }

    #[test]
    fn window_below_one_is_rejected() {
        for window in [0, -3] {
            let filters = PremiumFilters {
                window,
                ..PremiumFilters::default()
            };
            assert_eq!(
                PremiumPage::validate(&filters),
                vec![ValidationError::WindowTooSmall(window)]
            );
        }
    }

    #[test]
    fn seasonality_rejects_all_class() {
        let filters = SeasonalityFilters {
            vehicle_class: VehicleClass::All,
            ..SeasonalityFilters::default()
        };
        assert_eq!(
            SeasonalityPage::validate(&filters),
            vec![ValidationError::UnsupportedVehicleClass("ALL".to_string())]
        );
    }
}
