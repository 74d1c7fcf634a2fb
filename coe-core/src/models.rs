//! Response payloads returned by the analytics API.
//!
//! Every collection field defaults to empty when it is missing or `null`, so a
//! partial payload still produces a (possibly empty) chart.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One calendar month of the seasonality profile.
///
/// Months with no observations in the selected range come back as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityRow {
    pub month_name: String,
    #[serde(default)]
    pub quota: Option<f64>,
    #[serde(default)]
    pub premium: Option<f64>,
}

/// `GET /api/seasonality`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<SeasonalityRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: usize,
}

/// A single bidding round plotted as (quota, premium).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub vehicle_class: String,
    pub quota: f64,
    pub premium: f64,
}

/// `GET /api/analysis`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    /// Raw premiums, binned client-side into the histogram.
    #[serde(default, deserialize_with = "null_as_default")]
    pub distribution: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scatter: Vec<ScatterPoint>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: usize,
}

/// One x-axis bucket of the premium tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumRow {
    pub x_label: String,
    #[serde(default)]
    pub premium: Option<f64>,
    /// `None` until the moving-average window has filled.
    #[serde(default)]
    pub moving_avg: Option<f64>,
}

/// `GET /api/premium`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PremiumPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<PremiumRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: usize,
}
