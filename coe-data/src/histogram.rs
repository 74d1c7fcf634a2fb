//! Fixed-width histogram over premium values.

use coe_utils::format::{dollars, dollars_k};
use serde::Serialize;

/// Bucket count used by the Analysis page.
pub const DEFAULT_BIN_COUNT: usize = 30;

/// Bucket counts plus the metadata needed to label them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Histogram {
    /// `$NNNk` label of each bucket's start value.
    pub labels: Vec<String>,
    pub bins: Vec<usize>,
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
}

impl Histogram {
    /// Bin `values` into `bin_count` equal-width buckets spanning `[min, max]`.
    ///
    /// The maximum lands in the last bucket. Constant input gets a bin width
    /// of 1 so every value falls in bucket 0. Empty input (or zero buckets)
    /// gives an empty histogram. NaN and infinities are skipped.
    pub fn build(values: &[f64], bin_count: usize) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.len() != values.len() {
            log::debug!(
                "[COE] histogram: skipped {} non-finite values",
                values.len() - finite.len()
            );
        }
        if finite.is_empty() || bin_count == 0 {
            return Self::default();
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut bin_width = (max - min) / bin_count as f64;
        if bin_width == 0.0 {
            bin_width = 1.0;
        }

        let labels = (0..bin_count)
            .map(|i| dollars_k(min + i as f64 * bin_width))
            .collect();

        let mut bins = vec![0usize; bin_count];
        for value in finite {
            let idx = ((value - min) / bin_width).floor() as usize;
            bins[idx.min(bin_count - 1)] += 1;
        }

        Self {
            labels,
            bins,
            min,
            max,
            bin_width,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn total(&self) -> usize {
        self.bins.iter().sum()
    }

    /// Start and end value of bucket `idx`.
    pub fn bounds(&self, idx: usize) -> (f64, f64) {
        let start = self.min + idx as f64 * self.bin_width;
        (start, start + self.bin_width)
    }

    /// Tooltip text for bucket `idx`: `$100,000 - $133,333`.
    pub fn range_label(&self, idx: usize) -> String {
        let (start, end) = self.bounds(idx);
        format!("{} - {}", dollars(start), dollars(end))
    }
}
