//! Rendering fetched payloads as text tables, CSV or ECharts option JSON.

use clap::ValueEnum;
use coe_core::domain::AnalysisView;
use coe_core::models::{AnalysisPayload, PremiumPayload, SeasonalityPayload};
use coe_data::histogram::Histogram;
use coe_data::options::{histogram_option, premium_option, scatter_option, seasonality_option};
use coe_data::scatter::group_by_class;
use coe_utils::format::{dollars, thousands};
use coe_utils::months::short_label;
use serde_json::Value;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table for reading
    #[default]
    Text,
    /// Raw values, one row per point
    Csv,
    /// The ECharts option the dashboard would draw
    #[value(name = "option")]
    ChartOption,
}

fn cell(value: Option<f64>, fmt: fn(f64) -> String) -> String {
    value.map(fmt).unwrap_or_else(|| "-".to_string())
}

fn count(value: f64) -> String {
    thousands(value.round() as i64)
}

fn write_option(out: &mut impl Write, option: &Value) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, option)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_seasonality(
    out: &mut impl Write,
    payload: &SeasonalityPayload,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{:<6} {:>10} {:>12}", "Month", "Quota", "Premium")?;
            for row in &payload.data {
                writeln!(
                    out,
                    "{:<6} {:>10} {:>12}",
                    short_label(&row.month_name),
                    cell(row.quota, count),
                    cell(row.premium, dollars)
                )?;
            }
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            wtr.write_record(["month", "quota", "premium"])?;
            for row in &payload.data {
                wtr.serialize((&row.month_name, row.quota, row.premium))?;
            }
            wtr.flush()?;
        }
        OutputFormat::ChartOption => write_option(out, &seasonality_option(payload))?,
    }
    Ok(())
}

pub fn write_analysis(
    out: &mut impl Write,
    payload: &AnalysisPayload,
    view: AnalysisView,
    bins: usize,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match view {
        AnalysisView::Histogram => {
            write_histogram(out, &Histogram::build(&payload.distribution, bins), format)
        }
        AnalysisView::Scatter => write_scatter(out, payload, format),
    }
}

fn write_histogram(out: &mut impl Write, hist: &Histogram, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{:<25} {:>7}", "Premium range", "Count")?;
            for (idx, n) in hist.bins.iter().enumerate() {
                writeln!(out, "{:<25} {:>7}", hist.range_label(idx), n)?;
            }
            writeln!(out, "{} values in {} bins", hist.total(), hist.bins.len())?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            wtr.write_record(["bin_start", "bin_end", "count"])?;
            for (idx, n) in hist.bins.iter().enumerate() {
                let (start, end) = hist.bounds(idx);
                wtr.serialize((start, end, n))?;
            }
            wtr.flush()?;
        }
        OutputFormat::ChartOption => write_option(out, &histogram_option(hist))?,
    }
    Ok(())
}

fn write_scatter(out: &mut impl Write, payload: &AnalysisPayload, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{:<12} {:>7} {:>10} {:>12}", "Class", "Points", "Avg quota", "Avg premium")?;
            for series in group_by_class(&payload.scatter) {
                let n = series.points.len() as f64;
                let quota = series.points.iter().map(|p| p[0]).sum::<f64>() / n;
                let premium = series.points.iter().map(|p| p[1]).sum::<f64>() / n;
                writeln!(
                    out,
                    "{:<12} {:>7} {:>10} {:>12}",
                    series.name,
                    series.points.len(),
                    count(quota),
                    dollars(premium)
                )?;
            }
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            wtr.write_record(["vehicle_class", "quota", "premium"])?;
            for point in &payload.scatter {
                wtr.serialize((&point.vehicle_class, point.quota, point.premium))?;
            }
            wtr.flush()?;
        }
        OutputFormat::ChartOption => write_option(out, &scatter_option(payload))?,
    }
    Ok(())
}

pub fn write_premium(
    out: &mut impl Write,
    payload: &PremiumPayload,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{:<10} {:>12} {:>12}", "Period", "Premium", "Moving avg")?;
            for row in &payload.data {
                writeln!(
                    out,
                    "{:<10} {:>12} {:>12}",
                    row.x_label,
                    cell(row.premium, dollars),
                    cell(row.moving_avg, dollars)
                )?;
            }
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            wtr.write_record(["x_label", "premium", "moving_avg"])?;
            for row in &payload.data {
                wtr.serialize((&row.x_label, row.premium, row.moving_avg))?;
            }
            wtr.flush()?;
        }
        OutputFormat::ChartOption => write_option(out, &premium_option(payload))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coe_core::models::{PremiumRow, ScatterPoint, SeasonalityRow};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn seasonality() -> SeasonalityPayload {
        SeasonalityPayload {
            data: vec![
                SeasonalityRow {
                    month_name: "January".to_string(),
                    quota: Some(1234.5),
                    premium: Some(85000.25),
                },
                SeasonalityRow {
                    month_name: "February".to_string(),
                    quota: None,
                    premium: None,
                },
            ],
            count: 2,
        }
    }

    #[test]
    fn seasonality_text_uses_short_months() {
        let text = render(|out| write_seasonality(out, &seasonality(), OutputFormat::Text));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Jan"));
        assert!(lines[1].contains("1,235"));
        assert!(lines[1].contains("$85,000"));
        assert!(lines[2].starts_with("Feb"));
        assert!(lines[2].trim_end().ends_with('-'));
    }

    #[test]
    fn seasonality_csv_leaves_gaps_empty() {
        let text = render(|out| write_seasonality(out, &seasonality(), OutputFormat::Csv));
        assert_eq!(
            text,
            "month,quota,premium\nJanuary,1234.5,85000.25\nFebruary,,\n"
        );
    }

    #[test]
    fn option_format_is_the_chart_option() {
        let text = render(|out| write_seasonality(out, &seasonality(), OutputFormat::ChartOption));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, seasonality_option(&seasonality()));
    }

    #[test]
    fn histogram_text_lists_each_bin() {
        let payload = AnalysisPayload {
            distribution: vec![100000.0, 150000.0, 200000.0],
            scatter: vec![],
            count: 3,
        };
        let text = render(|out| write_analysis(out, &payload, AnalysisView::Histogram, 3, OutputFormat::Text));
        assert!(text.contains("$100,000 - $133,333"));
        assert!(text.ends_with("3 values in 3 bins\n"));
    }

    #[test]
    fn scatter_text_summarizes_sorted_classes() {
        let payload = AnalysisPayload {
            distribution: vec![],
            scatter: vec![
                ScatterPoint {
                    vehicle_class: "Category B".to_string(),
                    quota: 500.0,
                    premium: 60000.0,
                },
                ScatterPoint {
                    vehicle_class: "Category A".to_string(),
                    quota: 700.0,
                    premium: 80000.0,
                },
                ScatterPoint {
                    vehicle_class: "Category A".to_string(),
                    quota: 900.0,
                    premium: 90000.0,
                },
            ],
            count: 3,
        };
        let text = render(|out| write_analysis(out, &payload, AnalysisView::Scatter, 30, OutputFormat::Text));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("Category A"));
        assert!(lines[1].contains("$85,000"));
        assert!(lines[2].starts_with("Category B"));
    }

    #[test]
    fn premium_csv_keeps_missing_moving_average_empty() {
        let payload = PremiumPayload {
            data: vec![PremiumRow {
                x_label: "2015".to_string(),
                premium: Some(52000.0),
                moving_avg: None,
            }],
            count: 1,
        };
        let text = render(|out| write_premium(out, &payload, OutputFormat::Csv));
        assert_eq!(text, "x_label,premium,moving_avg\n2015,52000.0,\n");
    }
}
