//! ECharts option objects for each chart.
//!
//! Options are plain JSON values handed to `echarts.setOption`. They carry
//! data and static styling only, so every builder is a pure function of its
//! payload.

use crate::histogram::{Histogram, DEFAULT_BIN_COUNT};
use crate::scatter::group_by_class;
use coe_core::models::{AnalysisPayload, PremiumPayload, SeasonalityPayload};
use serde_json::{json, Value};

const TEXT: &str = "#E8ECF0";
const AXIS_LINE: &str = "rgba(169, 188, 208, 0.2)";
const SPLIT_LINE: &str = "rgba(169, 188, 208, 0.1)";
const TEAL: &str = "#66B3BA";
const CORAL: &str = "#F08F90";

fn tooltip(trigger: &str) -> Value {
    json!({
        "trigger": trigger,
        "backgroundColor": "rgba(26, 31, 38, 0.95)",
        "borderColor": "rgba(88, 164, 176, 0.3)",
        "textStyle": { "color": TEXT },
    })
}

fn category_axis(labels: Vec<String>) -> Value {
    json!({
        "type": "category",
        "data": labels,
        "axisLine": { "lineStyle": { "color": AXIS_LINE } },
        "axisLabel": { "color": TEXT },
        "splitLine": { "show": false },
    })
}

fn value_axis(name: &str) -> Value {
    json!({
        "type": "value",
        "name": name,
        "axisLine": { "lineStyle": { "color": AXIS_LINE } },
        "axisLabel": { "color": TEXT },
        "nameTextStyle": { "color": TEXT },
        "splitLine": { "lineStyle": { "color": SPLIT_LINE } },
    })
}

/// Quota bars on the left axis, premium line on the right, one category per row.
pub fn seasonality_option(payload: &SeasonalityPayload) -> Value {
    let months: Vec<String> = payload.data.iter().map(|r| r.month_name.clone()).collect();
    let quota: Vec<Option<f64>> = payload.data.iter().map(|r| r.quota).collect();
    let premium: Vec<Option<f64>> = payload.data.iter().map(|r| r.premium).collect();

    json!({
        "backgroundColor": "transparent",
        "tooltip": tooltip("axis"),
        "legend": { "data": ["Quota", "Premium"], "textStyle": { "color": TEXT } },
        "xAxis": category_axis(months),
        "yAxis": [value_axis("Quota"), value_axis("Premium")],
        "series": [
            {
                "name": "Quota",
                "type": "bar",
                "data": quota,
                "itemStyle": { "color": TEAL, "borderRadius": [6, 6, 0, 0] },
            },
            {
                "name": "Premium",
                "type": "line",
                "yAxisIndex": 1,
                "data": premium,
                "itemStyle": { "color": CORAL },
                "lineStyle": { "width": 3 },
                "smooth": true,
            },
        ],
        "grid": { "top": 60, "bottom": 70, "left": 50, "right": 50 },
    })
}

/// Frequency bars over the histogram buckets. Each bar carries its dollar
/// range as the item name so the tooltip can show it.
pub fn histogram_option(histogram: &Histogram) -> Value {
    let bars: Vec<Value> = histogram
        .bins
        .iter()
        .enumerate()
        .map(|(idx, count)| json!({ "value": count, "name": histogram.range_label(idx) }))
        .collect();

    let mut x_axis = category_axis(histogram.labels.clone());
    x_axis["axisLabel"]["rotate"] = json!(45);

    let mut tip = tooltip("item");
    tip["formatter"] = json!("{b}<br/>Count: {c}");

    json!({
        "backgroundColor": "transparent",
        "tooltip": tip,
        "xAxis": x_axis,
        "yAxis": value_axis("Frequency"),
        "series": [
            {
                "type": "bar",
                "data": bars,
                "itemStyle": { "color": TEAL, "borderRadius": [6, 6, 0, 0] },
                "barWidth": "90%",
            },
        ],
        "grid": { "bottom": 80, "left": 50, "right": 30, "top": 40 },
    })
}

/// Histogram of the payload's premium distribution at the default bucket count.
pub fn distribution_option(payload: &AnalysisPayload) -> Value {
    histogram_option(&Histogram::build(&payload.distribution, DEFAULT_BIN_COUNT))
}

/// Quota vs premium, one scatter series per vehicle class.
pub fn scatter_option(payload: &AnalysisPayload) -> Value {
    let series = group_by_class(&payload.scatter);
    let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();

    let mut x_axis = value_axis("Quota (Supply)");
    x_axis["nameGap"] = json!(30);
    x_axis["nameLocation"] = json!("middle");

    let mut tip = tooltip("item");
    tip["formatter"] = json!("{a}<br/>Quota, Premium: {c}");

    json!({
        "backgroundColor": "transparent",
        "tooltip": tip,
        "legend": { "data": names, "top": 0, "textStyle": { "color": TEXT } },
        "xAxis": x_axis,
        "yAxis": value_axis("Premium Price ($)"),
        "series": series
            .iter()
            .map(|s| json!({
                "name": s.name,
                "type": "scatter",
                "data": s.points,
                "symbolSize": 10,
                "itemStyle": { "color": s.color, "opacity": 0.85 },
            }))
            .collect::<Vec<_>>(),
        "grid": { "top": 60, "left": 50, "right": 30, "bottom": 60 },
    })
}

/// Raw premium (dashed) against the server's moving average (smooth).
pub fn premium_option(payload: &PremiumPayload) -> Value {
    let labels: Vec<String> = payload.data.iter().map(|r| r.x_label.clone()).collect();
    let premium: Vec<Option<f64>> = payload.data.iter().map(|r| r.premium).collect();
    let moving: Vec<Option<f64>> = payload.data.iter().map(|r| r.moving_avg).collect();

    json!({
        "backgroundColor": "transparent",
        "tooltip": tooltip("axis"),
        "legend": { "data": ["Premium", "Moving Avg"], "textStyle": { "color": TEXT } },
        "xAxis": category_axis(labels),
        "yAxis": value_axis("Premium (SGD)"),
        "series": [
            {
                "name": "Premium",
                "type": "line",
                "data": premium,
                "smooth": false,
                "showSymbol": true,
                "symbol": "circle",
                "symbolSize": 6,
                "lineStyle": { "type": "dashed", "width": 2, "opacity": 0.6 },
                "itemStyle": { "color": CORAL, "opacity": 0.8 },
            },
            {
                "name": "Moving Avg",
                "type": "line",
                "data": moving,
                "smooth": true,
                "showSymbol": true,
                "symbol": "circle",
                "symbolSize": 8,
                "lineStyle": { "type": "solid", "width": 3 },
                "itemStyle": { "color": TEAL },
            },
        ],
        "grid": { "top": 60, "bottom": 70, "left": 50, "right": 30 },
    })
}
