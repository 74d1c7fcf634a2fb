//! Shared Dioxus components and ECharts bridge for the COE dashboard.
//!
//! This crate provides:
//! - `echarts_bridge`: Rust wrappers for ECharts calls via `js_sys::eval()`
//! - `state`: the API client context and per-page controller hooks
//! - `components`: reusable RSX components (filters, chart card, shell, tabs)

pub mod components;
pub mod echarts_bridge;
pub mod state;
