//! Reusable Dioxus RSX components for the COE dashboard.

mod chart_container;
mod chart_header;
mod choice_selector;
mod error_display;
mod load_button;
mod loading_spinner;
mod page_shell;
mod tab_nav;
mod vehicle_class_selector;
mod window_input;
mod year_range_picker;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use choice_selector::ChoiceSelector;
pub use error_display::ErrorDisplay;
pub use load_button::LoadButton;
pub use loading_spinner::LoadingSpinner;
pub use page_shell::PageShell;
pub use tab_nav::TabNav;
pub use vehicle_class_selector::VehicleClassSelector;
pub use window_input::WindowInput;
pub use year_range_picker::YearRangePicker;

pub(crate) const LABEL_STYLE: &str =
    "font-weight: bold; font-size: 13px; color: #A9BCD0; display: flex; flex-direction: column; gap: 4px;";
pub(crate) const FIELD_STYLE: &str =
    "padding: 6px 8px; background: #1A1F26; color: #E8ECF0; border: 1px solid rgba(169, 188, 208, 0.3); border-radius: 4px;";
