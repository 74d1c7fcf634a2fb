//! Dropdown selector for choosing a vehicle class.

use super::{FIELD_STYLE, LABEL_STYLE};
use coe_core::domain::VehicleClass;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct VehicleClassSelectorProps {
    /// Classes the page supports, in display order
    pub options: &'static [VehicleClass],
    pub value: VehicleClass,
    pub onchange: EventHandler<VehicleClass>,
    #[props(default = "Vehicle Class".to_string(), into)]
    pub label: String,
}

/// Vehicle class dropdown. Options are limited to the page's class set.
#[component]
pub fn VehicleClassSelector(props: VehicleClassSelectorProps) -> Element {
    let onchange = props.onchange;
    let on_change = move |evt: Event<FormData>| match evt.value().parse::<VehicleClass>() {
        Ok(class) => onchange.call(class),
        Err(err) => log::warn!("[COE] {}", err),
    };

    rsx! {
        label {
            r#for: "vehicle-class-select",
            style: LABEL_STYLE,
            "{props.label}"
            select {
                id: "vehicle-class-select",
                style: FIELD_STYLE,
                onchange: on_change,
                for class in props.options.iter() {
                    option {
                        value: "{class.as_str()}",
                        selected: *class == props.value,
                        "{class.as_str()}"
                    }
                }
            }
        }
    }
}
