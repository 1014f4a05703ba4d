//! Health information panel for the selected day.

use dioxus::prelude::*;
use jkt_view::InfoPanel;

#[derive(Props, Clone, PartialEq)]
pub struct AqiInfoPanelProps {
    pub info: InfoPanel,
}

/// Date, AQI with category (in the category color), advisory, temperature
/// and wind speed.
#[component]
pub fn AqiInfoPanel(props: AqiInfoPanelProps) -> Element {
    let info = &props.info;
    let aqi_style = format!("margin: 4px 0; color: {};", info.color);
    let [date_line, aqi_line, advisory_line, temperature_line, wind_speed_line] = info.lines();

    rsx! {
        div {
            style: "text-align: center; margin-top: 20px;",
            h3 { style: "margin: 4px 0;", "{date_line}" }
            h3 { style: "{aqi_style}", "{aqi_line}" }
            p { "{advisory_line}" }
            p { "{temperature_line}" }
            p { "{wind_speed_line}" }
        }
    }
}
