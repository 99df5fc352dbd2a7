//! Placeholder "data trends" panel and its toggle

use dioxus::prelude::*;

use crate::application::timeline::{ChartBody, ChartPanelView, SeriesButton, WidgetCell};
use crate::ui::presentation::state::use_timeline_state;

#[component]
pub fn ChartPanel(chart: ChartPanelView) -> Element {
    let state = use_timeline_state();
    let display = if chart.visible { "block" } else { "none" };
    let icon = if chart.visible { "fas fa-times" } else { "fas fa-chart-line" };

    rsx! {
        div {
            class: "chart-toggle",
            button {
                id: "showDataChart",
                onclick: move |_| {
                    state.with_widget(|widget| widget.toggle_chart_panel());
                },
                i { class: icon }
                " {chart.toggle_label}"
            }
        }

        div {
            class: "chart-container",
            style: "display: {display};",

            div {
                class: "chart-header",
                h3 { "{chart.title}" }
                div {
                    class: "chart-controls",
                    for button in chart.series.iter() {
                        SeriesControl { key: "{button.series}", button: button.clone() }
                    }
                }
            }

            div {
                class: "chart-display",
                {
                    match chart.body {
                        ChartBody::Prompt(prompt) => rsx! {
                            p { class: "chart-placeholder", "{prompt}" }
                        },
                        ChartBody::Placeholder([first, second]) => rsx! {
                            p { "{first}" }
                            p { "{second}" }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn SeriesControl(button: SeriesButton) -> Element {
    let state = use_timeline_state();
    let series = button.series;

    rsx! {
        button {
            class: if button.active { "active" } else { "" },
            "data-chart": series.as_str(),
            onclick: move |_| {
                state.with_widget(|widget| widget.select_chart_series(series));
            },
            "{button.label}"
        }
    }
}
