use chrono::{Duration, NaiveDate};
use common::dates::to_display_date;
use engine::Scenario;
use plotly::common::{DashType, Line, Mode};
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

const SCENARIO_COLORS: &[&str] = &["#06b6d4", "#8b5cf6", "#f59e0b"];

#[derive(Properties, PartialEq)]
pub struct ComparisonChartProps {
    pub base_forecast: f64,
    pub base_date: NaiveDate,
    pub scenarios: Vec<Scenario>,
}

/// Overlay of the baseline forecast trend against each saved scenario's
/// simulated level over the next 30 days.
#[function_component(ComparisonChart)]
pub fn comparison_chart(props: &ComparisonChartProps) -> Html {
    let container_ref = use_node_ref();
    let base_forecast = props.base_forecast;
    let base_date = props.base_date;
    let scenarios = props.scenarios.clone();

    use_effect_with(
        (container_ref.clone(), scenarios.clone()),
        move |(container_ref, scenarios)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id("whatif-comparison-chart");

                let dates: Vec<String> = (0..30)
                    .map(|i| to_display_date(base_date + Duration::days(i)))
                    .collect();

                // A gentle drift keeps the comparison lines readable; the
                // levels are what matters.
                let baseline: Vec<f64> = (0..30)
                    .map(|i| base_forecast + i as f64 * 0.5)
                    .collect();

                let mut traces: Vec<Box<Scatter<String, f64>>> = vec![
                    Scatter::new(dates.clone(), baseline)
                        .mode(Mode::Lines)
                        .name("Current Forecast")
                        .line(Line::new().color("#10B981").width(2.0)),
                ];

                for (index, scenario) in scenarios.iter().enumerate() {
                    let level = scenario.result.simulated_forecast;
                    let values: Vec<f64> = (0..30).map(|i| level + i as f64 * 0.5).collect();
                    let color = SCENARIO_COLORS[index % SCENARIO_COLORS.len()];
                    traces.push(
                        Scatter::new(dates.clone(), values)
                            .mode(Mode::Lines)
                            .name(&scenario.name)
                            .line(
                                Line::new()
                                    .color(color)
                                    .width(2.0)
                                    .dash(DashType::Dash),
                            ),
                    );
                }

                let layout = Layout::new().height(300);

                let data_js = js_sys::Array::new();
                for trace in &traces {
                    let trace_json = serde_json::to_string(trace).unwrap();
                    let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                    data_js.push(&trace_js);
                }

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot("whatif-comparison-chart", data_js.into(), layout_js);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:300px;"></div>
    }
}
