use yew::prelude::*;

use crate::config::SITE;
use crate::dashboard::chart::ChartConfig;
use crate::dashboard::kpi::kpis;
use crate::dashboard::{
    category_bar_chart, combo_chart, progress_ring, resolve_accent, trend_line_chart,
    CATEGORY_CANVAS, COMBO_CANVAS, PROGRESS_RINGS, TREND_CANVAS,
};
use crate::utils::chart::{render_chart, Chart};
use crate::utils::dom;

fn chart_configs(accent: &str) -> Vec<(&'static str, ChartConfig)> {
    let mut configs = vec![
        (COMBO_CANVAS, combo_chart()),
        (CATEGORY_CANVAS, category_bar_chart()),
        (TREND_CANVAS, trend_line_chart()),
    ];
    configs.extend(
        PROGRESS_RINGS
            .iter()
            .map(|(canvas, value)| (*canvas, progress_ring(*value, accent))),
    );
    configs
}

/// Business dashboard: five fixed charts and three KPI literals, rendered once.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let charts = use_mut_ref(Vec::<Chart>::new);

    {
        let charts = charts.clone();
        use_effect_with_deps(
            move |_| {
                let accent = resolve_accent(dom::css_variable(SITE.accent_variable), SITE.accent_fallback);
                for (canvas, config) in chart_configs(&accent) {
                    match render_chart(canvas, &config) {
                        Ok(chart) => charts.borrow_mut().push(chart),
                        Err(e) => log::warn!("{}", e),
                    }
                }
                log::info!("Dashboard rendered {} charts", charts.borrow().len());
                move || {
                    for chart in charts.borrow_mut().drain(..) {
                        chart.destroy();
                    }
                }
            },
            (),
        );
    }

    html! {
        <section id="dashboard" class="dashboard">
            <div class="container">
                <h2 class="section-title">{"Dashboard"}</h2>
                <div class="kpi-grid">
                    { for kpis().into_iter().map(|kpi| html! {
                        <div class="kpi-card" key={kpi.element_id}>
                            <span class="kpi-label">{ kpi.label }</span>
                            <span class="kpi-value" id={kpi.element_id}>{ kpi.text }</span>
                        </div>
                    }) }
                </div>
                <div class="chart-grid">
                    <div class="chart-card chart-wide"><canvas id={COMBO_CANVAS}></canvas></div>
                    <div class="chart-card"><canvas id={CATEGORY_CANVAS}></canvas></div>
                    <div class="chart-card"><canvas id={TREND_CANVAS}></canvas></div>
                </div>
                <div class="progress-grid">
                    { for PROGRESS_RINGS.iter().map(|(canvas, _)| html! {
                        <div class="progress-ring" key={*canvas}>
                            <canvas id={*canvas}></canvas>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chart_gets_its_own_canvas() {
        let configs = chart_configs("#2563eb");
        assert_eq!(configs.len(), 6);
        let mut ids: Vec<_> = configs.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        assert!(ids.contains(&"circleZiel1"));
        assert!(ids.contains(&"circleZiel3"));
    }
}
