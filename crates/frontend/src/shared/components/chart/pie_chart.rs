use super::geometry::pie_segments;
use crate::shared::components::table::format_percent;
use contracts::dashboards::ChartSlice;
use leptos::prelude::*;

const SIZE: f64 = 200.0;

#[component]
pub fn PieChart(
    title: &'static str,
    #[prop(into)] series: Signal<Vec<ChartSlice>>,
    #[prop(optional)] empty_text: Option<&'static str>,
) -> impl IntoView {
    let empty_text = empty_text.unwrap_or("No data yet");
    let segments = Memo::new(move |_| {
        series.with(|s| pie_segments(s, SIZE / 2.0, SIZE / 2.0, SIZE / 2.0 - 4.0))
    });

    view! {
        <div class="chart chart--pie">
            <div class="chart__title">{title}</div>
            <Show
                when=move || segments.with(|s| !s.is_empty())
                fallback=move || view! { <div class="chart__empty">{empty_text}</div> }
            >
                <div class="chart__body">
                    <svg
                        class="chart__svg"
                        viewBox=format!("0 0 {SIZE} {SIZE}")
                        width=SIZE
                        height=SIZE
                    >
                        {move || {
                            segments
                                .get()
                                .into_iter()
                                .map(|seg| {
                                    let tip = format!("{}: {} ({})", seg.label, seg.value, format_percent(seg.percent));
                                    if seg.is_full_circle() {
                                        view! {
                                            <circle cx=SIZE / 2.0 cy=SIZE / 2.0 r=SIZE / 2.0 - 4.0 fill=seg.color>
                                                <title>{tip}</title>
                                            </circle>
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <path d=seg.path fill=seg.color stroke="#fff" stroke-width="1">
                                                <title>{tip}</title>
                                            </path>
                                        }
                                        .into_any()
                                    }
                                })
                                .collect_view()
                        }}
                    </svg>
                    <ul class="chart__legend">
                        {move || {
                            segments
                                .get()
                                .into_iter()
                                .map(|seg| {
                                    view! {
                                        <li class="chart__legend-item">
                                            <span class="chart__swatch" style=format!("background: {};", seg.color)></span>
                                            <span class="chart__legend-label">{seg.label}</span>
                                            <span class="chart__legend-value">
                                                {format!("{} · {}", seg.value, format_percent(seg.percent))}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
