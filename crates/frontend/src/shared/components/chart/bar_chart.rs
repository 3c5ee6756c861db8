use super::geometry::bar_rows;
use contracts::dashboards::ChartSlice;
use leptos::prelude::*;

const LABEL_WIDTH: f64 = 160.0;
const BAR_WIDTH: f64 = 320.0;
const VALUE_WIDTH: f64 = 90.0;
const ROW_HEIGHT: f64 = 28.0;

/// Horizontal bars; `format_value` renders the number next to each bar.
#[component]
pub fn BarChart(
    title: &'static str,
    #[prop(into)] series: Signal<Vec<ChartSlice>>,
    #[prop(optional)] format_value: Option<fn(f64) -> String>,
    #[prop(optional)] empty_text: Option<&'static str>,
) -> impl IntoView {
    let empty_text = empty_text.unwrap_or("No data yet");
    let format_value = format_value.unwrap_or(|v| format!("{}", v));
    let rows = Memo::new(move |_| series.with(|s| bar_rows(s, BAR_WIDTH, ROW_HEIGHT)));
    let height = move || rows.with(|r| r.len() as f64 * ROW_HEIGHT);
    let total_width = LABEL_WIDTH + BAR_WIDTH + VALUE_WIDTH;

    view! {
        <div class="chart chart--bar">
            <div class="chart__title">{title}</div>
            <Show
                when=move || rows.with(|r| !r.is_empty())
                fallback=move || view! { <div class="chart__empty">{empty_text}</div> }
            >
                <svg
                    class="chart__svg"
                    viewBox=move || format!("0 0 {} {}", total_width, height())
                    width=total_width
                    height=height
                >
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                let text_y = row.y + ROW_HEIGHT / 2.0 + 4.0;
                                view! {
                                    <g class="chart__bar-row">
                                        <text x=0 y=text_y class="chart__bar-label">{row.label.clone()}</text>
                                        <rect
                                            x=LABEL_WIDTH
                                            y=row.y + 4.0
                                            width=row.width
                                            height=ROW_HEIGHT - 8.0
                                            rx=3
                                            fill=row.color
                                        >
                                            <title>{format!("{}: {}", row.label, format_value(row.value))}</title>
                                        </rect>
                                        <text
                                            x=LABEL_WIDTH + row.width + 6.0
                                            y=text_y
                                            class="chart__bar-value"
                                        >
                                            {format_value(row.value)}
                                        </text>
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                </svg>
            </Show>
        </div>
    }
}
