//! Public statistics page: resume count and score distribution.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::ResumeStats;
use crate::state::request::Fetch;

/// One bar of the score distribution chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRow {
    /// Rating shown on the axis; bucket `3` is rating `30`.
    pub rating: i64,
    pub count: i64,
    /// Bar width relative to the largest bucket, `0.0..=100.0`.
    pub percent: f64,
}

/// Chart rows ordered by rating.
pub fn score_rows(stats: &ResumeStats) -> Vec<ScoreRow> {
    let max = stats.score_distribution.iter().map(|b| b.count).max().unwrap_or(0);
    let mut rows: Vec<ScoreRow> = stats
        .score_distribution
        .iter()
        .map(|b| ScoreRow { rating: b.bucket.saturating_mul(10), count: b.count, percent: bar_percent(b.count, max) })
        .collect();
    rows.sort_by_key(|r| r.rating);
    rows
}

#[allow(clippy::cast_precision_loss)]
fn bar_percent(count: i64, max: i64) -> f64 {
    if max <= 0 || count <= 0 {
        return 0.0;
    }
    count as f64 / max as f64 * 100.0
}

#[component]
pub fn StatsPage() -> impl IntoView {
    let stats = RwSignal::new(Fetch::<ResumeStats>::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_stats().await;
        if let Err(e) = &result {
            log::warn!("stats fetch failed: {e}");
        }
        stats.set(Fetch::from_result(result));
    });

    view! {
        <div class="page stats-page">
            <h1>"Resume Statistics"</h1>
            {move || match stats.get() {
                Fetch::Loading => view! { <p class="muted">"Loading statistics..."</p> }.into_any(),
                Fetch::Failed(_) => view! { <p class="page__error">"Failed to load statistics."</p> }.into_any(),
                Fetch::Loaded(data) => {
                    let rows = score_rows(&data);
                    view! {
                        <section class="card stats-card">
                            <p class="stats-card__total">
                                "Total resumes parsed: " <strong>{data.total_resumes}</strong>
                            </p>
                            <h2>"Score Distribution"</h2>
                            <div class="stats-chart">
                                {rows
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <div class="stats-chart__row">
                                                <span class="stats-chart__label">{row.rating}</span>
                                                <div class="stats-chart__track">
                                                    <div
                                                        class="stats-chart__bar"
                                                        style=format!("width: {:.1}%", row.percent)
                                                    ></div>
                                                </div>
                                                <span class="stats-chart__count">{row.count}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
