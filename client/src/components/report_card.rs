//! Resume score card shared by the analysis and profile pages.

#[cfg(test)]
#[path = "report_card_test.rs"]
mod report_card_test;

use leptos::prelude::*;

use crate::net::types::ResumeReport;

#[component]
pub fn ReportCard(#[prop(into)] title: String, report: ResumeReport) -> impl IntoView {
    let score = out_of_hundred(report.score.as_deref());
    let readability = out_of_hundred(report.readability_score.as_deref());
    let ats = if report.ats_friendly { "Yes ✅" } else { "No ❌" };
    let missing = report.missing_keywords;
    let grammar = report.grammar_issues;
    let has_missing = !missing.is_empty();
    let has_grammar = !grammar.is_empty();

    view! {
        <section class="card report-card">
            <h2>{title}</h2>
            <p>"Score: " {score}</p>
            <p>"Readability: " {readability}</p>
            <p>"ATS Friendly: " {ats}</p>
            <Show when=move || has_missing>
                <h3>"Missing Keywords:"</h3>
                <ul class="report-card__list report-card__list--warn">
                    {missing.iter().map(|k| view! { <li>{k.clone()}</li> }).collect_view()}
                </ul>
            </Show>
            <Show when=move || has_grammar>
                <h3>"Grammar Issues:"</h3>
                <ul class="report-card__list report-card__list--warn">
                    {grammar.iter().map(|g| view! { <li>{g.clone()}</li> }).collect_view()}
                </ul>
            </Show>
        </section>
    }
}

/// `"82/100"`, or a dash when the backend omitted the value.
pub fn out_of_hundred(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => format!("{v}/100"),
        None => "—".to_owned(),
    }
}
