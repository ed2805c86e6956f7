use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Resume Analyzer"</p>
            <p class="footer__note">"Scores and suggestions are generated by AI and may be inaccurate."</p>
        </footer>
    }
}
