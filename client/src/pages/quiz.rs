//! Resume quiz page: generate questions from a resume, answer them, read the
//! mentor evaluation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Phase lives in `QuizState`. The page only re-renders a whole section when
//! the phase changes, so typing an answer never rebuilds the question list.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::resume_drop::{ResumeDrop, ResumeSignal};
use crate::net::types::{Evaluation, FeedbackSection, McqQuestion, McqScore, MentorAnalysis, OpenQuestion, QuizPreferences};
use crate::state::notice::{NoticeKind, NoticeState, notify};
use crate::state::quiz::{QuizPhase, QuizSection, QuizState, join_list};
use crate::state::request::RequestTracker;
use crate::state::session::SessionContext;
use crate::util::upload::MISSING_FILE;

/// Upper bound for a requested question count.
pub const MAX_QUESTIONS: u32 = 20;

const BAD_COUNT: &str = "Question counts must be whole numbers between 1 and 20";
#[cfg(feature = "hydrate")]
const NO_QUESTIONS: &str = "No questions were generated for this resume.";

/// Parse one question-count input. Blank means "let the server decide".
///
/// # Errors
///
/// Returns the toast message when the input is not a count in range.
pub fn parse_count(raw: &str) -> Result<Option<u32>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(n) if (1..=MAX_QUESTIONS).contains(&n) => Ok(Some(n)),
        _ => Err(BAD_COUNT),
    }
}

/// Parse all three count inputs.
///
/// # Errors
///
/// Returns the first invalid count's message.
pub fn parse_preferences(mcq: &str, descriptive: &str, soft_skills: &str) -> Result<QuizPreferences, &'static str> {
    Ok(QuizPreferences {
        mcq: parse_count(mcq)?,
        descriptive: parse_count(descriptive)?,
        soft_skills: parse_count(soft_skills)?,
    })
}

/// `"score / total"` line for the MCQ section, if the server sent a score.
pub fn score_label(score: &McqScore) -> Option<String> {
    let value = score.score.as_deref()?;
    Some(match score.total.as_deref() {
        Some(total) => format!("{value} / {total}"),
        None => value.to_owned(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PhaseKind {
    Upload,
    Answering,
    Evaluated,
}

#[component]
pub fn QuizPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let quiz = RwSignal::new(QuizState::default());
    let file: ResumeSignal = RwSignal::new_local(None);
    let mcq_count = RwSignal::new(String::new());
    let descriptive_count = RwSignal::new(String::new());
    let soft_skills_count = RwSignal::new(String::new());
    let generate_tracker = RwSignal::new(RequestTracker::default());
    let submit_tracker = RwSignal::new(RequestTracker::default());

    let phase = Memo::new(move |_| {
        quiz.with(|q| match q.phase {
            QuizPhase::Upload => PhaseKind::Upload,
            QuizPhase::Answering(_) => PhaseKind::Answering,
            QuizPhase::Evaluated(_) => PhaseKind::Evaluated,
        })
    });

    let on_generate = move |_| {
        let Some(selected) = file.get_untracked() else {
            notify(notices, NoticeKind::Error, MISSING_FILE);
            return;
        };
        let preferences = match parse_preferences(
            &mcq_count.get_untracked(),
            &descriptive_count.get_untracked(),
            &soft_skills_count.get_untracked(),
        ) {
            Ok(preferences) => preferences,
            Err(message) => {
                notify(notices, NoticeKind::Error, message);
                return;
            }
        };
        let Some((token, ticket)) = super::action::start_authenticated(session, notices, generate_tracker) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::generate_quiz(&token, &selected, preferences).await;
            if !super::action::finish(generate_tracker, ticket) {
                return;
            }
            match result {
                Ok(resp) if resp.questions.is_empty() => notify(notices, NoticeKind::Error, NO_QUESTIONS),
                Ok(resp) => {
                    quiz.update(|q| q.start(resp.questions));
                    notify(notices, NoticeKind::Success, "Test created successfully!");
                }
                Err(e) => super::action::report_failure(notices, "Failed to generate test.", &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (selected, preferences, token, ticket);
    };

    let on_submit = move |_| {
        let Some(sheet) = quiz.with_untracked(QuizState::answer_sheet) else {
            return;
        };
        let Some((token, ticket)) = super::action::start_authenticated(session, notices, submit_tracker) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_answers(&token, &sheet).await;
            if !super::action::finish(submit_tracker, ticket) {
                return;
            }
            match result {
                Ok(evaluation) => {
                    quiz.update(|q| q.finish(evaluation));
                    notify(notices, NoticeKind::Success, "Answers submitted and evaluated successfully!");
                }
                Err(e) => super::action::report_failure(notices, "Failed to submit answers.", &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (sheet, token, ticket);
    };

    let on_retake = move |_| {
        generate_tracker.update(RequestTracker::reset);
        submit_tracker.update(RequestTracker::reset);
        file.set(None);
        quiz.update(QuizState::reset);
    };

    let count_input = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="quiz-prefs__field">
                <span>{label}</span>
                <input
                    type="number"
                    min="1"
                    max=MAX_QUESTIONS.to_string()
                    placeholder="auto"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="page quiz-page">
            <h1>"Resume-Based Skill Test"</h1>
            {move || match phase.get() {
                PhaseKind::Upload => view! {
                    <p class="page__lead">"Upload your resume and get a test generated from your own experience."</p>
                    <ResumeDrop file=file/>
                    <div class="quiz-prefs">
                        {count_input("MCQ questions", mcq_count)}
                        {count_input("Descriptive questions", descriptive_count)}
                        {count_input("Soft-skill questions", soft_skills_count)}
                    </div>
                    <Show when=move || file.with(Option::is_some)>
                        <button
                            class="btn page__action"
                            on:click=on_generate
                            disabled=move || generate_tracker.get().is_pending()
                        >
                            {move || if generate_tracker.get().is_pending() { "Generating..." } else { "Generate Test" }}
                        </button>
                    </Show>
                }
                .into_any(),
                PhaseKind::Answering => {
                    let questions = quiz.with_untracked(|q| q.questions().cloned()).unwrap_or_default();
                    view! {
                        <QuestionList quiz=quiz mcq=questions.mcq descriptive=questions.descriptive soft_skills=questions.soft_skills/>
                        <p class="quiz-progress">
                            {move || format!("{} answered", quiz.with(|q| q.answers.answered_count()))}
                        </p>
                        <button class="btn page__action" on:click=on_submit disabled=move || submit_tracker.get().is_pending()>
                            {move || if submit_tracker.get().is_pending() { "Submitting..." } else { "Submit Answers" }}
                        </button>
                    }
                    .into_any()
                }
                PhaseKind::Evaluated => {
                    let evaluation = quiz.with_untracked(|q| match &q.phase {
                        QuizPhase::Evaluated(evaluation) => evaluation.clone(),
                        _ => Evaluation::default(),
                    });
                    view! {
                        <EvaluationView evaluation=evaluation/>
                        <button class="btn page__action" on:click=on_retake>"Retake Test"</button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn QuestionList(
    quiz: RwSignal<QuizState>,
    mcq: Vec<McqQuestion>,
    descriptive: Vec<OpenQuestion>,
    soft_skills: Vec<OpenQuestion>,
) -> impl IntoView {
    view! {
        <section class="card quiz-section">
            <h2>"Multiple Choice"</h2>
            {mcq
                .into_iter()
                .enumerate()
                .map(|(index, question)| view! { <McqItem quiz=quiz index=index question=question/> })
                .collect_view()}
        </section>
        <section class="card quiz-section">
            <h2>"Descriptive"</h2>
            {descriptive
                .into_iter()
                .enumerate()
                .map(|(index, q)| view! { <WrittenItem quiz=quiz section=QuizSection::Descriptive index=index question=q.question/> })
                .collect_view()}
        </section>
        <section class="card quiz-section">
            <h2>"Soft Skills"</h2>
            {soft_skills
                .into_iter()
                .enumerate()
                .map(|(index, q)| view! { <WrittenItem quiz=quiz section=QuizSection::SoftSkills index=index question=q.question/> })
                .collect_view()}
        </section>
    }
}

#[component]
fn McqItem(quiz: RwSignal<QuizState>, index: usize, question: McqQuestion) -> impl IntoView {
    let group = format!("mcq-{index}");
    view! {
        <div class="quiz-question">
            <p class="quiz-question__text">{format!("{}. {}", index + 1, question.question)}</p>
            {question
                .options
                .into_iter()
                .map(|option| {
                    let checked = option.clone();
                    let chosen = option.clone();
                    view! {
                        <label class="quiz-option">
                            <input
                                type="radio"
                                name=group.clone()
                                value=option.clone()
                                prop:checked=move || quiz.with(|q| q.answers.get(QuizSection::Mcq, index) == Some(checked.as_str()))
                                on:change=move |_| quiz.update(|q| q.answers.set(QuizSection::Mcq, index, chosen.clone()))
                            />
                            <span>{option}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn WrittenItem(quiz: RwSignal<QuizState>, section: QuizSection, index: usize, question: String) -> impl IntoView {
    view! {
        <div class="quiz-question">
            <p class="quiz-question__text">{format!("{}. {}", index + 1, question)}</p>
            <textarea
                class="page__textarea"
                placeholder="Your answer"
                prop:value=move || quiz.with(|q| q.answers.get(section, index).unwrap_or_default().to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    quiz.update(|q| q.answers.set(section, index, value));
                }
            ></textarea>
        </div>
    }
}

#[component]
fn EvaluationView(evaluation: Evaluation) -> impl IntoView {
    let scores = evaluation.section_scores.unwrap_or_default();
    view! {
        <div class="quiz-result">
            {evaluation.mentor_analysis.map(|m| view! { <MentorCard analysis=m/> })}
            {scores.mcq.map(|s| view! { <McqScoreCard score=s/> })}
            {scores.descriptive.map(|f| view! { <FeedbackCard title="Descriptive Feedback" feedback=f detailed=false/> })}
            {scores.soft_skills.map(|f| view! { <FeedbackCard title="Soft Skills Feedback" feedback=f detailed=true/> })}
        </div>
    }
}

#[component]
fn MentorCard(analysis: MentorAnalysis) -> impl IntoView {
    let improvement = (!analysis.improvement_areas.is_empty()).then(|| join_list(&analysis.improvement_areas));
    let strong = (!analysis.strong_areas.is_empty()).then(|| join_list(&analysis.strong_areas));
    view! {
        <section class="card quiz-result__mentor">
            <h2>"Mentor Analysis"</h2>
            {analysis.confidence_level.map(|c| view! { <p><strong>"Confidence Level: "</strong>{c}</p> })}
            {analysis.mentor_advice.map(|a| view! { <p><strong>"Mentor Advice: "</strong>{a}</p> })}
            {improvement.map(|i| view! { <p><strong>"Improvement Areas: "</strong>{i}</p> })}
            {strong.map(|s| view! { <p><strong>"Strong Areas: "</strong>{s}</p> })}
        </section>
    }
}

#[component]
fn McqScoreCard(score: McqScore) -> impl IntoView {
    let label = score_label(&score);
    view! {
        <section class="card quiz-result__mcq">
            <h2>"Multiple Choice Results"</h2>
            {label.map(|l| view! { <p class="quiz-result__score">{format!("Score: {l}")}</p> })}
            <ul>
                {score
                    .details
                    .into_iter()
                    .map(|d| {
                        let correct = d.is_correct();
                        let expected = d.correct_answer.clone().unwrap_or_default();
                        view! {
                            <li class="quiz-result__item" class:quiz-result__item--correct=correct>
                                <p>{d.question}</p>
                                <p>{format!("Your answer: {}", d.selected_answer)}</p>
                                {(!correct).then(|| view! { <p>{format!("Correct answer: {expected}")}</p> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn FeedbackCard(title: &'static str, feedback: FeedbackSection, detailed: bool) -> impl IntoView {
    let lists = if detailed {
        [("Strengths", feedback.strengths), ("Suggestions", feedback.suggestions), ("Weaknesses", feedback.weaknesses)]
            .into_iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(heading, items)| view! { <p><strong>{format!("{heading}: ")}</strong>{join_list(&items)}</p> })
            .collect_view()
            .into_any()
    } else {
        ().into_any()
    };
    view! {
        <section class="card quiz-result__feedback">
            <h2>{title}</h2>
            {feedback.feedback_summary.map(|s| view! { <p>{s}</p> })}
            {lists}
        </section>
    }
}
