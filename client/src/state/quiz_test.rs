use super::*;
use crate::net::types::{McqQuestion, OpenQuestion};

fn sample_questions() -> QuestionSet {
    QuestionSet {
        mcq: vec![
            McqQuestion {
                question: "Which keyword moves ownership into a closure?".to_owned(),
                options: vec!["ref".to_owned(), "move".to_owned()],
                answer: Some("move".to_owned()),
            },
            McqQuestion {
                question: "Default integer type?".to_owned(),
                options: vec!["i32".to_owned(), "i64".to_owned()],
                answer: Some("i32".to_owned()),
            },
        ],
        descriptive: vec![OpenQuestion { question: "Explain borrowing.".to_owned() }],
        soft_skills: vec![OpenQuestion { question: "Describe a disagreement.".to_owned() }],
    }
}

// =============================================================
// Answer sheet
// =============================================================

#[test]
fn answer_sheet_fills_unanswered_questions() {
    let sheet = build_answer_sheet(&sample_questions(), &QuizAnswers::default());
    assert_eq!(sheet.mcq.len(), 2);
    assert!(sheet.mcq.iter().all(|a| a.selected_answer == NOT_ANSWERED));
    assert_eq!(sheet.descriptive[0].answer, NOT_ANSWERED);
    assert_eq!(sheet.soft_skills[0].answer, NOT_ANSWERED);
}

#[test]
fn answer_sheet_carries_correct_answers_and_selection() {
    let mut answers = QuizAnswers::default();
    answers.set(QuizSection::Mcq, 1, "i64".to_owned());
    answers.set(QuizSection::Descriptive, 0, "Shared or exclusive references.".to_owned());

    let sheet = build_answer_sheet(&sample_questions(), &answers);
    assert_eq!(sheet.mcq[0].correct_answer.as_deref(), Some("move"));
    assert_eq!(sheet.mcq[1].selected_answer, "i64");
    assert!(!sheet.mcq[1].is_correct());
    assert_eq!(sheet.descriptive[0].answer, "Shared or exclusive references.");
    assert_eq!(sheet.descriptive[0].question, "Explain borrowing.");
}

#[test]
fn answer_sheet_treats_whitespace_answer_as_unanswered() {
    let mut answers = QuizAnswers::default();
    answers.set(QuizSection::SoftSkills, 0, "   ".to_owned());
    let sheet = build_answer_sheet(&sample_questions(), &answers);
    assert_eq!(sheet.soft_skills[0].answer, NOT_ANSWERED);
}

#[test]
fn answers_for_unknown_indices_are_ignored() {
    let mut answers = QuizAnswers::default();
    answers.set(QuizSection::Mcq, 9, "ref".to_owned());
    let sheet = build_answer_sheet(&sample_questions(), &answers);
    assert_eq!(sheet.mcq.len(), 2);
}

// =============================================================
// Phases
// =============================================================

#[test]
fn quiz_state_starts_in_upload() {
    let state = QuizState::default();
    assert_eq!(state.phase, QuizPhase::Upload);
    assert!(state.answer_sheet().is_none());
}

#[test]
fn start_clears_previous_answers() {
    let mut state = QuizState::default();
    state.answers.set(QuizSection::Mcq, 0, "ref".to_owned());
    state.start(sample_questions());
    assert_eq!(state.answers, QuizAnswers::default());
    assert!(state.answer_sheet().is_some());
}

#[test]
fn finish_then_reset_returns_to_upload() {
    let mut state = QuizState::default();
    state.start(sample_questions());
    state.finish(Evaluation::default());
    assert!(matches!(state.phase, QuizPhase::Evaluated(_)));
    assert!(state.questions().is_none());
    state.reset();
    assert_eq!(state.phase, QuizPhase::Upload);
}

#[test]
fn answered_count_ignores_blank_entries() {
    let mut answers = QuizAnswers::default();
    answers.set(QuizSection::Mcq, 0, "move".to_owned());
    answers.set(QuizSection::Descriptive, 0, String::new());
    answers.set(QuizSection::SoftSkills, 0, "Listened first.".to_owned());
    assert_eq!(answers.answered_count(), 2);
}

#[test]
fn join_list_uses_comma_separator() {
    assert_eq!(join_list(&["APIs".to_owned(), "Testing".to_owned()]), "APIs, Testing");
    assert_eq!(join_list(&[]), "");
}
