//! Quiz flow state: upload, answering, evaluated.
//!
//! DESIGN
//! ======
//! Answers are keyed by question index per section so re-rendering the
//! question list never loses input. The answer sheet is built from the
//! question set, not from the answers, so every question is submitted even
//! when skipped.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use std::collections::BTreeMap;

use crate::net::types::{AnswerSheet, Evaluation, McqAnswer, NOT_ANSWERED, QuestionSet, WrittenAnswer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizSection {
    Mcq,
    Descriptive,
    SoftSkills,
}

/// Answers typed or chosen so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    pub mcq: BTreeMap<usize, String>,
    pub descriptive: BTreeMap<usize, String>,
    pub soft_skills: BTreeMap<usize, String>,
}

impl QuizAnswers {
    pub fn set(&mut self, section: QuizSection, index: usize, value: String) {
        self.section_mut(section).insert(index, value);
    }

    pub fn get(&self, section: QuizSection, index: usize) -> Option<&str> {
        self.section(section).get(&index).map(String::as_str)
    }

    /// Number of non-blank answers across all sections.
    pub fn answered_count(&self) -> usize {
        [&self.mcq, &self.descriptive, &self.soft_skills]
            .into_iter()
            .flat_map(BTreeMap::values)
            .filter(|v| !v.trim().is_empty())
            .count()
    }

    fn section(&self, section: QuizSection) -> &BTreeMap<usize, String> {
        match section {
            QuizSection::Mcq => &self.mcq,
            QuizSection::Descriptive => &self.descriptive,
            QuizSection::SoftSkills => &self.soft_skills,
        }
    }

    fn section_mut(&mut self, section: QuizSection) -> &mut BTreeMap<usize, String> {
        match section {
            QuizSection::Mcq => &mut self.mcq,
            QuizSection::Descriptive => &mut self.descriptive,
            QuizSection::SoftSkills => &mut self.soft_skills,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    Upload,
    Answering(QuestionSet),
    Evaluated(Evaluation),
}

#[derive(Clone, Debug, Default)]
pub struct QuizState {
    pub phase: QuizPhase,
    pub answers: QuizAnswers,
}

impl QuizState {
    /// Enter the answering phase with fresh answers.
    pub fn start(&mut self, questions: QuestionSet) {
        self.phase = QuizPhase::Answering(questions);
        self.answers = QuizAnswers::default();
    }

    pub fn finish(&mut self, evaluation: Evaluation) {
        self.phase = QuizPhase::Evaluated(evaluation);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn questions(&self) -> Option<&QuestionSet> {
        match &self.phase {
            QuizPhase::Answering(questions) => Some(questions),
            _ => None,
        }
    }

    /// Answer sheet for the current questions, if answering.
    pub fn answer_sheet(&self) -> Option<AnswerSheet> {
        self.questions().map(|q| build_answer_sheet(q, &self.answers))
    }
}

/// Pair every question with its answer, `"Not answered"` when missing.
pub fn build_answer_sheet(questions: &QuestionSet, answers: &QuizAnswers) -> AnswerSheet {
    let answer_or_default = |section: QuizSection, index: usize| {
        answers
            .get(section, index)
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(NOT_ANSWERED)
            .to_owned()
    };

    AnswerSheet {
        mcq: questions
            .mcq
            .iter()
            .enumerate()
            .map(|(i, q)| McqAnswer {
                question: q.question.clone(),
                selected_answer: answer_or_default(QuizSection::Mcq, i),
                correct_answer: q.answer.clone(),
            })
            .collect(),
        descriptive: questions
            .descriptive
            .iter()
            .enumerate()
            .map(|(i, q)| WrittenAnswer {
                question: q.question.clone(),
                answer: answer_or_default(QuizSection::Descriptive, i),
            })
            .collect(),
        soft_skills: questions
            .soft_skills
            .iter()
            .enumerate()
            .map(|(i, q)| WrittenAnswer {
                question: q.question.clone(),
                answer: answer_or_default(QuizSection::SoftSkills, i),
            })
            .collect(),
    }
}

/// Join list items for a single-line summary.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}
