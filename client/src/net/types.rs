//! Wire DTOs for the resume backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Every response field is
//! defaulted: a missing or null field renders as an empty section rather than
//! failing the whole response. Scores arrive as numbers or strings depending
//! on the endpoint, so they are normalized to display text on the way in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder sent for questions the user skipped.
pub const NOT_ANSWERED: &str = "Not answered";

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_id: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email_id: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
}

// =============================================================================
// RESUME ANALYSIS
// =============================================================================

/// Scoring for one uploaded resume.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeReport {
    #[serde(deserialize_with = "deserialize_display_text")]
    pub score: Option<String>,
    #[serde(deserialize_with = "deserialize_display_text")]
    pub readability_score: Option<String>,
    pub ats_friendly: bool,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub missing_keywords: Vec<String>,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub grammar_issues: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyzeResponse {
    pub analysis: Option<ResumeReport>,
}

// =============================================================================
// JOB MATCHING
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobMatch {
    #[serde(deserialize_with = "deserialize_string_list")]
    pub missing_skills: Vec<String>,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub suggested_jobs: Vec<String>,
    pub detailed_description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JobMatchResponse {
    pub analysis: Option<JobMatch>,
}

// =============================================================================
// QUIZ
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct McqQuestion {
    pub question: String,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub options: Vec<String>,
    pub answer: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenQuestion {
    pub question: String,
}

/// Questions generated from an uploaded resume.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionSet {
    pub mcq: Vec<McqQuestion>,
    pub descriptive: Vec<OpenQuestion>,
    pub soft_skills: Vec<OpenQuestion>,
}

impl QuestionSet {
    pub fn is_empty(&self) -> bool {
        self.mcq.is_empty() && self.descriptive.is_empty() && self.soft_skills.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuizResponse {
    pub questions: QuestionSet,
}

/// Optional question counts sent alongside the resume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuizPreferences {
    pub mcq: Option<u32>,
    pub descriptive: Option<u32>,
    pub soft_skills: Option<u32>,
}

impl QuizPreferences {
    /// Multipart text fields for the preferences that are set.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        [("mcqCount", self.mcq), ("descriptiveCount", self.descriptive), ("softSkillsCount", self.soft_skills)]
            .into_iter()
            .filter_map(|(name, count)| count.map(|c| (name, c.to_string())))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct McqAnswer {
    pub question: String,
    pub selected_answer: String,
    pub correct_answer: Option<String>,
}

impl McqAnswer {
    pub fn is_correct(&self) -> bool {
        self.correct_answer.as_deref() == Some(self.selected_answer.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WrittenAnswer {
    pub question: String,
    pub answer: String,
}

/// Body of `POST /resume/submit-answers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSheet {
    pub mcq: Vec<McqAnswer>,
    pub descriptive: Vec<WrittenAnswer>,
    pub soft_skills: Vec<WrittenAnswer>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MentorAnalysis {
    #[serde(deserialize_with = "deserialize_display_text")]
    pub confidence_level: Option<String>,
    pub mentor_advice: Option<String>,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub improvement_areas: Vec<String>,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub strong_areas: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct McqScore {
    pub details: Vec<McqAnswer>,
    #[serde(deserialize_with = "deserialize_display_text")]
    pub score: Option<String>,
    #[serde(deserialize_with = "deserialize_display_text")]
    pub total: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackSection {
    pub feedback_summary: Option<String>,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub suggestions: Vec<String>,
    #[serde(deserialize_with = "deserialize_string_list")]
    pub weaknesses: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionScores {
    pub mcq: Option<McqScore>,
    pub descriptive: Option<FeedbackSection>,
    pub soft_skills: Option<FeedbackSection>,
}

/// Backend verdict on a submitted answer sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Evaluation {
    pub mentor_analysis: Option<MentorAnalysis>,
    pub section_scores: Option<SectionScores>,
}

// =============================================================================
// PROFILE + STATS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileResponse {
    pub user: Option<ProfileUser>,
    pub last_resume: Option<ResumeReport>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoreBucket {
    /// Bucket index; `3` covers scores around 30.
    #[serde(rename = "_id", deserialize_with = "deserialize_i64_lenient")]
    pub bucket: i64,
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub count: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeStats {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub total_resumes: i64,
    pub score_distribution: Vec<ScoreBucket>,
}

// =============================================================================
// LENIENT DESERIALIZERS
// =============================================================================

/// Accept a string, number or bool and keep it as display text. Null is `None`.
fn deserialize_display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        serde_json::Value::Bool(flag) => Ok(Some(flag.to_string())),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

/// Accept an array of strings, skipping non-string entries. Null is empty.
fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| match item {
            serde_json::Value::String(text) => Some(text),
            serde_json::Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
        .collect())
}

/// Accept an integer given as a number or numeric string. Null is `0`.
fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => {
            text.trim().parse::<i64>().map_err(|_| D::Error::custom(format!("expected integer, got {text:?}")))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
