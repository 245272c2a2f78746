use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

pub const MIN_PRIORITY: i32 = 0;
pub const MAX_PRIORITY: i32 = 100;
pub const DEFAULT_PRIORITY: i32 = 10;

pub const MIN_MAX_ROWS: i32 = 1;
pub const MAX_MAX_ROWS: i32 = 200_000;
pub const DEFAULT_MAX_ROWS: i32 = 5_000;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("please enter your name or email for tracking")]
    MissingCreatedBy,
    #[error("please enter a prompt name")]
    MissingPromptName,
    #[error("please enter the prompt instructions")]
    MissingUserPrompt,
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("start date is after end date")]
    InvertedDateRange,
    #[error("priority must be between {MIN_PRIORITY} and {MAX_PRIORITY}")]
    PriorityOutOfRange,
    #[error("max rows must be between {MIN_MAX_ROWS} and {MAX_MAX_ROWS}")]
    MaxRowsOutOfRange,
}

/// Analysis job a request can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jobname {
    Retention,
    Acquisition,
    Service,
}

/// Metadata only; the worker decides what to do with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    #[default]
    Reasoning,
    Mini,
}

impl ModelType {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::Reasoning => "reasoning",
            ModelType::Mini => "mini",
        }
    }
}

/// Requests are always created as `New`; every later transition belongs to
/// the external worker that drains the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    New,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::New => "NEW",
        }
    }
}

/// Raw submission payload as posted by the intake page.
///
/// Missing fields take the documented defaults; the required text fields
/// default to empty strings and are rejected by [`RequestForm::validate`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RequestForm {
    pub created_by: String,
    pub priority: i32,
    /// `YYYY-MM-DD`; today when absent.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`; a single selected date yields an equal start/end range.
    pub end_date: Option<String>,
    pub jobnames: Vec<Jobname>,
    pub max_rows: i32,
    pub model_type: ModelType,
    pub prompt_name: String,
    pub user_prompt: String,
    pub notes: String,
}

impl Default for RequestForm {
    fn default() -> Self {
        Self {
            created_by: String::new(),
            priority: DEFAULT_PRIORITY,
            start_date: None,
            end_date: None,
            jobnames: vec![Jobname::Retention, Jobname::Acquisition, Jobname::Service],
            max_rows: DEFAULT_MAX_ROWS,
            model_type: ModelType::default(),
            prompt_name: String::new(),
            user_prompt: String::new(),
            notes: String::new(),
        }
    }
}

/// A fully validated request, ready for a single insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequest {
    pub created_by: String,
    pub priority: i32,
    pub start_ts: OffsetDateTime,
    /// Exclusive upper bound: midnight of the day after the selected end
    /// date, so consumers can treat `[start_ts, end_ts)` as half-open.
    pub end_ts: OffsetDateTime,
    pub jobnames: Vec<Jobname>,
    pub max_rows: i32,
    pub model_type: ModelType,
    pub prompt_name: String,
    pub user_prompt: String,
    pub notes: Option<String>,
}

impl RequestForm {
    /// Checks the payload and converts it into a [`NewRequest`].
    ///
    /// No side effects: callers must not touch storage unless this returns
    /// `Ok`.
    pub fn validate(self) -> Result<NewRequest, ValidationError> {
        let created_by = self.created_by.trim();
        if created_by.is_empty() {
            return Err(ValidationError::MissingCreatedBy);
        }
        let prompt_name = self.prompt_name.trim();
        if prompt_name.is_empty() {
            return Err(ValidationError::MissingPromptName);
        }
        let user_prompt = self.user_prompt.trim();
        if user_prompt.is_empty() {
            return Err(ValidationError::MissingUserPrompt);
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&self.priority) {
            return Err(ValidationError::PriorityOutOfRange);
        }
        if !(MIN_MAX_ROWS..=MAX_MAX_ROWS).contains(&self.max_rows) {
            return Err(ValidationError::MaxRowsOutOfRange);
        }

        let start_date = match self.start_date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => OffsetDateTime::now_utc().date(),
        };
        let end_date = match self.end_date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => start_date,
        };
        if start_date > end_date {
            return Err(ValidationError::InvertedDateRange);
        }
        let end_exclusive = end_date
            .next_day()
            .ok_or_else(|| ValidationError::InvalidDate(end_date.to_string()))?;

        let notes = self.notes.trim();
        Ok(NewRequest {
            created_by: created_by.to_string(),
            priority: self.priority,
            start_ts: start_date.midnight().assume_utc(),
            end_ts: end_exclusive.midnight().assume_utc(),
            jobnames: self.jobnames,
            max_rows: self.max_rows,
            model_type: self.model_type,
            prompt_name: prompt_name.to_string(),
            user_prompt: user_prompt.to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

fn parse_date(input: &str) -> Result<Date, ValidationError> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}
