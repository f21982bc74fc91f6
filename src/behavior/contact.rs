//! Contact form: field rules, draft state and the submit protocol.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::behavior::toast::ToastKind;
use crate::error::Result;
use crate::utils::scheduler::{sleep, BrowserScheduler, Scheduler};

pub const INVALID_FORM_MESSAGE: &str = "Por favor, completa todos los campos correctamente.";
pub const SENT_MESSAGE: &str = "¡Mensaje enviado! Te contactaremos en breve.";
pub const SEND_FAILED_MESSAGE: &str = "No pudimos enviar tu mensaje. Inténtalo de nuevo.";

/// Field values keyed by form control name.
pub type FormPayload = BTreeMap<String, String>;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern compiles"));

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_LEN: usize = 8;
const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    ProjectType,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::ProjectType,
        Field::Message,
    ];

    /// Form control name, also the payload key.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ProjectType => "project",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nombre",
            Field::Email => "Email",
            Field::Phone => "Teléfono",
            Field::ProjectType => "Tipo de proyecto",
            Field::Message => "Mensaje",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("{field} needs at least {min} characters")]
    TooShort { field: Field, min: usize },

    #[error("email address is malformed")]
    InvalidEmail,

    #[error("phone number may only contain digits, spaces and + - ( )")]
    InvalidPhone,
}

/// Check one field value. Surrounding whitespace is ignored.
pub fn validate_field(field: Field, raw: &str) -> std::result::Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Missing(field));
    }
    let len = value.chars().count();
    match field {
        Field::Name if len < MIN_NAME_LEN => Err(FieldError::TooShort {
            field,
            min: MIN_NAME_LEN,
        }),
        Field::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
        Field::Phone if !PHONE_RE.is_match(value) => Err(FieldError::InvalidPhone),
        Field::Phone if len < MIN_PHONE_LEN => Err(FieldError::TooShort {
            field,
            min: MIN_PHONE_LEN,
        }),
        Field::Message if len < MIN_MESSAGE_LEN => Err(FieldError::TooShort {
            field,
            min: MIN_MESSAGE_LEN,
        }),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<(Field, FieldError)>,
}

impl ValidationError {
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|(field, _)| *field)
    }
}

/// Validate every field of a collected payload. Missing keys count as empty.
pub fn validate_payload(payload: &FormPayload) -> std::result::Result<(), ValidationError> {
    let errors: Vec<(Field, FieldError)> = Field::ALL
        .into_iter()
        .filter_map(|field| {
            let value = payload.get(field.key()).map(String::as_str).unwrap_or("");
            validate_field(field, value).err().map(|err| (field, err))
        })
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMark {
    Unchecked,
    Valid,
    Invalid,
}

impl FieldMark {
    /// Inline border for the control, none until the field was checked.
    pub fn border_style(self) -> Option<&'static str> {
        match self {
            FieldMark::Unchecked => None,
            FieldMark::Valid => Some("border-color: rgba(255, 255, 255, 0.1);"),
            FieldMark::Invalid => Some("border-color: var(--color-primary);"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    Edit(Field, String),
    Check(Field),
    CheckAll,
    Reset,
}

/// Values and validation marks of the form as the visitor edits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    values: BTreeMap<Field, String>,
    invalid: BTreeSet<Field>,
    checked: BTreeSet<Field>,
}

impl ContactDraft {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn mark(&self, field: Field) -> FieldMark {
        if self.invalid.contains(&field) {
            FieldMark::Invalid
        } else if self.checked.contains(&field) {
            FieldMark::Valid
        } else {
            FieldMark::Unchecked
        }
    }

    /// Flat key/value mapping handed to the submitter.
    pub fn payload(&self) -> FormPayload {
        Field::ALL
            .into_iter()
            .map(|field| (field.key().to_string(), self.value(field).to_string()))
            .collect()
    }

    pub fn apply(&mut self, action: DraftAction) {
        match action {
            DraftAction::Edit(field, value) => {
                self.values.insert(field, value);
            }
            DraftAction::Check(field) => {
                self.check(field);
            }
            DraftAction::CheckAll => {
                for field in Field::ALL {
                    self.check(field);
                }
            }
            DraftAction::Reset => *self = Self::default(),
        }
    }

    fn check(&mut self, field: Field) -> bool {
        let valid = validate_field(field, self.value(field)).is_ok();
        self.checked.insert(field);
        if valid {
            self.invalid.remove(&field);
        } else {
            self.invalid.insert(field);
        }
        valid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("contact endpoint rejected the request: {0}")]
    Rejected(String),
}

/// Network seam for the contact form.
#[allow(async_fn_in_trait)]
pub trait ContactSubmitter {
    async fn submit(&self, payload: &FormPayload) -> std::result::Result<(), SubmitError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedOutcome {
    Succeed,
    Reject,
}

impl SimulatedOutcome {
    /// Query key that switches the page to a failing send, e.g. `?envio=falla`.
    pub const QUERY_KEY: &'static str = "envio";

    /// Outcome requested by a location search string. Anything but `envio=falla` succeeds.
    pub fn from_query(search: &str) -> Self {
        let failing = search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(key, value)| key == Self::QUERY_KEY && value == "falla");
        if failing {
            SimulatedOutcome::Reject
        } else {
            SimulatedOutcome::Succeed
        }
    }
}

/// Stand-in for a real endpoint: waits, then resolves with a fixed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter<S: Scheduler = BrowserScheduler> {
    scheduler: S,
    delay_ms: u32,
    outcome: SimulatedOutcome,
}

impl<S: Scheduler> SimulatedSubmitter<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            outcome: SimulatedOutcome::Succeed,
        }
    }

    pub fn with_outcome(self, outcome: SimulatedOutcome) -> Self {
        Self { outcome, ..self }
    }
}

impl<S: Scheduler> ContactSubmitter for SimulatedSubmitter<S> {
    async fn submit(&self, _payload: &FormPayload) -> std::result::Result<(), SubmitError> {
        sleep(&self.scheduler, self.delay_ms).await;
        match self.outcome {
            SimulatedOutcome::Succeed => Ok(()),
            SimulatedOutcome::Reject => Err(SubmitError::Rejected("simulated outage".to_string())),
        }
    }
}

/// Where the submit protocol reports back to the page.
pub trait FormFeedback {
    fn notify(&self, kind: ToastKind, message: &str);
    fn clear_form(&self);
}

/// Validate, send, then report. The form is cleared only after a successful send.
pub async fn submit_contact<S, F>(submitter: &S, payload: FormPayload, feedback: &F) -> Result<()>
where
    S: ContactSubmitter,
    F: FormFeedback,
{
    if let Err(err) = validate_payload(&payload) {
        debug!("Contact form rejected, invalid fields: {:?}", err.fields().collect::<Vec<_>>());
        feedback.notify(ToastKind::Error, INVALID_FORM_MESSAGE);
        return Err(err.into());
    }

    debug!("Form data: {:?}", payload);
    match submitter.submit(&payload).await {
        Ok(()) => {
            info!("Contact request sent");
            feedback.notify(ToastKind::Success, SENT_MESSAGE);
            feedback.clear_form();
            Ok(())
        }
        Err(err) => {
            warn!("Contact request failed: {}", err);
            feedback.notify(ToastKind::Error, SEND_FAILED_MESSAGE);
            Err(err.into())
        }
    }
}
