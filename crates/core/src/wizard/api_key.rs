//! API key generation wizard

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Steps of the key generation flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeyStep {
    #[default]
    SelectScopes,
    Generating,
    /// The secret is shown exactly once on this step.
    Reveal,
    Done,
}

/// Serializable wizard state
///
/// `BTreeSet` keeps scope order stable so serialized drafts compare
/// equal across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyWizardDoc {
    pub step: ApiKeyStep,
    pub label: String,
    pub scopes: BTreeSet<String>,
    pub key_id: Option<Uuid>,
    /// One-time secret; cleared on acknowledge.
    pub secret_once: Option<String>,
    pub error: Option<String>,
    /// Why the last action was rejected, if it was.
    pub validation: Option<String>,
}

/// Actions the UI can feed into the reducer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum ApiKeyAction {
    SetLabel { label: String },
    ToggleScope { scope: String },
    Submit,
    GenerationSucceeded { key_id: Uuid, secret_once: String },
    GenerationFailed { message: String },
    Acknowledge,
    Reset,
}

/// Apply one action to the document
pub fn reduce(doc: &ApiKeyWizardDoc, action: ApiKeyAction) -> ApiKeyWizardDoc {
    let mut next = doc.clone();
    next.validation = None;

    match (doc.step, action) {
        (_, ApiKeyAction::Reset) => ApiKeyWizardDoc::default(),

        (ApiKeyStep::SelectScopes, ApiKeyAction::SetLabel { label }) => {
            next.label = label;
            next
        }
        (ApiKeyStep::SelectScopes, ApiKeyAction::ToggleScope { scope }) => {
            if !next.scopes.remove(&scope) {
                next.scopes.insert(scope);
            }
            next
        }
        (ApiKeyStep::SelectScopes, ApiKeyAction::Submit) => {
            if next.scopes.is_empty() {
                next.validation = Some("select at least one scope".to_string());
            } else if next.label.trim().is_empty() {
                next.validation = Some("label must not be empty".to_string());
            } else {
                next.step = ApiKeyStep::Generating;
                next.error = None;
            }
            next
        }

        (ApiKeyStep::Generating, ApiKeyAction::GenerationSucceeded { key_id, secret_once }) => {
            next.step = ApiKeyStep::Reveal;
            next.key_id = Some(key_id);
            next.secret_once = Some(secret_once);
            next
        }
        (ApiKeyStep::Generating, ApiKeyAction::GenerationFailed { message }) => {
            next.step = ApiKeyStep::SelectScopes;
            next.error = Some(message);
            next
        }

        (ApiKeyStep::Reveal, ApiKeyAction::Acknowledge) => {
            next.step = ApiKeyStep::Done;
            // The secret must not survive past the reveal step.
            next.secret_once = None;
            next
        }

        (step, rejected) => {
            debug!(?step, ?rejected, "api key wizard action not legal in this step");
            next.validation = Some(format!("action not available in step {step:?}"));
            next
        }
    }
}
