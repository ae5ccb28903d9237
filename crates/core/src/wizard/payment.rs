//! Payment gateway setup wizard

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Steps of the payment gateway setup flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStep {
    #[default]
    ChooseProvider,
    EnterCredentials,
    Verifying,
    Connected,
    Failed,
}

/// Serializable wizard state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentWizardDoc {
    pub step: PaymentStep,
    pub provider: Option<String>,
    /// Credential fields entered so far, keyed by field name.
    pub fields: BTreeMap<String, String>,
    pub error: Option<String>,
    /// Why the last action was rejected, if it was.
    pub validation: Option<String>,
}

/// Actions the UI can feed into the reducer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum PaymentAction {
    SelectProvider { provider: String },
    SetCredentialField { name: String, value: String },
    Submit,
    VerificationSucceeded,
    VerificationFailed { message: String },
    Retry,
    Reset,
}

/// Credential fields a provider requires before `Submit` is legal.
pub fn required_fields(provider: &str) -> &'static [&'static str] {
    match provider {
        "stripe" => &["publishable_key", "secret_key"],
        "paypal" => &["client_id", "client_secret"],
        "square" => &["access_token", "location_id"],
        _ => &["api_key"],
    }
}

/// Apply one action to the document
pub fn reduce(doc: &PaymentWizardDoc, action: PaymentAction) -> PaymentWizardDoc {
    let mut next = doc.clone();
    next.validation = None;

    match (doc.step, action) {
        (_, PaymentAction::Reset) => PaymentWizardDoc::default(),

        (PaymentStep::ChooseProvider, PaymentAction::SelectProvider { provider }) => {
            next.provider = Some(provider);
            next.fields.clear();
            next.step = PaymentStep::EnterCredentials;
            next
        }

        (PaymentStep::EnterCredentials, PaymentAction::SetCredentialField { name, value }) => {
            next.fields.insert(name, value);
            next
        }
        (PaymentStep::EnterCredentials, PaymentAction::Submit) => {
            let missing = missing_fields(&next);
            if missing.is_empty() {
                next.step = PaymentStep::Verifying;
                next.error = None;
            } else {
                next.validation = Some(format!("missing fields: {}", missing.join(", ")));
            }
            next
        }

        (PaymentStep::Verifying, PaymentAction::VerificationSucceeded) => {
            next.step = PaymentStep::Connected;
            next
        }
        (PaymentStep::Verifying, PaymentAction::VerificationFailed { message }) => {
            next.step = PaymentStep::Failed;
            next.error = Some(message);
            next
        }

        // Back to the form with fields intact so the user can correct them.
        (PaymentStep::Failed, PaymentAction::Retry) => {
            next.step = PaymentStep::EnterCredentials;
            next.error = None;
            next
        }

        (step, rejected) => {
            debug!(?step, ?rejected, "payment wizard action not legal in this step");
            next.validation = Some(format!("action not available in step {step:?}"));
            next
        }
    }
}

fn missing_fields(doc: &PaymentWizardDoc) -> Vec<&'static str> {
    let provider = doc.provider.as_deref().unwrap_or_default();
    required_fields(provider)
        .iter()
        .filter(|name| doc.fields.get(**name).map_or(true, |v| v.trim().is_empty()))
        .copied()
        .collect()
}
