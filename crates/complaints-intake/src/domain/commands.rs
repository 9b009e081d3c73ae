//! Commands for the intake context.

use complaints_core::command::Command;
use complaints_core::error::IntakeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

/// The caller-supplied part of a submission. Any other field in the body,
/// identifiers and status included, is ignored. Absent or `null` fields
/// decode as empty strings.
#[derive(Debug, Default, Deserialize)]
struct Submission {
    #[serde(default, deserialize_with = "null_as_empty")]
    submitter: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    category: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Submit a new complaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitComplaint {
    /// Correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Opaque identity of the submitter.
    pub submitter: String,
    /// Free-text body of the complaint.
    pub description: String,
    /// Classification tag.
    pub category: String,
}

impl SubmitComplaint {
    /// Decode a JSON request body into a command.
    ///
    /// Only the first JSON value in the body is read; anything after it is
    /// ignored. A bare `null` is an empty submission.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Client` with the decoder's message if the body is
    /// empty, is not valid JSON, is neither an object nor `null`, or carries a
    /// recognized field with a non-string, non-null value.
    pub fn decode(body: &[u8], correlation_id: Uuid) -> Result<Self, IntakeError> {
        let client = |e: serde_json::Error| IntakeError::Client(e.to_string());

        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
            .ok_or_else(|| IntakeError::Client("request body is empty".into()))?
            .map_err(client)?;

        let submission = match first {
            Value::Null => Submission::default(),
            value @ Value::Object(_) => Submission::deserialize(value).map_err(client)?,
            _ => return Err(IntakeError::Client("expected a JSON object".into())),
        };

        Ok(Self {
            correlation_id,
            submitter: submission.submitter,
            description: submission.description,
            category: submission.category,
        })
    }
}

impl Command for SubmitComplaint {
    fn command_type(&self) -> &'static str {
        "intake.submit_complaint"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
