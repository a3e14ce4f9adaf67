use crate::{Result, ScarletSharkError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const fn default_result_code() -> i64 {
    -1
}

/// Standard JSON wrapper around every Scarlet Shark response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Negative on failure; treated as `-1` when missing
    #[serde(default = "default_result_code")]
    pub result_code: i64,

    /// Payload on success, `{ "message": ... }` on failure
    #[serde(default)]
    pub result: Value,
}

impl ResultEnvelope {
    /// Returns true if the result code signals success
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result_code >= 0
    }

    /// Error message carried by a failed envelope
    ///
    /// Falls back to the serialized `result` when it has no `message` string.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.result
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| self.result.to_string(), String::from)
    }

    /// Unwrap the payload, or fail with [`ScarletSharkError::Api`]
    pub fn into_result(self) -> Result<Value> {
        if self.is_success() {
            Ok(self.result)
        } else {
            Err(ScarletSharkError::Api {
                message: self.error_message(),
            })
        }
    }
}
