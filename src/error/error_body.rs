use serde_json::Value as JsonValue;

/// Payload of a failed request, as it was received.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// Raw response text, typically a JSON document that hasn't been parsed yet.
    Text(String),
    /// Already structured payload.
    Json(JsonValue),
}

impl ErrorBody {
    /// Extracts the value of the `error` field, parsing the text payload as a JSON object first.
    pub fn error_message(&self) -> Option<String> {
        match self {
            ErrorBody::Text(text) => serde_json::from_str::<JsonValue>(text)
                .ok()
                .and_then(|json| Self::json_error_message(&json)),
            ErrorBody::Json(json) => Self::json_error_message(json),
        }
    }

    fn json_error_message(json: &JsonValue) -> Option<String> {
        match json.get("error")? {
            JsonValue::Null => None,
            JsonValue::String(message) => Some(message.clone()),
            value => Some(value.to_string()),
        }
    }
}
