//! Client print request

use std::borrow::Cow;

use serde_json::Value;

use crate::error::Result;
use crate::format::DEFAULT_FORMAT;

/// Key holding the requested output format.
pub const OUTPUT_FORMAT_KEY: &str = "outputFormat";

/// A loosely-typed print request as sent by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintRequest {
    spec: Value,
}

impl PrintRequest {
    pub fn from_value(spec: Value) -> Self {
        Self { spec }
    }

    /// Parse a request from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_value(serde_json::from_str(json)?))
    }

    /// The requested output format, `pdf` unless the request names one.
    ///
    /// Only a missing or `null` `outputFormat` falls back to the default.
    /// Strings are passed through as sent; other values are read as their
    /// JSON text, so an unusable value is rejected by selection instead of
    /// silently producing PDF.
    pub fn output_format(&self) -> Cow<'_, str> {
        match self.spec.get(OUTPUT_FORMAT_KEY) {
            None | Some(Value::Null) => Cow::Borrowed(DEFAULT_FORMAT),
            Some(Value::String(format)) => Cow::Borrowed(format.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn spec(&self) -> &Value {
        &self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"outputFormat": "png"}), "png")]
    #[case(json!({"outputFormat": " JPEG "}), " JPEG ")]
    #[case(json!({"layout": "A4"}), "pdf")]
    #[case(json!({"outputFormat": null}), "pdf")]
    #[case(json!({"outputFormat": 42}), "42")]
    #[case(json!({"outputFormat": true}), "true")]
    #[case(json!({"outputFormat": ""}), "")]
    #[case(json!({"outputFormat": "  "}), "  ")]
    #[case(json!([1, 2, 3]), "pdf")]
    fn test_output_format(#[case] spec: Value, #[case] expected: &str) {
        assert_eq!(PrintRequest::from_value(spec).output_format(), expected);
    }

    #[test]
    fn test_from_json() {
        let request = PrintRequest::from_json(r#"{"outputFormat":"gif","dpi":300}"#).unwrap();
        assert_eq!(request.output_format(), "gif");
        assert_eq!(request.spec()["dpi"], 300);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = PrintRequest::from_json("{not json").unwrap_err();
        assert!(err.is_user_error());
    }
}
