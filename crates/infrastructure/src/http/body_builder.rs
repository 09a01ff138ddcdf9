//! Form body builder.
//!
//! Encodes domain `FormFields` as an `application/x-www-form-urlencoded`
//! body, keeping field order.

use formprobe_application::FormClientError;
use formprobe_domain::FormFields;

/// Content type of an encoded form body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encode form fields into a request body.
///
/// # Errors
///
/// Returns [`FormClientError::InvalidBody`] if the fields cannot be encoded.
pub fn encode_form(fields: &FormFields) -> Result<String, FormClientError> {
    serde_urlencoded::to_string(fields.pairs())
        .map_err(|e| FormClientError::InvalidBody(e.to_string()))
}
