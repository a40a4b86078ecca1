//! Submission receipt shared by the built-in providers

use repohub_domain::error::{Error, Result};
use repohub_domain::ports::Payload;
use serde_json::json;

/// Build the result mapping returned by a successful submission
///
/// Fails with an authentication error when the credential is empty.
pub(crate) fn submission_receipt(
    provider: &str,
    endpoint: &str,
    token: &str,
    payload: Payload,
) -> Result<Payload> {
    if token.is_empty() {
        return Err(Error::authentication(format!(
            "{provider} credential is empty"
        )));
    }

    let mut receipt = Payload::new();
    receipt.insert("provider".into(), json!(provider));
    receipt.insert("endpoint".into(), json!(endpoint));
    receipt.insert("accepted".into(), json!(true));
    receipt.insert("fields".into(), json!(payload.len()));
    receipt.insert("payload".into(), serde_json::Value::Object(payload));
    Ok(receipt)
}
