//! Subscription Handshake
//!
//! Meta verifies a webhook URL with `GET ?hub.mode=subscribe&hub.verify_token=..&hub.challenge=..`
//! and expects the challenge echoed back when the token matches.

use super::types::VerifyQuery;

const SUBSCRIBE_MODE: &str = "subscribe";

/// Return the challenge to echo if the handshake is valid.
///
/// Absent parameters compare as empty strings.
pub fn verify_subscription<'a>(query: &'a VerifyQuery, verify_token: &str) -> Option<&'a str> {
    let mode = query.mode.as_deref().unwrap_or_default();
    let token = query.verify_token.as_deref().unwrap_or_default();

    if mode == SUBSCRIBE_MODE && tokens_match(token, verify_token) {
        Some(query.challenge.as_deref().unwrap_or_default())
    } else {
        None
    }
}

/// Constant-time string comparison.
fn tokens_match(given: &str, expected: &str) -> bool {
    given.len() == expected.len()
        && given
            .as_bytes()
            .iter()
            .zip(expected.as_bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
