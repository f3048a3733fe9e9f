//! Environment construction for sandboxed child processes (§4.5): a small
//! base plus whatever the caller passes through, minus anything that
//! looks like a credential.

use std::collections::HashMap;

/// Substrings that, if present anywhere in a variable name
/// (case-insensitively), cause it to be dropped from the sandboxed
/// environment.
const BLOCKED_SUBSTRINGS: &[&str] = &[
    "TOKEN", "SECRET", "PASSWORD", "PASSWD", "API_KEY", "APIKEY", "PRIVATE_KEY", "CREDENTIAL", "AWS_SESSION", "AWS_SECRET", "SSH_AUTH_SOCK",
];

/// Variables always carried through regardless of the blocklist.
const ALWAYS_ALLOWED: &[&str] = &["PATH", "HOME", "LANG", "LC_ALL", "TMPDIR", "TZ", "USER", "SHELL"];

/// Builds the environment map a sandboxed process should see: `base`
/// filtered through the credential blocklist.
pub fn build_sandboxed_env(base: impl IntoIterator<Item = (String, String)>) -> HashMap<String, String> {
    base.into_iter().filter(|(key, _)| is_allowed(key)).collect()
}

fn is_allowed(key: &str) -> bool {
    let upper = key.to_ascii_uppercase();
    if ALWAYS_ALLOWED.contains(&upper.as_str()) {
        return true;
    }
    !BLOCKED_SUBSTRINGS.iter().any(|blocked| upper.contains(blocked))
}

#[cfg(test)]
#[path = "env.test.rs"]
mod tests;
