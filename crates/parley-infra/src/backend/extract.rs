//! Reply extraction from completion response envelopes.
//!
//! Backends disagree on where the reply text lives. Extraction is a
//! small ordered list of strategies tried in order; the first
//! non-empty string match wins.

use serde_json::Value;

/// Extraction strategies, in precedence order:
///
/// 1. `response` — direct text field
/// 2. `result.response` — nested result envelope
/// 3. `result` — plain result string
/// 4. `choices[0].message.content` — OpenAI-style envelope
const STRATEGIES: [fn(&Value) -> Option<&Value>; 4] = [
    |v| v.get("response"),
    |v| v.get("result")?.get("response"),
    |v| v.get("result"),
    |v| v.get("choices")?.get(0)?.get("message")?.get("content"),
];

/// Pull the reply string out of a response envelope.
///
/// Returns `None` when no known shape yields a non-empty string.
pub fn extract_reply(value: &Value) -> Option<String> {
    STRATEGIES
        .iter()
        .filter_map(|strategy| strategy(value)?.as_str())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
