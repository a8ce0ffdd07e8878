use serde_json::{json, Value};

use super::constants::MOCK_ENCODED_MESSAGE;

/// Panics if `text` does not contain `pattern`
pub fn assert_contains(text: &str, pattern: &str) {
    if !text.contains(pattern) {
        panic!(
            "Failed content assertion!
    Pattern: '{pattern}'
    not present in
    Text: '{text}'"
        );
    }
}

/// Result body of a scripted `abi.encode_message` reply
pub fn encode_result(address: &str) -> Value {
    json!({ "address": address, "message": MOCK_ENCODED_MESSAGE })
}

/// Result body of a scripted `processing.process_message` reply
pub fn process_result() -> Value {
    json!({
        "transaction": {
            "id": "9a33f7da63b04d5ba408a4d16c39d2d94c2f35c78c6c796a47bde16c27f33073",
            "aborted": false,
        },
        "out_messages": [],
    })
}
