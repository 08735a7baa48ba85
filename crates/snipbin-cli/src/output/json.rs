//! JSON output for snippets.

use snipbin_core::input::SnippetView;
use snipbin_core::storage::SnippetSummary;

/// A fetched snippet, optionally with its decrypted text.
pub fn opened_json(view: &SnippetView, plaintext: Option<&str>) -> serde_json::Value {
    let mut value = serde_json::json!({
        "url": view.url,
        "content": view.content,
        "createdAt": view.created_at,
        "burnAt": view.burn_at,
    });
    if let Some(text) = plaintext {
        value["plaintext"] = serde_json::Value::String(text.to_string());
    }
    value
}

/// Visibility listing as a JSON array.
pub fn summaries_json(summaries: &[SnippetSummary]) -> Vec<serde_json::Value> {
    summaries
        .iter()
        .map(|summary| {
            serde_json::json!({
                "url": summary.url,
                "createdAt": summary.created_at,
                "burnAt": summary.burn_at,
            })
        })
        .collect()
}
