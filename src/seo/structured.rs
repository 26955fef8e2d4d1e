//! Structured data extraction: JSON-LD script blocks and microdata itemtypes.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::types::StructuredDataAnalysis;

static JSON_LD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]+type=["']application/ld\+json["'][^>]*>(.*?)</script>"#)
        .expect("JSON-LD pattern must compile")
});
static ITEMTYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)itemtype=["']([^"']*?)["']"#).expect("itemtype pattern must compile")
});

fn push_schema(schemas: &mut Vec<String>, schema: String) {
    if !schema.is_empty() && !schemas.contains(&schema) {
        schemas.push(schema);
    }
}

/// Collects schema type names from JSON-LD blocks and microdata attributes.
///
/// Malformed JSON-LD blocks are skipped. Microdata itemtype URLs contribute
/// their last path segment. The list is deduplicated in discovery order.
pub fn analyze_structured_data(html: &str) -> StructuredDataAnalysis {
    let mut schemas = Vec::new();

    for capture in JSON_LD_RE.captures_iter(html) {
        let Ok(data) = serde_json::from_str::<Value>(&capture[1]) else {
            continue;
        };
        match &data["@type"] {
            Value::String(schema) => push_schema(&mut schemas, schema.clone()),
            Value::Array(types) => {
                for schema in types.iter().filter_map(Value::as_str) {
                    push_schema(&mut schemas, schema.to_string());
                }
            }
            _ => {}
        }
    }

    for capture in ITEMTYPE_RE.captures_iter(html) {
        if let Some(schema) = capture[1].split('/').next_back() {
            push_schema(&mut schemas, schema.to_string());
        }
    }

    let is_present = !schemas.is_empty();
    let mut issues = Vec::new();
    if !is_present {
        issues.push("No structured data found".to_string());
    } else if !schemas.iter().any(|s| s == "Organization" || s == "WebSite") {
        issues.push("Consider adding Organization or WebSite schema".to_string());
    }

    StructuredDataAnalysis {
        schemas,
        is_present,
        is_valid: is_present,
        issues,
    }
}
