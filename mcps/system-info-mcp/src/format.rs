//! Tool response formatting
//!
//! A report becomes a single text item: a markdown heading and a fenced JSON
//! block. Keys are projected through the active [`Locale`] on the way out.

use mcp_common::{fenced_json_success, internal_error, CallToolResult, McpError};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::locale::Locale;

/// Render a report as the tool's response
pub fn render_report<T: Serialize>(
    title: &str,
    report: &T,
    locale: Locale,
) -> Result<CallToolResult, McpError> {
    let value = serde_json::to_value(report)
        .map_err(|e| internal_error(format!("Failed to serialize report: {}", e)))?;
    fenced_json_success(title, &localize_keys(value, locale))
}

/// Rename object keys recursively, keeping their order
pub fn localize_keys(value: Value, locale: Locale) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, inner)| {
                    let key = match locale.localize_key(&key) {
                        Some(localized) => localized.to_string(),
                        None => key,
                    };
                    (key, localize_keys(inner, locale))
                })
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| localize_keys(item, locale))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::HardwareFacts;
    use crate::report::normalize_hardware;
    use crate::testing::StubProvider;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.as_str(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    fn fenced_body(text: &str) -> &str {
        let start = text.find("```json\n").unwrap() + "```json\n".len();
        let end = text.rfind("\n```").unwrap();
        &text[start..end]
    }

    fn hardware_facts() -> HardwareFacts {
        let stub = StubProvider::typical();
        HardwareFacts {
            cpu: stub.cpu,
            memory: stub.memory,
            graphics: stub.graphics,
            storage: stub.block_devices,
            system: stub.system,
            battery: stub.battery,
        }
    }

    #[test]
    fn test_render_layout() {
        let data = serde_json::json!({ "memory": { "usageRate": "50.0%" } });
        let result = render_report("System Status", &data, Locale::En).unwrap();
        assert_eq!(
            text_of(&result),
            "# System Status\n\n```json\n{\n  \"memory\": {\n    \"usageRate\": \"50.0%\"\n  }\n}\n```"
        );
    }

    #[test]
    fn test_embedded_json_round_trips() {
        let report = normalize_hardware(&hardware_facts(), Locale::En.labels());
        let result = render_report("Hardware Information", &report, Locale::En).unwrap();

        let text = text_of(&result);
        assert!(text.starts_with("# Hardware Information\n\n"));
        let parsed: Value = serde_json::from_str(fenced_body(text)).unwrap();
        assert_eq!(parsed, serde_json::to_value(&report).unwrap());
    }

    #[test]
    fn test_render_is_byte_stable() {
        let report = normalize_hardware(&hardware_facts(), Locale::En.labels());
        let first = render_report("Hardware Information", &report, Locale::En).unwrap();
        let second = render_report("Hardware Information", &report, Locale::En).unwrap();
        assert_eq!(text_of(&first), text_of(&second));
    }

    #[test]
    fn test_zh_projection_renames_nested_keys_in_order() {
        let value = serde_json::json!({
            "memory": { "totalCapacity": "8GB", "usageRate": "50.0%" },
            "graphics": [ { "vendor": "NVIDIA", "vram": "4096MB" } ],
            "custom": 1
        });

        let localized = localize_keys(value, Locale::Zh);
        let keys: Vec<&str> = localized
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["内存", "显卡", "custom"]);
        assert_eq!(localized["内存"]["总容量"], "8GB");
        assert_eq!(localized["显卡"][0]["显存"], "4096MB");
    }

    #[test]
    fn test_en_projection_is_identity() {
        let report = normalize_hardware(&hardware_facts(), Locale::En.labels());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(localize_keys(value.clone(), Locale::En), value);
    }
}
