//! Table, key/value, and JSON rendering for console commands.
//!
//! List commands render rows through `tabled`; detail commands render the
//! record's fields as aligned key/value lines, with nested structures
//! (addresses, line items, personalizations) shown as indented JSON so an
//! order or book detail stays readable without a 200-column terminal.

use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

fn print_json<T: Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{}", json);
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(&items),
    }
}

/// Print a single record in the selected format.
///
/// Table mode renders one `key: value` line per field; nested objects and
/// arrays are pretty-printed JSON indented under their key. Arrays at the
/// top level print each element as its own block.
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(item),
        OutputFormat::Table => {
            let value = serde_json::to_value(item).unwrap_or(Value::Null);
            print!("{}", render_value(&value));
        }
    }
}

/// Render a record as aligned key/value lines.
fn render_value(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Object(fields) => {
            for (key, field) in fields {
                match field {
                    Value::Null => out.push_str(&kv_line(key, "-")),
                    Value::String(s) => out.push_str(&kv_line(key, s)),
                    Value::Bool(_) | Value::Number(_) => {
                        out.push_str(&kv_line(key, &field.to_string()))
                    }
                    nested => {
                        let json = serde_json::to_string_pretty(nested)
                            .unwrap_or_else(|_| "null".to_string());
                        out.push_str(&kv_line(key, ""));
                        for line in json.lines() {
                            out.push_str(&format!("    {}\n", line));
                        }
                    }
                }
            }
        }
        Value::Array(elements) => {
            if elements.is_empty() {
                out.push_str("No results found.\n");
            }
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&render_value(element));
            }
        }
        other => out.push_str(&format!("{}\n", other)),
    }
    out
}

fn kv_line(key: &str, value: &str) -> String {
    format!("  {:<24} {}\n", format!("{}:", key), value)
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_fields_become_kv_lines() {
        let value = serde_json::json!({
            "orderNumber": "SN-1001",
            "total": 82.5,
            "trackingNumber": null,
            "paid": true
        });
        let rendered = render_value(&value);
        assert!(rendered.contains("orderNumber:"));
        assert!(rendered.contains("SN-1001"));
        assert!(rendered.contains("82.5"));
        assert!(rendered.contains("true"));
        // Null renders as a dash, not the word "null".
        let tracking_line = rendered
            .lines()
            .find(|l| l.contains("trackingNumber"))
            .unwrap();
        assert!(tracking_line.trim_end().ends_with('-'));
    }

    #[test]
    fn test_nested_records_are_indented_json() {
        let value = serde_json::json!({
            "shippingAddress": { "city": "Lisbon" }
        });
        let rendered = render_value(&value);
        assert!(rendered.contains("shippingAddress:"));
        assert!(rendered.contains("    {"));
        assert!(rendered.contains("Lisbon"));
    }

    #[test]
    fn test_top_level_array_renders_each_element() {
        let value = serde_json::json!([
            { "id": "p-1" },
            { "id": "p-2" }
        ]);
        let rendered = render_value(&value);
        assert!(rendered.contains("p-1"));
        assert!(rendered.contains("p-2"));

        let empty = serde_json::json!([]);
        assert!(render_value(&empty).contains("No results found."));
    }
}
