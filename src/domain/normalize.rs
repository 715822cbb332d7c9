//! Field normalization for the raw data records: picking one display string
//! out of multi-language name fields, prettifying item ids, and probing the
//! assorted quantity keys the data repo uses.

use serde_json::Value;

use super::entities::NameField;

/// Shown whenever a record carries no usable name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Preferred language for localized name fields.
const PREFERRED_LANG: &str = "en";

/// Quantity key aliases seen across the data repo, in priority order.
pub const QUANTITY_KEYS: [&str; 5] = ["quantity", "count", "qty", "amount", "requiredCount"];

/// Resolves a name field to one display string. Localized maps prefer the
/// "en" entry, then any string value; everything else becomes "Unknown".
pub fn pick_display_name(field: &NameField) -> String {
    match field {
        NameField::Plain(name) => name.clone(),
        NameField::Localized(map) => {
            if let Some(Value::String(name)) = map.get(PREFERRED_LANG) {
                return name.clone();
            }
            map.values()
                .find_map(|value| value.as_str().map(str::to_string))
                .unwrap_or_else(|| UNKNOWN_NAME.to_string())
        }
        NameField::Other(_) => UNKNOWN_NAME.to_string(),
    }
}

/// Turns an item id like "metal_parts" into "Metal Parts". Ids without any
/// underscore-delimited tokens come back unchanged.
pub fn pretty_from_item_id(item_id: &str) -> String {
    let parts: Vec<String> = item_id
        .split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect();
    if parts.is_empty() {
        item_id.to_string()
    } else {
        parts.join(" ")
    }
}

/// Title-cases a free-text query: each whitespace-separated word gets
/// capitalized, runs of whitespace collapse to single spaces.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First char uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Probes the quantity aliases in priority order and returns the first value
/// that converts to a positive integer. Accepts JSON integers, floats
/// (truncated), and numeric strings; anything else falls through. Defaults
/// to 1 so a requirement without a usable count still registers once.
pub fn extract_quantity(fields: &serde_json::Map<String, Value>) -> u32 {
    for key in QUANTITY_KEYS {
        if let Some(value) = fields.get(key) {
            if let Some(qty) = to_positive_int(value) {
                return qty;
            }
        }
    }
    1
}

fn to_positive_int(value: &Value) -> Option<u32> {
    let converted = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float.trunc() as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    converted.and_then(|int| u32::try_from(int).ok().filter(|qty| *qty > 0))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn localized(value: Value) -> NameField {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn display_name_prefers_en() {
        let field = localized(json!({"de": "Werkbank", "en": "Workbench"}));
        assert_eq!(pick_display_name(&field), "Workbench");
    }

    #[test]
    fn display_name_falls_back_to_any_string() {
        let field = localized(json!({"de": "Werkbank", "en": 7}));
        assert_eq!(pick_display_name(&field), "Werkbank");
    }

    #[test]
    fn display_name_defaults_to_unknown() {
        assert_eq!(pick_display_name(&localized(json!({"en": 7}))), "Unknown");
        assert_eq!(pick_display_name(&localized(json!(42))), "Unknown");
    }

    #[test]
    fn plain_names_pass_through() {
        let field = localized(json!("Scrappy"));
        assert_eq!(pick_display_name(&field), "Scrappy");
    }

    #[test]
    fn pretty_splits_and_capitalizes() {
        assert_eq!(pretty_from_item_id("metal_parts"), "Metal Parts");
        assert_eq!(pretty_from_item_id("ARC_alloy"), "Arc Alloy");
        assert_eq!(pretty_from_item_id("__wires__"), "Wires");
    }

    #[test]
    fn pretty_keeps_tokenless_ids() {
        assert_eq!(pretty_from_item_id("___"), "___");
        assert_eq!(pretty_from_item_id(""), "");
    }

    #[test]
    fn title_case_collapses_whitespace() {
        assert_eq!(title_case("  scrap   METAL "), "Scrap Metal");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn quantity_probes_aliases_in_order() {
        let fields = json!({"count": 3, "quantity": 5});
        let Value::Object(fields) = fields else { unreachable!() };
        assert_eq!(extract_quantity(&fields), 5);
    }

    #[test]
    fn quantity_accepts_strings_and_floats() {
        let fields = json!({"qty": " 4 "});
        let Value::Object(fields) = fields else { unreachable!() };
        assert_eq!(extract_quantity(&fields), 4);

        let fields = json!({"amount": 2.9});
        let Value::Object(fields) = fields else { unreachable!() };
        assert_eq!(extract_quantity(&fields), 2);
    }

    #[test]
    fn quantity_skips_unusable_values_and_defaults() {
        let fields = json!({"quantity": "lots", "requiredCount": 6});
        let Value::Object(fields) = fields else { unreachable!() };
        assert_eq!(extract_quantity(&fields), 6);

        let fields = json!({"quantity": null});
        let Value::Object(fields) = fields else { unreachable!() };
        assert_eq!(extract_quantity(&fields), 1);

        let fields = json!({});
        let Value::Object(fields) = fields else { unreachable!() };
        assert_eq!(extract_quantity(&fields), 1);
    }
}
