use crate::error::JsonSmithError;
use crate::model::JsonNode;

/// Recursion limit used by the CLI and suitable for most callers.
pub const DEFAULT_RECURSION_LIMIT: usize = 300;

pub fn dom_from_value(
    element: &serde_json::Value,
    recursion_limit: usize,
) -> Result<JsonNode, JsonSmithError> {
    if recursion_limit == 0 {
        return Err(JsonSmithError::new(
            "Depth limit exceeded - possible circular reference",
        ));
    }

    match element {
        serde_json::Value::Null => Ok(JsonNode::null()),
        serde_json::Value::Bool(val) => Ok(JsonNode::bool(*val)),
        serde_json::Value::Number(num) => {
            Ok(JsonNode::number(num.as_f64().unwrap_or(f64::NAN)))
        }
        serde_json::Value::String(val) => Ok(JsonNode::string(val.as_str())),
        serde_json::Value::Array(arr) => {
            let mut node = JsonNode::array();
            for child in arr {
                node.push(dom_from_value(child, recursion_limit - 1)?);
            }
            Ok(node)
        }
        serde_json::Value::Object(map) => {
            let mut node = JsonNode::object();
            for (key, value) in map.iter() {
                node.insert(key, dom_from_value(value, recursion_limit - 1)?);
            }
            Ok(node)
        }
    }
}

pub fn dom_from_serialize<T: serde::Serialize>(
    value: &T,
    recursion_limit: usize,
) -> Result<JsonNode, JsonSmithError> {
    let element = serde_json::to_value(value)
        .map_err(|e| JsonSmithError::new(format!("cannot serialize value: {}", e)))?;
    dom_from_value(&element, recursion_limit)
}
