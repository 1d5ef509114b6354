/// The type of a JSON node.
///
/// This enum represents the different kinds of values that can appear in a
/// JSON document. A node's type is fixed at construction and never changes.
///
/// `Raw` is carried for pre-rendered JSON fragments, but note that the
/// printer currently escapes it exactly like `String` (see [`crate::Printer`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonNodeType {
    /// JSON `null` value.
    Null,
    /// JSON `false` boolean.
    False,
    /// JSON `true` boolean.
    True,
    /// A JSON string value.
    String,
    /// A JSON number value.
    Number,
    /// A JSON object (`{}`).
    Object,
    /// A JSON array (`[]`).
    Array,
    /// A pre-rendered JSON fragment. Printed identically to `String`.
    Raw,
}

/// A single node in a JSON document tree.
///
/// Every node carries the same set of fields; which payloads are meaningful
/// depends on [`JsonNodeType`]. `key` is set only when the node is a member
/// of an object's child list, and is ignored everywhere else. Keys are not
/// checked for uniqueness; duplicate keys are kept in insertion order.
///
/// Container nodes own their children exclusively, so a child belongs to
/// exactly one container and the tree cannot contain cycles.
#[derive(Debug, Clone)]
pub struct JsonNode {
    pub node_type: JsonNodeType,
    pub key: String,
    pub number: f64,
    pub int_value: i64,
    pub text: String,
    pub children: Vec<JsonNode>,
}

impl Default for JsonNode {
    fn default() -> Self {
        Self {
            node_type: JsonNodeType::Null,
            key: String::new(),
            number: 0.0,
            int_value: 0,
            text: String::new(),
            children: Vec::new(),
        }
    }
}

impl JsonNode {
    /// Creates a zero-initialized node of the given type.
    pub fn new(node_type: JsonNodeType) -> Self {
        Self { node_type, ..Self::default() }
    }

    /// Creates a `null` node.
    pub fn null() -> Self {
        Self::new(JsonNodeType::Null)
    }

    /// Creates a `true` or `false` node.
    pub fn bool(value: bool) -> Self {
        Self::new(if value { JsonNodeType::True } else { JsonNodeType::False })
    }

    /// Creates a number node.
    ///
    /// The truncated integer view is derived here by saturating the double
    /// into `i64` range. It is advisory only; the printer always formats
    /// from the double.
    pub fn number(value: f64) -> Self {
        Self {
            node_type: JsonNodeType::Number,
            number: value,
            int_value: value as i64,
            ..Self::default()
        }
    }

    /// Creates a string node.
    pub fn string(text: impl Into<String>) -> Self {
        Self {
            node_type: JsonNodeType::String,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Creates an empty array node.
    pub fn array() -> Self {
        Self::new(JsonNodeType::Array)
    }

    /// Creates an empty object node.
    pub fn object() -> Self {
        Self::new(JsonNodeType::Object)
    }

    /// Appends `item` to the end of this array's children.
    ///
    /// `None` is a silent no-op. Calling this on anything other than an
    /// [`JsonNodeType::Array`] node is a programmer error and panics.
    pub fn push(&mut self, item: impl Into<Option<JsonNode>>) {
        assert_eq!(self.node_type, JsonNodeType::Array, "push requires an array node");
        if let Some(item) = item.into() {
            self.children.push(item);
        }
    }

    /// Appends `value` to this object's children under `key`.
    ///
    /// The key is stored on the child node. `None` is a silent no-op. Keys
    /// are not checked for uniqueness or non-emptiness. Calling this on
    /// anything other than an [`JsonNodeType::Object`] node is a programmer
    /// error and panics.
    pub fn insert(&mut self, key: &str, value: impl Into<Option<JsonNode>>) {
        assert_eq!(self.node_type, JsonNodeType::Object, "insert requires an object node");
        if let Some(mut value) = value.into() {
            value.key = key.to_string();
            self.children.push(value);
        }
    }

    /// Convenience: construct a number node and insert it under `key`.
    pub fn insert_number(&mut self, key: &str, value: f64) {
        self.insert(key, JsonNode::number(value));
    }

    /// Convenience: construct a string node and insert it under `key`.
    pub fn insert_string(&mut self, key: &str, text: &str) {
        self.insert(key, JsonNode::string(text));
    }
}
