//! # jsonsmith
//!
//! An in-memory JSON document model with a compact/pretty printer.
//!
//! jsonsmith builds JSON documents as a tree of typed nodes and renders them
//! to standard JSON text with careful attention to the fiddly parts:
//!
//! - String escaping, including `\u00XX` sequences for control characters
//! - Shortest round-trip number formatting (15 significant digits, falling
//!   back to 17 only when the short form doesn't parse back exactly)
//! - Growable output buffering with a single final allocation view
//! - Two output modes: compact (no whitespace) and pretty (tab-indented
//!   object members; arrays always stay on one line)
//!
//! ## Command-Line Tool
//!
//! This crate includes the `jsmith` CLI tool for reprinting JSON from the
//! terminal:
//!
//! ```sh
//! # Install
//! cargo install jsonsmith
//!
//! # Reprint JSON from stdin (pretty on a terminal, compact when piped)
//! echo '{"a":1,"b":2}' | jsmith
//!
//! # Minify a file
//! jsmith --compact input.json -o output.json
//! ```
//!
//! Run `jsmith --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonsmith::{JsonNode, Printer};
//!
//! let mut doc = JsonNode::object();
//! doc.insert_string("name", "Alice");
//! doc.insert_number("score", 95.5);
//!
//! let mut tags = JsonNode::array();
//! tags.push(JsonNode::string("rust"));
//! tags.push(JsonNode::string("json"));
//! doc.insert("tags", tags);
//!
//! let compact = Printer::compact().print(&doc).unwrap();
//! assert_eq!(compact, r#"{"name":"Alice","score":95.5,"tags":["rust","json"]}"#);
//! ```
//!
//! ## Pretty Output
//!
//! Pretty mode indents object members with one tab per nesting level and
//! separates each member's colon from its value with a tab; arrays keep a
//! single line with `, ` separators regardless of depth:
//!
//! ```rust
//! use jsonsmith::{JsonNode, Printer};
//!
//! let mut doc = JsonNode::object();
//! doc.insert_number("a", 1.0);
//!
//! let pretty = Printer::pretty().print(&doc).unwrap();
//! assert_eq!(pretty, "{\n\t\"a\":\t1\n}");
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be brought into the model
//! through [`dom_from_serialize`], and parsed JSON arrives through
//! [`dom_from_value`] from a [`serde_json::Value`]:
//!
//! ```rust
//! use jsonsmith::{dom_from_serialize, print_compact, DEFAULT_RECURSION_LIMIT};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let doc = dom_from_serialize(&player, DEFAULT_RECURSION_LIMIT).unwrap();
//! assert_eq!(
//!     print_compact(&doc).unwrap(),
//!     r#"{"name":"Alice","scores":[95,87,92]}"#
//! );
//! ```

mod buffer;
mod convert;
mod error;
mod model;
mod printer;

pub use crate::buffer::WriteBuffer;
pub use crate::convert::{dom_from_serialize, dom_from_value, DEFAULT_RECURSION_LIMIT};
pub use crate::error::JsonSmithError;
pub use crate::model::{JsonNode, JsonNodeType};
pub use crate::printer::{print_compact, print_pretty, Printer};
