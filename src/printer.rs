use crate::buffer::WriteBuffer;
use crate::error::JsonSmithError;
use crate::model::{JsonNode, JsonNodeType};

const INITIAL_CAPACITY: usize = 256;
const MAX_PRINT_DEPTH: usize = 300;

/// Renders a [`JsonNode`] tree to JSON text.
///
/// Two modes share one recursive algorithm:
///
/// - [`Printer::compact`] emits no whitespace at all: `{"a":1,"b":[1,2]}`.
/// - [`Printer::pretty`] indents object members with one tab per nesting
///   level, puts a newline after every member, and separates a member's
///   colon from its value with a literal tab. Arrays stay on a single line
///   in both modes; pretty mode only adds a space after each comma.
///
/// # Example
///
/// ```rust
/// use jsonsmith::{JsonNode, Printer};
///
/// let mut doc = JsonNode::object();
/// doc.insert_number("a", 1.0);
///
/// let text = Printer::compact().print(&doc).unwrap();
/// assert_eq!(text, "{\"a\":1}");
/// ```
pub struct Printer {
    format: bool,
    depth: usize,
    buf: WriteBuffer,
}

impl Printer {
    /// Creates a printer producing indented output.
    pub fn pretty() -> Self {
        Self::with_format(true)
    }

    /// Creates a printer producing compact output.
    pub fn compact() -> Self {
        Self::with_format(false)
    }

    fn with_format(format: bool) -> Self {
        Self {
            format,
            depth: 0,
            buf: WriteBuffer::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Renders `root` and returns the finished text.
    ///
    /// Fails if the output would exceed the maximum document size or the
    /// tree nests deeper than the recursion limit; no partial output is
    /// returned in that case.
    pub fn print(mut self, root: &JsonNode) -> Result<String, JsonSmithError> {
        self.print_value(root)?;
        debug_assert_eq!(self.depth, 0, "unbalanced recursion while printing");
        Ok(self.buf.into_string())
    }

    fn print_value(&mut self, node: &JsonNode) -> Result<(), JsonSmithError> {
        match node.node_type {
            JsonNodeType::Null => self.buf.push_str("null"),
            JsonNodeType::False => self.buf.push_str("false"),
            JsonNodeType::True => self.buf.push_str("true"),
            JsonNodeType::Number => self.print_number(node.number),
            JsonNodeType::String | JsonNodeType::Raw => self.print_string(&node.text),
            JsonNodeType::Array => self.print_array(node),
            JsonNodeType::Object => self.print_object(node),
        }
    }

    fn print_object(&mut self, node: &JsonNode) -> Result<(), JsonSmithError> {
        self.descend()?;
        self.buf.push_char('{')?;
        if self.format {
            self.buf.push_char('\n')?;
        }

        let mut members = node.children.iter().peekable();
        while let Some(child) = members.next() {
            if self.format {
                self.indent(self.depth)?;
            }
            self.print_string(&child.key)?;
            self.buf.push_char(':')?;
            if self.format {
                self.buf.push_char('\t')?;
            }
            self.print_value(child)?;
            if members.peek().is_some() {
                self.buf.push_char(',')?;
            }
            if self.format {
                self.buf.push_char('\n')?;
            }
        }

        if self.format {
            self.indent(self.depth - 1)?;
        }
        self.buf.push_char('}')?;
        self.depth -= 1;
        Ok(())
    }

    fn print_array(&mut self, node: &JsonNode) -> Result<(), JsonSmithError> {
        self.descend()?;
        self.buf.push_char('[')?;

        let mut items = node.children.iter().peekable();
        while let Some(child) = items.next() {
            self.print_value(child)?;
            if items.peek().is_some() {
                self.buf.push_char(',')?;
                if self.format {
                    self.buf.push_char(' ')?;
                }
            }
        }

        self.buf.push_char(']')?;
        self.depth -= 1;
        Ok(())
    }

    fn print_string(&mut self, text: &str) -> Result<(), JsonSmithError> {
        if text.is_empty() {
            return self.buf.push_str("\"\"");
        }

        self.buf.push_char('"')?;
        for c in text.chars() {
            if c as u32 > 31 && c != '"' && c != '\\' {
                self.buf.push_char(c)?;
                continue;
            }

            self.buf.push_char('\\')?;
            match c {
                '"' | '\\' => self.buf.push_char(c)?,
                '\u{8}' => self.buf.push_char('b')?,
                '\u{c}' => self.buf.push_char('f')?,
                '\n' => self.buf.push_char('n')?,
                '\r' => self.buf.push_char('r')?,
                '\t' => self.buf.push_char('t')?,
                _ => self.buf.push_str(&format!("u{:04x}", c as u32))?,
            }
        }
        self.buf.push_char('"')
    }

    fn print_number(&mut self, value: f64) -> Result<(), JsonSmithError> {
        if !value.is_finite() {
            return self.buf.push_str("null");
        }

        // 15 significant digits are enough for most doubles; fall back to 17
        // (the guaranteed-exact count) when the short form does not parse
        // back to the identical value.
        let short = format_significant(value, 15);
        let round_trips = short.parse::<f64>().map_or(false, |parsed| parsed == value);
        if round_trips {
            self.buf.push_str(&short)
        } else {
            self.buf.push_str(&format_significant(value, 17))
        }
    }

    fn descend(&mut self) -> Result<(), JsonSmithError> {
        if self.depth >= MAX_PRINT_DEPTH {
            return Err(JsonSmithError::new(
                "Depth limit exceeded - possible circular reference",
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn indent(&mut self, levels: usize) -> Result<(), JsonSmithError> {
        for _ in 0..levels {
            self.buf.push_char('\t')?;
        }
        Ok(())
    }
}

/// Renders `root` as indented JSON text.
pub fn print_pretty(root: &JsonNode) -> Result<String, JsonSmithError> {
    Printer::pretty().print(root)
}

/// Renders `root` as compact JSON text.
pub fn print_compact(root: &JsonNode) -> Result<String, JsonSmithError> {
    Printer::compact().print(root)
}

// Formats `value` with the given number of significant decimal digits,
// choosing fixed or exponential notation the way printf's %g does and
// dropping trailing fractional zeros.
fn format_significant(value: f64, digits: usize) -> String {
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        format!("{}e{}", trim_fraction(mantissa), exponent)
    } else {
        let fraction_digits = digits as i32 - 1 - exponent;
        if fraction_digits > 0 {
            trim_fraction(&format!("{:.*}", fraction_digits as usize, value)).to_string()
        } else {
            format!("{value:.0}")
        }
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
