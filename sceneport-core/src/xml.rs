//! Streaming markup writer
//!
//! A thin structural layer over a raw byte sink. Element and attribute names
//! come from a fixed external schema, so the writer stays deliberately
//! low-level: explicit start/end calls, a stack for well-formedness checks,
//! and typed value formatting that matches the engine's numeric conventions.

use crate::errors::ExportError;
use std::borrow::Cow;
use std::io::Write;

/// Streaming XML writer over any byte sink
///
/// Start tags are held open until the first child or the matching end call so
/// that childless elements can be emitted self-closing. Destination
/// whitespace (indentation, newlines) is written explicitly by the caller;
/// the engine's loader is whitespace-sensitive only in that it expects the
/// canonical layout produced here.
pub struct XmlWriter<W: Write> {
    out: W,
    stack: Vec<String>,
    tag_open: bool,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            stack: Vec::new(),
            tag_open: false,
        }
    }

    /// Open an element; it stays self-closable until content is written
    pub fn start_element(&mut self, name: &str) -> Result<(), ExportError> {
        self.close_pending_tag()?;
        write!(self.out, "<{}", name)?;
        self.stack.push(name.to_string());
        self.tag_open = true;
        Ok(())
    }

    /// Write an attribute on the currently open start tag
    pub fn attribute(&mut self, name: &str, value: &str) -> Result<(), ExportError> {
        if !self.tag_open {
            return Err(ExportError::MarkupState(format!(
                "attribute '{}' written outside a start tag",
                name
            )));
        }
        write!(self.out, " {}=\"{}\"", name, escape(value))?;
        Ok(())
    }

    /// Close the innermost element, self-closing it when it has no content
    pub fn end_element(&mut self) -> Result<(), ExportError> {
        let name = self
            .stack
            .pop()
            .ok_or_else(|| ExportError::MarkupState("end_element with no open element".into()))?;
        if self.tag_open {
            self.out.write_all(b" />")?;
            self.tag_open = false;
        } else {
            write!(self.out, "</{}>", name)?;
        }
        Ok(())
    }

    /// Write literal inter-element whitespace (indentation, newlines)
    pub fn whitespace(&mut self, ws: &str) -> Result<(), ExportError> {
        self.close_pending_tag()?;
        self.out.write_all(ws.as_bytes())?;
        Ok(())
    }

    /// Flush and return the underlying sink; fails if elements remain open
    pub fn finish(mut self) -> Result<W, ExportError> {
        if !self.stack.is_empty() {
            return Err(ExportError::MarkupState(format!(
                "document finished with {} unclosed element(s)",
                self.stack.len()
            )));
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn close_pending_tag(&mut self) -> Result<(), ExportError> {
        if self.tag_open {
            self.out.write_all(b">")?;
            self.tag_open = false;
        }
        Ok(())
    }

    // -- Schema-shaped helpers ----------------------------------------------

    /// Emit `{indent}<attribute name="..." value="..." />\n`
    pub fn attribute_element(
        &mut self,
        indent: &str,
        name: &str,
        value: &str,
    ) -> Result<(), ExportError> {
        self.whitespace(indent)?;
        self.start_element("attribute")?;
        self.attribute("name", name)?;
        self.attribute("value", value)?;
        self.end_element()?;
        self.whitespace("\n")
    }

    /// Open `{indent}<component type="...">` on its own line
    pub fn start_component(&mut self, indent: &str, type_name: &str) -> Result<(), ExportError> {
        self.whitespace(indent)?;
        self.start_element("component")?;
        self.attribute("type", type_name)
    }

    /// Close the current element on its own line at the given indent
    ///
    /// Self-closing elements carry no inner whitespace, so the indent is only
    /// written when the element actually has content.
    pub fn end_element_line(&mut self, indent: &str) -> Result<(), ExportError> {
        if !self.tag_open {
            self.whitespace(indent)?;
        }
        self.end_element()?;
        self.whitespace("\n")
    }
}

/// Escape a value for use in an attribute
fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

// -- Typed value formatting -------------------------------------------------
//
// The engine parses attribute values with invariant-culture float parsing;
// Rust's shortest-round-trip Display matches what its own serializer emits.

/// Format a float the way the engine serializes it
pub fn format_float(value: f32) -> String {
    format!("{}", value)
}

/// Format a 3-component vector as `x y z`
pub fn format_vec3(value: [f32; 3]) -> String {
    format!("{} {} {}", value[0], value[1], value[2])
}

/// Format a host-order quaternion (x, y, z, w) in engine order `w x y z`
pub fn format_quaternion(value: [f32; 4]) -> String {
    format!("{} {} {} {}", value[3], value[0], value[1], value[2])
}

/// Format an RGB color as `r g b a` with full opacity
pub fn format_color(value: [f32; 3]) -> String {
    format!("{} {} {} 1", value[0], value[1], value[2])
}

/// Format a boolean as the engine's lowercase literals
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
