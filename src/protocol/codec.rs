//! Wire codec: OFX text ⇄ element tree
//!
//! Serialization emits the fixed OFX 103 plaintext header followed by the
//! depth-first rendering of the tree. The format's defining quirk is kept
//! faithfully: container elements are always closed, leaf elements never
//! are. Emission is canonical — one element per line, two spaces of indent
//! per depth, `\n` line endings — so a reply in canonical form survives a
//! deserialize/serialize round trip byte for byte, header included.
//!
//! Deserialization locates the `<OFX>` root (case-insensitive; the header
//! before it is discarded, not validated) and runs a stack-based scan.
//! Because closing tags for leaves are never present, the scanner cannot
//! decide container-vs-leaf from the text alone; it consults the schema
//! catalogue for every opening tag. A tag outside the vocabulary is fatal.
//! The whole body is held in memory — message bodies are bounded, there is
//! no streaming mode.

use crate::protocol::schema::{self, TagKind};
use crate::protocol::tree::OfxElement;
use crate::types::OfxError;

/// Fixed OFX 1.0.3 header: nine key:value lines and a blank separator line
///
/// Emitted verbatim before every request body. Security and compression are
/// always `NONE`; both file UID fields are empty (`NONE`).
pub const OFX_103_HEADER: &str = "OFXHEADER:100\n\
DATA:OFXSGML\n\
VERSION:103\n\
SECURITY:NONE\n\
ENCODING:USASCII\n\
CHARSET:1252\n\
COMPRESSION:NONE\n\
OLDFILEUID:NONE\n\
NEWFILEUID:NONE\n\
\n";

const INDENT: &str = "  ";

/// Render an element tree as wire text, header included
///
/// # Errors
///
/// Returns [`OfxError::Serialization`] if any node carries a tag outside
/// the schema vocabulary, or a node whose shape (leaf vs. container)
/// contradicts the schema. Nothing is returned on failure — callers never
/// see a partial body.
pub fn serialize(root: &OfxElement) -> Result<String, OfxError> {
    let mut out = String::with_capacity(OFX_103_HEADER.len() + 512);
    out.push_str(OFX_103_HEADER);
    write_element(root, 0, &mut out)?;
    Ok(out)
}

fn write_element(element: &OfxElement, depth: usize, out: &mut String) -> Result<(), OfxError> {
    let kind = schema::kind_of(element.tag()).ok_or_else(|| {
        OfxError::serialization(format!("unknown tag <{}>", element.tag()))
    })?;

    for _ in 0..depth {
        out.push_str(INDENT);
    }

    match (element, kind) {
        (OfxElement::Leaf { tag, value }, TagKind::Leaf) => {
            out.push('<');
            out.push_str(tag);
            out.push('>');
            out.push_str(value);
            out.push('\n');
        }
        (OfxElement::Container { tag, children }, TagKind::Container) => {
            out.push('<');
            out.push_str(tag);
            out.push_str(">\n");
            for child in children {
                write_element(child, depth + 1, out)?;
            }
            for _ in 0..depth {
                out.push_str(INDENT);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push_str(">\n");
        }
        (OfxElement::Leaf { tag, .. }, TagKind::Container) => {
            return Err(OfxError::serialization(format!(
                "tag <{}> is a container in the schema but was built as a leaf",
                tag
            )));
        }
        (OfxElement::Container { tag, .. }, TagKind::Leaf) => {
            return Err(OfxError::serialization(format!(
                "tag <{}> is a leaf in the schema but was built as a container",
                tag
            )));
        }
    }
    Ok(())
}

/// Parse wire text into an element tree
///
/// The plaintext header (everything before the `<OFX>` root marker) is
/// discarded without validation, matching what servers actually send.
///
/// # Errors
///
/// Returns [`OfxError::Format`] if:
/// - no `<OFX>` root marker is present
/// - an opening tag is outside the schema vocabulary
/// - a closing tag does not match the open container (unexpected closing tag)
/// - the input ends with containers still open (unterminated element)
pub fn deserialize(text: &str) -> Result<OfxElement, OfxError> {
    let start = find_root(text).ok_or_else(|| {
        OfxError::format("<OFX> element is not present in the response body")
    })?;
    parse_body(&text[start..])
}

/// Case-insensitive search for the `<OFX>` root marker
fn find_root(text: &str) -> Option<usize> {
    // ASCII case folding keeps byte offsets stable.
    text.to_ascii_uppercase().find("<OFX>")
}

fn parse_body(body: &str) -> Result<OfxElement, OfxError> {
    // Stack of open containers: (tag, children collected so far).
    let mut frames: Vec<(String, Vec<OfxElement>)> = Vec::new();
    let mut rest = body;

    while let Some(lt) = rest.find('<') {
        let after_lt = &rest[lt + 1..];
        let gt = after_lt
            .find('>')
            .ok_or_else(|| OfxError::format("unclosed tag marker"))?;
        let raw_name = &after_lt[..gt];
        rest = &after_lt[gt + 1..];

        if let Some(closing) = raw_name.strip_prefix('/') {
            let closing = closing.to_ascii_uppercase();
            let (tag, children) = frames
                .pop()
                .ok_or_else(|| format_unexpected_closing(&closing))?;
            if tag != closing {
                return Err(format_unexpected_closing(&closing));
            }
            let element = OfxElement::Container { tag, children };
            match frames.last_mut() {
                Some((_, parent)) => parent.push(element),
                // Root closed; trailing text is ignored.
                None => return Ok(element),
            }
        } else {
            let name = raw_name.to_ascii_uppercase();
            match schema::kind_of(&name) {
                None => {
                    return Err(OfxError::format(format!("unknown tag <{}>", name)));
                }
                Some(TagKind::Container) => {
                    frames.push((name, Vec::new()));
                }
                Some(TagKind::Leaf) => {
                    // A leaf's value runs to the next tag marker; the next
                    // '<' always starts a sibling or a closing tag.
                    let end = rest.find('<').unwrap_or(rest.len());
                    let value = rest[..end].trim().to_string();
                    rest = &rest[end..];
                    let (_, parent) = frames.last_mut().ok_or_else(|| {
                        OfxError::format(format!("leaf <{}> outside the root container", name))
                    })?;
                    parent.push(OfxElement::Leaf { tag: name, value });
                }
            }
        }
    }

    Err(OfxError::format("unterminated element"))
}

fn format_unexpected_closing(tag: &str) -> OfxError {
    OfxError::format(format!("unexpected closing tag </{}>", tag))
}
