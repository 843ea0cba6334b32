//! The typed element tree
//!
//! An [`OfxElement`] is either a leaf (tag plus scalar text) or a container
//! (tag plus ordered children). Trees are what the codec produces and
//! consumes; navigation helpers on this type are what the session layer and
//! the domain mapper walk the reply with.
//!
//! Children keep the order they were inserted in. Every builder in this
//! crate inserts in schema declaration order, which is what makes
//! serialization deterministic and round-trips byte-stable.

/// A node of the OFX message tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfxElement {
    /// Scalar element; never closed on the wire
    Leaf {
        /// Canonical uppercase tag name
        tag: String,
        /// Text value, whitespace-trimmed on the inbound path
        value: String,
    },
    /// Structural element; always explicitly closed on the wire
    Container {
        /// Canonical uppercase tag name
        tag: String,
        /// Children in document (or builder) order
        children: Vec<OfxElement>,
    },
}

impl OfxElement {
    /// Build a leaf element
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        OfxElement::Leaf {
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Build a container element from its children
    pub fn container(tag: impl Into<String>, children: Vec<OfxElement>) -> Self {
        OfxElement::Container {
            tag: tag.into(),
            children,
        }
    }

    /// Tag name of this element
    pub fn tag(&self) -> &str {
        match self {
            OfxElement::Leaf { tag, .. } => tag,
            OfxElement::Container { tag, .. } => tag,
        }
    }

    /// Children of this element; empty for leaves
    pub fn children(&self) -> &[OfxElement] {
        match self {
            OfxElement::Leaf { .. } => &[],
            OfxElement::Container { children, .. } => children,
        }
    }

    /// First child with the given tag
    pub fn child(&self, tag: &str) -> Option<&OfxElement> {
        self.children().iter().find(|child| child.tag() == tag)
    }

    /// First child with the given tag, taking ownership of it
    ///
    /// Consumes the element; used at the extraction step so the requested
    /// message set can be moved out of the reply tree without cloning.
    pub fn into_child(self, tag: &str) -> Option<OfxElement> {
        match self {
            OfxElement::Leaf { .. } => None,
            OfxElement::Container { children, .. } => {
                children.into_iter().find(|child| child.tag() == tag)
            }
        }
    }

    /// All children with the given tag, in document order
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a OfxElement> {
        self.children()
            .iter()
            .filter(move |child| child.tag() == tag)
    }

    /// Descend through a sequence of container tags
    ///
    /// Takes the first match at each step. Returns `None` as soon as any
    /// step is missing.
    pub fn path(&self, tags: &[&str]) -> Option<&OfxElement> {
        let mut current = self;
        for tag in tags {
            current = current.child(tag)?;
        }
        Some(current)
    }

    /// Text value of the first child leaf with the given tag
    pub fn leaf_text(&self, tag: &str) -> Option<&str> {
        match self.child(tag)? {
            OfxElement::Leaf { value, .. } => Some(value),
            OfxElement::Container { .. } => None,
        }
    }
}
