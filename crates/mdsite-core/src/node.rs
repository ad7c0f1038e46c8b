//! HTML node tree
//!
//! Every node exclusively owns its children; trees are built bottom-up and
//! thrown away once rendered.

use indexmap::IndexMap;

/// Attribute mapping, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// Void (self-closing) HTML elements
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Check if a tag is a void element
pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// A node of the HTML output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text leaf, either raw text (no tag) or a tag wrapping a single value
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },

    /// Tagged element with ordered children
    Element {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Create an untagged text leaf
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf, e.g. `<b>value</b>`
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        Self::leaf_with_attrs(tag, value, Vec::<(&str, &str)>::new())
    }

    /// Create a tagged leaf with attributes
    pub fn leaf_with_attrs<K, V>(
        tag: &str,
        value: impl Into<String>,
        attrs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attributes: collect_attributes(attrs),
        }
    }

    /// Create an element node owning `children`
    pub fn element(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self::element_with_attrs(tag, children, Vec::<(&str, &str)>::new())
    }

    /// Create an element node with attributes
    pub fn element_with_attrs<K, V>(
        tag: &str,
        children: Vec<HtmlNode>,
        attrs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        HtmlNode::Element {
            tag: tag.to_string(),
            children,
            attributes: collect_attributes(attrs),
        }
    }

    /// Get the tag name, `None` for raw text
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Element { tag, .. } => Some(tag),
        }
    }

    /// Get the leaf value, `None` for elements
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => Some(value),
            HtmlNode::Element { .. } => None,
        }
    }

    /// Get child nodes (empty for leaves)
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Element { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Element { attributes, .. } => attributes,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Attributes as ` key="value"` pairs, or an empty string
    pub fn attributes_to_html(&self) -> String {
        let mut out = String::new();
        push_attributes(self.attributes(), &mut out);
        out
    }

    /// Render this node and its descendants
    pub fn to_html(&self) -> crate::Result<String> {
        crate::render(self)
    }
}

/// Write attributes in insertion order, values verbatim
pub(crate) fn push_attributes(attributes: &Attributes, out: &mut String) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn collect_attributes<K, V>(attrs: impl IntoIterator<Item = (K, V)>) -> Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    attrs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
