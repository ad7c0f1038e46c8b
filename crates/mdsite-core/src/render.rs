//! HTML tree serialization
//!
//! Converts an [`HtmlNode`] tree into an HTML string.

use crate::node::{is_void, push_attributes, HtmlNode};
use crate::{RenderError, Result};

/// Serialize a node tree to an HTML string
pub fn render(node: &HtmlNode) -> Result<String> {
    let mut output = String::with_capacity(1024);
    render_node(node, &mut output)?;
    Ok(output)
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf {
            tag: None, value, ..
        } => {
            if value.is_empty() {
                return Err(RenderError::MissingValue {
                    tag: "#text".to_string(),
                });
            }
            out.push_str(value);
        }

        HtmlNode::Leaf {
            tag: Some(tag),
            value,
            attributes,
        } => {
            if is_void(tag) {
                return render_void_leaf(tag, value, attributes, out);
            }
            if value.is_empty() {
                return Err(RenderError::MissingValue { tag: tag.clone() });
            }
            open_tag(tag, attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }

        HtmlNode::Element {
            tag,
            children,
            attributes,
        } => {
            if tag.is_empty() {
                return Err(RenderError::MissingTag);
            }
            if children.is_empty() {
                return Err(RenderError::MissingChildren { tag: tag.clone() });
            }
            open_tag(tag, attributes, out);
            for child in children {
                render_node(child, out)?;
            }
            close_tag(tag, out);
        }
    }

    Ok(())
}

/// Only an `img` carrying attributes may render without a value; a void
/// element can never hold one.
fn render_void_leaf(
    tag: &str,
    value: &str,
    attributes: &crate::Attributes,
    out: &mut String,
) -> Result<()> {
    if !value.is_empty() {
        return Err(RenderError::UnexpectedValue {
            tag: tag.to_string(),
        });
    }
    if !tag.eq_ignore_ascii_case("img") || attributes.is_empty() {
        return Err(RenderError::MissingValue {
            tag: tag.to_string(),
        });
    }
    open_tag(tag, attributes, out);
    Ok(())
}

fn open_tag(tag: &str, attributes: &crate::Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text() {
        let node = HtmlNode::text("Hello, world!");
        assert_eq!(render(&node).unwrap(), "Hello, world!");
    }

    #[test]
    fn test_tagged_leaf() {
        let node = HtmlNode::leaf("p", "Hello, world!");
        assert_eq!(render(&node).unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_link_leaf() {
        let node =
            HtmlNode::leaf_with_attrs("a", "Click me!", vec![("href", "https://www.google.com")]);
        assert_eq!(
            render(&node).unwrap(),
            "<a href=\"https://www.google.com\">Click me!</a>"
        );
    }

    #[test]
    fn test_image_leaf_has_no_closing_tag() {
        let node = HtmlNode::leaf_with_attrs("img", "", vec![("src", "image.png"), ("alt", "alt")]);
        assert_eq!(render(&node).unwrap(), "<img src=\"image.png\" alt=\"alt\">");
    }

    #[test]
    fn test_empty_void_leaf_is_error() {
        let node = HtmlNode::leaf("hr", "");
        assert_eq!(
            render(&node),
            Err(RenderError::MissingValue {
                tag: "hr".to_string()
            })
        );
    }

    #[test]
    fn test_image_without_attributes_is_error() {
        let node = HtmlNode::leaf("img", "");
        assert_eq!(
            render(&node),
            Err(RenderError::MissingValue {
                tag: "img".to_string()
            })
        );
    }

    #[test]
    fn test_image_with_value_is_error() {
        let node = HtmlNode::leaf_with_attrs("img", "x", vec![("src", "a.png")]);
        assert_eq!(
            render(&node),
            Err(RenderError::UnexpectedValue {
                tag: "img".to_string()
            })
        );
    }

    #[test]
    fn test_empty_text_is_error() {
        let node = HtmlNode::text("");
        assert_eq!(
            render(&node),
            Err(RenderError::MissingValue {
                tag: "#text".to_string()
            })
        );
    }

    #[test]
    fn test_empty_tagged_leaf_is_error() {
        let node = HtmlNode::leaf("b", "");
        assert_eq!(
            render(&node),
            Err(RenderError::MissingValue {
                tag: "b".to_string()
            })
        );
    }

    #[test]
    fn test_element_with_children() {
        let node = HtmlNode::element("div", vec![HtmlNode::leaf("span", "child")]);
        assert_eq!(render(&node).unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn test_element_with_grandchildren() {
        let node = HtmlNode::element(
            "div",
            vec![HtmlNode::element("span", vec![HtmlNode::leaf("b", "grandchild")])],
        );
        assert_eq!(
            render(&node).unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn test_element_mixed_children() {
        let node = HtmlNode::element(
            "p",
            vec![
                HtmlNode::leaf("b", "Bold text"),
                HtmlNode::text("Normal text"),
                HtmlNode::leaf("i", "italic text"),
                HtmlNode::text("Normal text"),
            ],
        );
        assert_eq!(
            render(&node).unwrap(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_element_attributes() {
        let node = HtmlNode::element_with_attrs(
            "div",
            vec![HtmlNode::text("x")],
            vec![("class", "note"), ("id", "n1")],
        );
        assert_eq!(render(&node).unwrap(), "<div class=\"note\" id=\"n1\">x</div>");
    }

    #[test]
    fn test_element_without_children_is_error() {
        let node = HtmlNode::element("ul", Vec::new());
        assert_eq!(
            render(&node),
            Err(RenderError::MissingChildren {
                tag: "ul".to_string()
            })
        );
    }

    #[test]
    fn test_element_without_tag_is_error() {
        let node = HtmlNode::element("", vec![HtmlNode::text("x")]);
        assert_eq!(render(&node), Err(RenderError::MissingTag));
    }

    #[test]
    fn test_error_in_descendant_propagates() {
        let node = HtmlNode::element(
            "div",
            vec![HtmlNode::text("ok"), HtmlNode::element("p", vec![HtmlNode::text("")])],
        );
        assert!(matches!(
            render(&node),
            Err(RenderError::MissingValue { .. })
        ));
    }
}
