//! HTML serialization of an element tree.

use crate::element::{Content, Element};

/// Serialize `root` and its descendants to an HTML fragment.
///
/// Keys are written as `data-key`, interaction flags as `draggable`,
/// `tabindex` and `aria-disabled`.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root);
    log::trace!("[html] serialized {} ({} bytes)", root.id, out.len());
    out
}

fn write_element(out: &mut String, element: &Element) {
    let tag = element.tag.as_str();
    out.push_str(&format!("<{tag} id=\"{}\"", escape(&element.id)));

    if !element.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape(&element.class_name())));
    }
    if !element.style.is_empty() {
        out.push_str(&format!(" style=\"{}\"", escape(&element.style.to_css())));
    }
    if let Some(key) = &element.key {
        out.push_str(&format!(" data-key=\"{}\"", escape(key)));
    }
    for (name, value) in &element.data {
        out.push_str(&format!(" data-{}=\"{}\"", escape(name), escape(value)));
    }
    if element.draggable {
        out.push_str(" draggable=\"true\"");
    }
    if element.focusable && !element.disabled {
        out.push_str(" tabindex=\"1\"");
    }
    if element.disabled {
        out.push_str(" aria-disabled=\"true\"");
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(out, child);
            }
        }
    }

    out.push_str(&format!("</{tag}>"));
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
