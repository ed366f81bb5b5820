use rangedom::{to_html, Element, Length};

#[test]
fn test_renders_classes_style_and_key() {
    let el = Element::div()
        .id("fill")
        .key("track-0")
        .class("progress")
        .class("intent-danger")
        .left(Length::ratio(0.0))
        .right(Length::ratio(0.88))
        .top(Length::ZERO);

    assert_eq!(
        to_html(&el),
        "<div id=\"fill\" class=\"progress intent-danger\" \
         style=\"left: 0.00%; right: 88.00%; top: 0\" data-key=\"track-0\"></div>"
    );
}

#[test]
fn test_renders_nested_children_and_text() {
    let el = Element::div()
        .id("root")
        .child(Element::span().id("h").child(Element::text("42").id("t")));

    assert_eq!(
        to_html(&el),
        "<div id=\"root\"><span id=\"h\"><span id=\"t\">42</span></span></div>"
    );
}

#[test]
fn test_escapes_text_and_attributes() {
    let el = Element::text("<a & \"b\">").id("x\"y");

    assert_eq!(
        to_html(&el),
        "<span id=\"x&quot;y\">&lt;a &amp; &quot;b&quot;&gt;</span>"
    );
}

#[test]
fn test_interaction_attributes() {
    let enabled = Element::span().id("h").draggable(true).focusable(true);
    assert_eq!(
        to_html(&enabled),
        "<span id=\"h\" draggable=\"true\" tabindex=\"1\"></span>"
    );

    let disabled = Element::span().id("h").focusable(true).disabled(true);
    assert_eq!(
        to_html(&disabled),
        "<span id=\"h\" aria-disabled=\"true\"></span>"
    );
}

#[test]
fn test_data_attributes_sorted_by_name() {
    let el = Element::div().id("d").data("value", "12").data("index", "0");

    assert_eq!(
        to_html(&el),
        "<div id=\"d\" data-index=\"0\" data-value=\"12\"></div>"
    );
}

#[test]
fn test_bare_element_has_only_id() {
    assert_eq!(to_html(&Element::div().id("e")), "<div id=\"e\"></div>");
}
