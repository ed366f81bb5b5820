use rangedom::{find_element, to_html, Element};
use rangekit::prelude::*;

fn bounds_props(key: &str) -> HandleProps {
    match key {
        "dangerStart" => HandleProps::start().intent_before(Intent::Danger),
        "warningStart" => HandleProps::start().intent_before(Intent::Warning),
        "warningEnd" => HandleProps::end().intent_after(Intent::Warning),
        "dangerEnd" => HandleProps::end().intent_after(Intent::Danger),
        _ => HandleProps::new(),
    }
}

fn intent_bounds() -> SliderValues {
    SliderValues::new()
        .with("dangerStart", 12.0)
        .with("warningStart", 36.0)
        .with("warningEnd", 72.0)
        .with("dangerEnd", 90.0)
}

fn config() -> SliderConfig {
    SliderConfig::new(0.0, 100.0)
        .label_step_size(20.0)
        .default_track_intent(Intent::Success)
}

fn render(config: SliderConfig, values: SliderValues) -> Element {
    let mut slider = MultiRangeSlider::new(config, values)
        .unwrap()
        .id("s")
        .handle_props(bounds_props);
    slider.layout(TrackGeometry::new(0.0, 0.0, 100.0));
    slider.render()
}

fn text_of(el: &Element) -> Option<&str> {
    el.content.children().first().and_then(Element::text_content)
}

#[test]
fn test_root_classes() {
    let tree = render(config(), intent_bounds());

    assert_eq!(tree.class_name(), "pt-slider pt-multi-range-slider");
    assert!(tree.clickable);

    let tree = render(config().vertical(true).disabled(true), intent_bounds());
    assert_eq!(
        tree.class_name(),
        "pt-slider pt-multi-range-slider pt-disabled pt-vertical"
    );
    assert!(!tree.clickable);
}

#[test]
fn test_track_segments_follow_intent_bounds() {
    let tree = render(config(), intent_bounds());

    let expected = [
        ("s-track-0", "pt-slider-progress pt-intent-danger"),
        ("s-track-1", "pt-slider-progress pt-intent-warning pt-start"),
        ("s-track-2", "pt-slider-progress pt-intent-success pt-start pt-end"),
        ("s-track-3", "pt-slider-progress pt-intent-warning pt-end"),
        ("s-track-4", "pt-slider-progress pt-intent-danger"),
    ];
    let track = find_element(&tree, "s-track").unwrap();
    assert_eq!(track.content.children().len(), expected.len());
    for (id, classes) in expected {
        let segment = find_element(&tree, id).unwrap();
        assert_eq!(segment.class_name(), classes, "{id}");
    }

    let first = find_element(&tree, "s-track-0").unwrap();
    assert_eq!(first.style.to_css(), "left: 0.00%; right: 88.00%; top: 0");
    assert_eq!(first.get_data("intent").map(String::as_str), Some("danger"));
}

#[test]
fn test_default_intent_none_marks_empty_segments() {
    let values = SliderValues::new().with("low", 30.0).with("high", 70.0);
    let mut slider = MultiRangeSlider::new(SliderConfig::new(0.0, 100.0), values)
        .unwrap()
        .id("s");
    slider.layout(TrackGeometry::new(0.0, 0.0, 100.0));
    let tree = slider.render();

    let segment = find_element(&tree, "s-track-1").unwrap();
    assert_eq!(
        segment.class_name(),
        "pt-slider-progress pt-slider-progress-empty"
    );
}

#[test]
fn test_coincident_handles_skip_segment() {
    let values = SliderValues::new().with("a", 50.0).with("b", 50.0);
    let tree = render(config(), values);

    let track = find_element(&tree, "s-track").unwrap();
    let keys: Vec<_> = track
        .content
        .children()
        .iter()
        .filter_map(|s| s.key.as_deref())
        .collect();
    assert_eq!(keys, vec!["track-0", "track-2"]);
}

#[test]
fn test_vertical_segment_and_handle_offsets() {
    let tree = render(config().vertical(true), intent_bounds());

    let first = find_element(&tree, "s-track-0").unwrap();
    assert_eq!(first.style.to_css(), "bottom: 0.00%; top: 88.00%; left: 0");

    let handle = find_element(&tree, "s-handle-0").unwrap();
    assert_eq!(handle.style.to_css(), "bottom: 12.00%");
}

#[test]
fn test_handles_rendered_by_rank() {
    let values = SliderValues::new()
        .with("dangerEnd", 90.0)
        .with("dangerStart", 12.0)
        .with("warningEnd", 72.0)
        .with("warningStart", 36.0);
    let tree = render(config(), values);

    let handle = find_element(&tree, "s-handle-0").unwrap();
    assert_eq!(handle.key.as_deref(), Some("0-4"));
    assert_eq!(handle.class_name(), "pt-slider-handle pt-start");
    assert_eq!(handle.get_data("handle").map(String::as_str), Some("dangerStart"));
    assert_eq!(handle.style.to_css(), "left: 12.00%");
    assert!(handle.draggable && handle.focusable);

    let label = find_element(&tree, "s-handle-0-label").unwrap();
    assert_eq!(label.text_content(), Some("12"));

    let last = find_element(&tree, "s-handle-3").unwrap();
    assert_eq!(last.class_name(), "pt-slider-handle pt-end");
    assert_eq!(last.get_data("handle").map(String::as_str), Some("dangerEnd"));
}

#[test]
fn test_active_handle_class_while_dragging() {
    let mut slider = MultiRangeSlider::new(config(), intent_bounds())
        .unwrap()
        .id("s");
    slider.layout(TrackGeometry::new(0.0, 0.0, 100.0));
    slider.render();
    slider.handle_event(&Event::PointerDown(PointerEvent::mouse(70.0, 0.0)));

    let tree = slider.render();
    assert!(find_element(&tree, "s-handle-2").unwrap().has_class("pt-active"));
    assert!(!find_element(&tree, "s-handle-1").unwrap().has_class("pt-active"));
}

#[test]
fn test_axis_labels_every_label_step() {
    let tree = render(config(), intent_bounds());

    let axis = find_element(&tree, "s-axis").unwrap();
    let keys: Vec<_> = axis
        .content
        .children()
        .iter()
        .filter_map(|l| l.key.as_deref())
        .collect();
    assert_eq!(keys, vec!["0", "20", "40", "60", "80", "100"]);

    let texts: Vec<_> = axis.content.children().iter().filter_map(text_of).collect();
    assert_eq!(texts, vec!["0", "20", "40", "60", "80", "100"]);
    assert_eq!(
        axis.content.children()[1].style.to_css(),
        "left: 20.00%"
    );
}

#[test]
fn test_axis_includes_max_with_fractional_steps() {
    let config = SliderConfig::new(0.0, 1.0).step_size(0.1).label_step_size(0.1);
    let tree = render(config, SliderValues::new());

    let axis = find_element(&tree, "s-axis").unwrap();
    let labels = axis.content.children();
    assert_eq!(labels.len(), 11);
    assert_eq!(text_of(&labels[10]), Some("1.0"));
}

#[test]
fn test_label_precision_override() {
    let values = SliderValues::new().with("only", 12.0);
    let tree = render(config().label_precision(2), values);

    let label = find_element(&tree, "s-handle-0-label").unwrap();
    assert_eq!(label.text_content(), Some("12.00"));
}

#[test]
fn test_hidden_labels() {
    let mut slider = MultiRangeSlider::new(config(), intent_bounds())
        .unwrap()
        .id("s")
        .label_renderer(LabelRenderer::Hidden);
    let tree = slider.render();

    assert!(tree.has_class("pt-slider-unlabeled"));
    assert!(find_element(&tree, "s-handle-0-label").is_none());
    let axis = find_element(&tree, "s-axis").unwrap();
    assert!(axis.content.children().iter().all(|l| text_of(l).is_none()));
}

#[test]
fn test_custom_labels() {
    let mut slider = MultiRangeSlider::new(config(), intent_bounds())
        .unwrap()
        .id("s")
        .label_renderer(LabelRenderer::Custom(Box::new(|v| format!("{v}%"))));
    let tree = slider.render();

    let label = find_element(&tree, "s-handle-3-label").unwrap();
    assert_eq!(label.text_content(), Some("90%"));
}

#[test]
fn test_html_output_carries_handle_keys() {
    let tree = render(config(), intent_bounds());
    let html = to_html(&tree);

    assert!(html.starts_with("<div id=\"s\" class=\"pt-slider pt-multi-range-slider\""));
    assert!(html.contains("data-handle=\"warningEnd\""));
    assert!(html.contains("data-intent=\"success\""));
}
