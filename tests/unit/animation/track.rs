use super::*;
use crate::animation::timing::generate_timings;
use crate::document::tree::SVG_NAMESPACE;

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn loop_values_hold_then_move_to_next_frame() {
    assert_eq!(
        loop_values(&strings(&["a", "b", "c"])),
        strings(&["a", "a", "b", "b", "c", "c", "a"])
    );
    assert_eq!(loop_values(&strings(&["1", "0"])), strings(&["1", "1", "0", "0", "1"]));
    assert!(loop_values(&[]).is_empty());
}

#[test]
fn opacity_track_renders_smil_attributes() {
    let table = generate_timings(2, 1.0, 1.0, 6).unwrap();
    let host = QualName::new("g", Some(SVG_NAMESPACE.to_string()));
    let track = AnimateTrack::opacity(strings(&["1", "1", "0", "0", "1"]), table.key_times());
    let el = track.to_element(&host, &table, "indefinite");

    assert_eq!(el.name.local, ANIMATE_TAG);
    assert_eq!(el.name.namespace.as_deref(), Some(SVG_NAMESPACE));
    let names: Vec<_> = el.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "attributeName",
            "attributeType",
            "begin",
            "dur",
            "repeatCount",
            "values",
            "keyTimes"
        ]
    );
    assert_eq!(el.attributes.get("attributeType"), Some("CSS"));
    assert_eq!(el.attributes.get("dur"), Some("4s"));
    assert_eq!(el.attributes.get("values"), Some("1;1;0;0;1"));
    assert_eq!(el.attributes.get("keyTimes"), Some("0;0.25;0.5;0.75;1"));
}

#[test]
fn attribute_track_has_no_attribute_type() {
    let table = generate_timings(2, 1.0, 0.0, 6).unwrap();
    let host = QualName::new("rect", None);
    let track = AnimateTrack::attribute("x", strings(&["0", "0", "5", "5", "0"]), table.key_times());
    let el = track.to_element(&host, &table, "3");
    assert_eq!(el.attributes.get("attributeName"), Some("x"));
    assert_eq!(el.attributes.get("attributeType"), None);
    assert_eq!(el.attributes.get("repeatCount"), Some("3"));
}

#[test]
fn css_track_marks_the_attribute_type() {
    let track = AnimateTrack::css("fill", strings(&["red", "red", "blue", "blue", "red"]), "0;0.5;0.5;1;1".to_string());
    assert_eq!(track.attribute_name, "fill");
    assert_eq!(track.attribute_type, Some("CSS"));
    assert_eq!(AnimateTrack::opacity(Vec::new(), String::new()).attribute_type, Some("CSS"));
}
