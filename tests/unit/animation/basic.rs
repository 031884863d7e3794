use super::*;
use crate::animation::timing::generate_timings;
use crate::document::tree::{Node, QualName, SVG_NAMESPACE};

fn svg_with(children: &[&str]) -> Element {
    let ns = Some(SVG_NAMESPACE.to_string());
    let mut root = Element::new(QualName::new("svg", ns.clone()));
    for local in children {
        root.push_element(Element::new(QualName::new(*local, ns.clone())));
    }
    root
}

fn groups(result: &Element) -> Vec<&Element> {
    result.element_children().collect()
}

fn track(group: &Element) -> &Element {
    group.element_children().last().unwrap()
}

#[test]
fn three_frames_fade_in_sequence() {
    let frames = vec![svg_with(&["rect"]), svg_with(&["circle"]), svg_with(&["path"])];
    let table = generate_timings(3, 2.0, 1.0, 6).unwrap();
    let mut result = Element::new(frames[0].name.clone());

    let stats = BasicAnimator::new(&AnimationConfig::default())
        .build(&mut result, &frames, &table)
        .unwrap();
    assert_eq!(stats.tracks, 3);
    assert_eq!(stats.placeholders, 0);

    let gs = groups(&result);
    assert_eq!(gs.len(), 3);
    assert_eq!(gs[0].style_property("opacity").as_deref(), Some("1"));
    assert_eq!(gs[1].style_property("opacity").as_deref(), Some("0"));
    assert_eq!(gs[2].style_property("opacity").as_deref(), Some("0"));

    let first = track(gs[0]);
    assert_eq!(first.attributes.get("values"), Some("1;1;0;0;1"));
    assert_eq!(
        first.attributes.get("keyTimes"),
        Some("0;0.222222;0.333333;0.888889;1")
    );

    let middle = track(gs[1]);
    assert_eq!(middle.attributes.get("values"), Some("0;0;1;1;0;0"));
    assert_eq!(
        middle.attributes.get("keyTimes"),
        Some("0;0.222222;0.333333;0.555556;0.666667;1")
    );

    let last = track(gs[2]);
    assert_eq!(last.attributes.get("values"), Some("0;0;1;1;0"));
    assert_eq!(
        last.attributes.get("keyTimes"),
        Some("0;0.555556;0.666667;0.888889;1")
    );

    for g in &gs {
        let t = track(g);
        assert_eq!(t.attributes.get("attributeName"), Some("opacity"));
        assert_eq!(t.attributes.get("dur"), Some("9s"));
        assert_eq!(t.attributes.get("repeatCount"), Some("indefinite"));
    }
}

#[test]
fn groups_carry_frame_content_in_order() {
    let mut second = svg_with(&["rect", "circle"]);
    second.children.insert(0, Node::Comment("c".to_string()));
    let frames = vec![svg_with(&["rect"]), second];
    let table = generate_timings(2, 1.0, 0.0, 6).unwrap();
    let mut result = Element::new(frames[0].name.clone());

    BasicAnimator::new(&AnimationConfig::default())
        .build(&mut result, &frames, &table)
        .unwrap();

    let gs = groups(&result);
    assert_eq!(gs[0].name.local, "g");
    let locals: Vec<_> = gs[1].element_children().map(|e| e.name.local.as_str()).collect();
    assert_eq!(locals, vec!["rect", "circle", "animate"]);
    assert_eq!(gs[1].children[0], Node::Comment("c".to_string()));
}

#[test]
fn two_frames_use_first_and_last_patterns() {
    let frames = vec![svg_with(&[]), svg_with(&[])];
    let table = generate_timings(2, 1.0, 1.0, 6).unwrap();
    let mut result = Element::new(frames[0].name.clone());
    let cfg = AnimationConfig {
        loop_count: 2,
        ..AnimationConfig::default()
    };

    BasicAnimator::new(&cfg)
        .build(&mut result, &frames, &table)
        .unwrap();

    let gs = groups(&result);
    assert_eq!(track(gs[0]).attributes.get("keyTimes"), Some("0;0.25;0.5;0.75;1"));
    assert_eq!(track(gs[1]).attributes.get("keyTimes"), Some("0;0.25;0.5;0.75;1"));
    assert_eq!(track(gs[1]).attributes.get("repeatCount"), Some("2"));
}

#[test]
fn mismatched_table_or_single_frame_is_rejected() {
    let table = generate_timings(3, 1.0, 0.0, 6).unwrap();
    let frames = vec![svg_with(&[]), svg_with(&[])];
    let mut result = Element::new(frames[0].name.clone());
    let animator = BasicAnimator::new(&AnimationConfig::default());
    assert!(animator.build(&mut result, &frames, &table).is_err());
    assert!(animator.build(&mut result, &frames[..1], &table).is_err());
    assert!(result.children.is_empty());
}
