//! Per-node animation over N structurally similar frames.
//!
//! At every level the N sibling nodes (one per frame) have their element children
//! aligned by position: where a frame lacks a child, or holds a child with a different
//! tag than the most complete frame, an invisible placeholder is slotted in so every
//! position has exactly one node per frame. Each aligned position becomes one merged
//! element whose changing opacity and attributes are driven by SMIL tracks.
//!
//! Matching is shallow (tag identity only) and never reorders children. When several
//! frames share the longest child list, the first of them is the reference.

use crate::{
    animation::{
        animator::{Animator, AnimatorStats, check_frames},
        config::AnimationConfig,
        timing::KeyframeTable,
        track::{AnimateTrack, loop_values},
    },
    document::{
        style::{STYLE_ATTR, StyleProperties, get_style_property, set_style_property},
        tree::{Attributes, Element, Node, QualName},
    },
    foundation::error::{SvganimError, SvganimResult},
};

const OPACITY: &str = "opacity";

#[derive(Clone, Debug, PartialEq)]
/// One frame's node at an aligned position.
pub struct Slot<'a> {
    /// Tag of the node (shared with the reference node for placeholders).
    pub name: &'a QualName,
    /// Effective attributes, including any opacity forced during alignment.
    pub attributes: Attributes,
    /// Original element, or `None` for a synthesized placeholder.
    pub source: Option<&'a Element>,
}

impl<'a> Slot<'a> {
    /// Slot for an element that exists in the frame.
    pub fn present(el: &'a Element) -> Self {
        Self {
            name: &el.name,
            attributes: el.attributes.clone(),
            source: Some(el),
        }
    }

    /// Invisible stand-in copying `name` and `attributes` of a reference node.
    pub fn placeholder(name: &'a QualName, attributes: &Attributes) -> Self {
        let mut attributes = attributes.clone();
        set_style_property(&mut attributes, OPACITY, "0");
        Self {
            name,
            attributes,
            source: None,
        }
    }

    /// Whether this slot was synthesized.
    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }

    /// Inline `opacity` style property, if set.
    pub fn opacity(&self) -> Option<String> {
        get_style_property(&self.attributes, OPACITY)
    }

    /// Element children as slots. Placeholders have none.
    pub fn children(&self) -> Vec<Slot<'a>> {
        match self.source {
            Some(el) => el.element_children().map(Slot::present).collect(),
            None => Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// All frames' nodes at one child position.
pub struct AlignedPosition<'a> {
    /// One slot per frame, in frame order.
    pub slots: Vec<Slot<'a>>,
    /// Whether any frame needed a placeholder here.
    pub forced_opacity: bool,
    /// Number of placeholders inserted at this position.
    pub placeholders: usize,
}

/// Align the element children of `siblings` (one node per frame).
///
/// Returns one [`AlignedPosition`] per merged child, in order. Every position holds
/// exactly `siblings.len()` slots.
pub fn align_level<'a>(siblings: &[Slot<'a>]) -> Vec<AlignedPosition<'a>> {
    let mut lists: Vec<Vec<Slot<'a>>> = siblings.iter().map(Slot::children).collect();
    let mut max_length = lists.iter().map(Vec::len).max().unwrap_or(0);
    let mut positions = Vec::with_capacity(max_length);

    let mut child_index = 0;
    while child_index < max_length {
        // max_length always equals the length of at least one list.
        let Some(reference) = lists.iter().position(|l| l.len() == max_length) else {
            break;
        };
        let ref_name = lists[reference][child_index].name;
        let ref_attrs = lists[reference][child_index].attributes.clone();

        let mut placeholders = 0;
        for (frame, list) in lists.iter_mut().enumerate() {
            let aligned = list
                .get(child_index)
                .is_some_and(|slot| slot.name.same_identity(ref_name));
            if aligned {
                continue;
            }
            list.insert(child_index, Slot::placeholder(ref_name, &ref_attrs));
            max_length = max_length.max(list.len());
            placeholders += 1;
            tracing::trace!(
                frame,
                child_index,
                tag = %ref_name.qualified(),
                "inserted placeholder"
            );
        }

        let forced_opacity = placeholders > 0;
        let mut slots: Vec<Slot<'a>> = lists.iter().map(|l| l[child_index].clone()).collect();
        if forced_opacity {
            for slot in slots.iter_mut().filter(|s| s.opacity().is_none()) {
                set_style_property(&mut slot.attributes, OPACITY, "1");
            }
        }

        positions.push(AlignedPosition {
            slots,
            forced_opacity,
            placeholders,
        });
        child_index += 1;
    }

    positions
}

/// Tracks needed to replay one aligned position across all frames.
///
/// Opacity (missing means `1`) gets a CSS track when it differs between frames. Other
/// inline style properties of frame 0 get a CSS track when every frame sets them and the
/// values differ. Every attribute present on all frames with differing values gets an
/// attribute track, except `style`, `id`, namespace declarations, and values SMIL lists
/// cannot hold.
pub fn position_tracks(slots: &[Slot<'_>], table: &KeyframeTable) -> Vec<AnimateTrack> {
    let mut tracks = Vec::new();
    let Some(first) = slots.first() else {
        return tracks;
    };

    let opacities: Vec<String> = slots
        .iter()
        .map(|s| s.opacity().unwrap_or_else(|| "1".to_string()))
        .collect();
    if opacities.iter().any(|o| *o != opacities[0]) {
        tracks.push(AnimateTrack::opacity(
            loop_values(&opacities),
            table.key_times(),
        ));
    }

    let first_style = first
        .attributes
        .get(STYLE_ATTR)
        .map(StyleProperties::parse)
        .unwrap_or_default();
    for (property, _) in first_style.iter().filter(|(k, _)| *k != OPACITY) {
        let values: Option<Vec<String>> = slots
            .iter()
            .map(|s| get_style_property(&s.attributes, property))
            .collect();
        let Some(values) = values else {
            continue;
        };
        if values.iter().all(|v| *v == values[0]) {
            continue;
        }
        tracks.push(AnimateTrack::css(
            property,
            loop_values(&values),
            table.key_times(),
        ));
    }

    for attr in &first.attributes {
        if attr.name == STYLE_ATTR || attr.name == "id" || attr.is_namespace_decl() {
            continue;
        }
        let values: Option<Vec<String>> = slots
            .iter()
            .map(|s| s.attributes.get(&attr.name).map(str::to_string))
            .collect();
        let Some(values) = values else {
            continue;
        };
        if values.iter().all(|v| *v == values[0]) || values.iter().any(|v| v.contains(';')) {
            continue;
        }
        tracks.push(AnimateTrack::attribute(
            attr.name.clone(),
            loop_values(&values),
            table.key_times(),
        ));
    }

    tracks
}

fn character_data(el: &Element) -> Vec<&str> {
    el.children
        .iter()
        .filter_map(|n| match n {
            Node::Text(t) | Node::CData(t) => Some(t.as_str()),
            _ => None,
        })
        .collect()
}

// Placeholders carry no content, so only frames really holding the node are compared.
fn character_data_differs(siblings: &[Slot<'_>]) -> bool {
    let mut present = siblings.iter().filter_map(|s| s.source).map(character_data);
    match present.next() {
        Some(first) => present.any(|other| other != first),
        None => false,
    }
}

/// Per-node animator: aligns all frames and animates only what changes.
#[derive(Clone, Debug)]
pub struct StructuralAnimator {
    repeat_count: String,
    max_depth: usize,
}

impl StructuralAnimator {
    /// Animator using the loop and depth settings of `config`.
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            repeat_count: config.repeat_count(),
            max_depth: config.max_depth,
        }
    }

    fn merge_children(
        &self,
        siblings: &[Slot<'_>],
        table: &KeyframeTable,
        depth: usize,
        stats: &mut AnimatorStats,
    ) -> SvganimResult<Vec<Node>> {
        if depth > self.max_depth {
            return Err(SvganimError::validation(format!(
                "element nesting exceeds max_depth ({})",
                self.max_depth
            )));
        }

        let positions = align_level(siblings);

        if character_data_differs(siblings) {
            stats.frozen_text += 1;
            tracing::debug!(
                tag = %siblings.first().map(|s| s.name.qualified()).unwrap_or_default(),
                "character data differs between frames"
            );
        }

        // Character data and comments come from the first frame that really has this node.
        let content_frame = siblings.iter().position(|s| s.source.is_some());
        let mut content = content_frame
            .and_then(|k| siblings[k].source)
            .map(|el| el.children.iter());

        let mut out = Vec::with_capacity(positions.len());
        for pos in positions {
            stats.placeholders += pos.placeholders;

            let owns_slot = content_frame.is_some_and(|k| !pos.slots[k].is_placeholder());
            if owns_slot && let Some(nodes) = content.as_mut() {
                for node in nodes.by_ref() {
                    match node {
                        Node::Element(_) => break,
                        other => out.push(other.clone()),
                    }
                }
            }

            let lead = &pos.slots[0];
            let mut merged = Element::with_attributes(lead.name.clone(), lead.attributes.clone());
            merged.children = self.merge_children(&pos.slots, table, depth + 1, stats)?;
            for track in position_tracks(&pos.slots, table) {
                merged.push_element(track.to_element(&merged.name, table, &self.repeat_count));
                stats.tracks += 1;
            }
            stats.merged_nodes += 1;
            out.push(Node::Element(merged));
        }

        if let Some(nodes) = content {
            out.extend(nodes.filter(|n| !matches!(n, Node::Element(_))).cloned());
        }
        Ok(out)
    }
}

impl Animator for StructuralAnimator {
    #[tracing::instrument(skip_all, fields(frames = frames.len()))]
    fn build(
        &self,
        result: &mut Element,
        frames: &[Element],
        table: &KeyframeTable,
    ) -> SvganimResult<AnimatorStats> {
        check_frames(frames, table)?;

        let roots: Vec<Slot<'_>> = frames.iter().map(Slot::present).collect();
        let mut stats = AnimatorStats::default();
        let children = self.merge_children(&roots, table, 1, &mut stats)?;
        result.children.extend(children);

        if stats.frozen_text > 0 {
            tracing::warn!(
                nodes = stats.frozen_text,
                "text differs between frames and only the first frame's text is kept; use basic mode to animate it"
            );
        }
        tracing::debug!(?stats, "structural animation built");
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/structural.rs"]
mod tests;
