use crate::{
    animation::timing::KeyframeTable,
    document::tree::{Attributes, Element, QualName},
};

/// Local name of the SMIL element carrying a track.
pub const ANIMATE_TAG: &str = "animate";

#[derive(Clone, Debug, PartialEq, Eq)]
/// One SMIL `<animate>` track: a value list sampled at normalized key times.
pub struct AnimateTrack {
    /// Animated attribute or CSS property.
    pub attribute_name: String,
    /// `Some("CSS")` for style properties, `None` for plain XML attributes.
    pub attribute_type: Option<&'static str>,
    /// One value per key time.
    pub values: Vec<String>,
    /// `;`-joined key times, same length as `values`.
    pub key_times: String,
}

impl AnimateTrack {
    /// Track animating the CSS `opacity` property.
    pub fn opacity(values: Vec<String>, key_times: String) -> Self {
        Self::css("opacity", values, key_times)
    }

    /// Track animating a CSS property set through the inline `style` attribute.
    pub fn css(property: impl Into<String>, values: Vec<String>, key_times: String) -> Self {
        Self {
            attribute_name: property.into(),
            attribute_type: Some("CSS"),
            values,
            key_times,
        }
    }

    /// Track animating a plain XML attribute.
    pub fn attribute(name: impl Into<String>, values: Vec<String>, key_times: String) -> Self {
        Self {
            attribute_name: name.into(),
            attribute_type: None,
            values,
            key_times,
        }
    }

    /// Render as an `<animate>` element named alongside `host` (same prefix/namespace).
    pub fn to_element(&self, host: &QualName, table: &KeyframeTable, repeat_count: &str) -> Element {
        let mut attrs = Attributes::new();
        attrs.set("attributeName", self.attribute_name.as_str());
        if let Some(kind) = self.attribute_type {
            attrs.set("attributeType", kind);
        }
        attrs.set("begin", "0s");
        attrs.set("dur", table.duration_string.as_str());
        attrs.set("repeatCount", repeat_count);
        attrs.set("values", self.values.join(";"));
        attrs.set("keyTimes", self.key_times.as_str());
        Element::with_attributes(host.sibling(ANIMATE_TAG), attrs)
    }
}

/// Lay out one value per frame over the full `2N + 1` key-time table.
///
/// Frame `i` holds its value from `t[2i]` to `t[2i+1]`, then moves to frame `i+1`'s
/// value by `t[2i+2]`; the last frame moves back to the first.
pub fn loop_values(per_frame: &[String]) -> Vec<String> {
    let n = per_frame.len();
    let mut values = Vec::with_capacity(2 * n + 1);
    if n == 0 {
        return values;
    }
    values.push(per_frame[0].clone());
    for i in 0..n {
        values.push(per_frame[i].clone());
        values.push(per_frame[(i + 1) % n].clone());
    }
    values
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
