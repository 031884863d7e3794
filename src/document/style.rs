use crate::document::tree::{Attributes, Element};

/// Name of the inline style attribute.
pub const STYLE_ATTR: &str = "style";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Ordered `key:value` pairs parsed from one inline `style` string.
///
/// Only the `key:value;` shape is modeled. Entries without a `:` are dropped and
/// whitespace around keys and values is not kept, so serializing a parsed style may
/// normalize it.
pub struct StyleProperties(Vec<(String, String)>);

impl StyleProperties {
    /// Parse an inline style string.
    pub fn parse(style: &str) -> Self {
        let props = style
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        Self(props)
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Overwrite `key` in place or append it.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.0.push((key.to_string(), value.to_string())),
        }
    }

    /// Iterate pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for StyleProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (k, v) in &self.0 {
            write!(f, "{k}:{v};")?;
        }
        Ok(())
    }
}

/// Read one property from the `style` attribute of an attribute set.
pub fn get_style_property(attrs: &Attributes, key: &str) -> Option<String> {
    let style = attrs.get(STYLE_ATTR)?;
    StyleProperties::parse(style).get(key).map(str::to_string)
}

/// Write one property into the `style` attribute of an attribute set, creating it if needed.
pub fn set_style_property(attrs: &mut Attributes, key: &str, value: &str) {
    let mut props = StyleProperties::parse(attrs.get(STYLE_ATTR).unwrap_or_default());
    props.set(key, value);
    attrs.set(STYLE_ATTR, props.to_string());
}

impl Element {
    /// Read one inline style property of this element.
    pub fn style_property(&self, key: &str) -> Option<String> {
        get_style_property(&self.attributes, key)
    }

    /// Write one inline style property of this element.
    pub fn set_style_property(&mut self, key: &str, value: &str) {
        set_style_property(&mut self.attributes, key, value);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/style.rs"]
mod tests;
