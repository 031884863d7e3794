/// SVG namespace URI.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Element name as written in the source plus its resolved namespace.
pub struct QualName {
    /// Prefix used in the source document (`None` for unprefixed names).
    pub prefix: Option<String>,
    /// Local (namespace-stripped) name.
    pub local: String,
    /// Namespace URI resolved from in-scope `xmlns` declarations.
    pub namespace: Option<String>,
}

impl QualName {
    /// Build an unprefixed name in `namespace`.
    pub fn new(local: impl Into<String>, namespace: Option<String>) -> Self {
        Self {
            prefix: None,
            local: local.into(),
            namespace,
        }
    }

    /// Build a name with the same prefix and namespace as `self`.
    pub fn sibling(&self, local: impl Into<String>) -> Self {
        Self {
            prefix: self.prefix.clone(),
            local: local.into(),
            namespace: self.namespace.clone(),
        }
    }

    /// Whether two names denote the same element kind (namespace + local name).
    pub fn same_identity(&self, other: &Self) -> bool {
        self.local == other.local && self.namespace == other.namespace
    }

    /// Name as it is written in markup (`prefix:local` or `local`).
    pub fn qualified(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{p}:{}", self.local),
            None => self.local.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One `name="value"` pair. Values are stored unescaped.
pub struct Attribute {
    /// Qualified attribute name as written (`xlink:href`, `xmlns`, ...).
    pub name: String,
    /// Unescaped value.
    pub value: String,
}

impl Attribute {
    /// Whether this attribute is an `xmlns` / `xmlns:*` declaration.
    pub fn is_namespace_decl(&self) -> bool {
        self.name == "xmlns" || self.name.starts_with("xmlns:")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Ordered attribute set. Names are unique; `set` overwrites in place.
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    /// Empty attribute set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set `name` to `value`, keeping the position of an existing entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(Attribute { name, value }),
        }
    }

    /// Iterate attributes in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<N, V> FromIterator<(N, V)> for Attributes
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One child of an element.
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Character data, stored exactly as escaped in the source.
    Text(String),
    /// CDATA section content.
    CData(String),
    /// Comment content (without `<!--`/`-->`).
    Comment(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// An element with its attributes and ordered children.
pub struct Element {
    /// Element name and namespace.
    pub name: QualName,
    /// Ordered attributes.
    pub attributes: Attributes,
    /// Ordered child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Element with no attributes or children.
    pub fn new(name: QualName) -> Self {
        Self {
            name,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Element with the given attributes and no children.
    pub fn with_attributes(name: QualName, attributes: Attributes) -> Self {
        Self {
            name,
            attributes,
            children: Vec::new(),
        }
    }

    /// Element children in document order (text and comments skipped).
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Number of element children.
    pub fn element_count(&self) -> usize {
        self.element_children().count()
    }

    /// Append a child element.
    pub fn push_element(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Append a comment.
    pub fn push_comment(&mut self, text: impl Into<String>) {
        self.children.push(Node::Comment(text.into()));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/tree.rs"]
mod tests;
