use std::collections::BTreeMap;

use crate::{
    document::tree::{Attributes, Element, Node},
    foundation::error::{SvganimError, SvganimResult},
};

const XMLNS: &str = "xmlns";
const XML_PREFIX: &str = "xml";
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Every `xmlns:prefix` binding declared anywhere in a set of documents.
///
/// A prefix may collect more than one URI when documents disagree; such a prefix has no
/// single binding that can be hoisted to a shared root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceBindings(BTreeMap<String, Vec<String>>);

impl NamespaceBindings {
    /// Collect the prefixed declarations of every element under `roots`.
    pub fn collect<'a>(roots: impl IntoIterator<Item = &'a Element>) -> Self {
        let mut bindings = Self::default();
        for root in roots {
            bindings.visit(root);
        }
        bindings
    }

    fn visit(&mut self, el: &Element) {
        for attr in &el.attributes {
            if let Some(prefix) = attr.name.strip_prefix("xmlns:") {
                let uris = self.0.entry(prefix.to_string()).or_default();
                if !uris.contains(&attr.value) {
                    uris.push(attr.value.clone());
                }
            }
        }
        for child in el.element_children() {
            self.visit(child);
        }
    }

    /// URI of `prefix` when every document that declares it agrees.
    pub fn unique(&self, prefix: &str) -> Option<&str> {
        match self.0.get(prefix).map(Vec::as_slice) {
            Some([uri]) => Some(uri.as_str()),
            _ => None,
        }
    }

    /// Whether `prefix` is bound to more than one URI.
    pub fn is_ambiguous(&self, prefix: &str) -> bool {
        self.0.get(prefix).is_some_and(|uris| uris.len() > 1)
    }
}

/// Make every prefix used under `root` resolvable.
///
/// Element names carry their resolved namespace, so an element whose prefix is unbound
/// or bound to another URI gets a declaration: on `root` when `known` has one agreed URI
/// for the prefix, on the element itself otherwise. Prefixed attributes can only be
/// bound through `known`; an unbound attribute prefix with conflicting URIs is an error.
/// Returns the number of declarations added.
pub fn bind_namespaces(root: &mut Element, known: &NamespaceBindings) -> SvganimResult<usize> {
    let mut scopes = NamespaceScopes::default();
    let mut hoisted = Vec::new();
    scopes.push(&root.attributes);
    let added = bind_element(root, known, &mut scopes, &mut hoisted, true)?;
    for (prefix, uri) in &hoisted {
        root.attributes.set(format!("{XMLNS}:{prefix}"), uri.as_str());
    }
    Ok(added + hoisted.len())
}

fn bind_element(
    el: &mut Element,
    known: &NamespaceBindings,
    scopes: &mut NamespaceScopes,
    hoisted: &mut Vec<(String, String)>,
    is_root: bool,
) -> SvganimResult<usize> {
    if !is_root {
        scopes.push(&el.attributes);
    }
    let mut added = 0;

    let prefix = el.name.prefix.clone();
    let wanted = el.name.namespace.clone().unwrap_or_default();
    let current = scopes.resolve(prefix.as_deref());
    if current.as_deref().unwrap_or_default() != wanted {
        let hoist = match (&prefix, current) {
            (Some(p), None) => known.unique(p) == Some(wanted.as_str()),
            _ => false,
        };
        match (prefix, hoist) {
            (Some(p), true) => {
                scopes.bind_root(&p, &wanted);
                hoisted.push((p, wanted));
            }
            (Some(p), false) => {
                tracing::debug!(prefix = %p, uri = %wanted, "declaring namespace locally");
                el.attributes.set(format!("{XMLNS}:{p}"), wanted.as_str());
                scopes.bind_local(Some(p), wanted);
                added += 1;
            }
            (None, _) => {
                el.attributes.set(XMLNS, wanted.as_str());
                scopes.bind_local(None, wanted);
                added += 1;
            }
        }
    }

    let unbound: Vec<String> = el
        .attributes
        .iter()
        .filter_map(|a| a.name.split_once(':').map(|(p, _)| p))
        .filter(|p| *p != XMLNS && *p != XML_PREFIX)
        .filter(|p| scopes.resolve(Some(*p)).is_none())
        .map(str::to_string)
        .collect();
    for p in unbound {
        if scopes.resolve(Some(p.as_str())).is_some() {
            continue;
        }
        if let Some(uri) = known.unique(&p) {
            scopes.bind_root(&p, uri);
            hoisted.push((p, uri.to_string()));
        } else if known.is_ambiguous(&p) {
            return Err(SvganimError::validation(format!(
                "attribute prefix '{p}' is bound to different namespaces across frames"
            )));
        } else {
            tracing::warn!(prefix = %p, "attribute prefix is never declared by any frame");
        }
    }

    for child in el.children.iter_mut() {
        if let Node::Element(child) = child {
            added += bind_element(child, known, scopes, hoisted, false)?;
        }
    }

    if !is_root {
        scopes.pop();
    }
    Ok(added)
}

/// In-scope `xmlns` declarations, innermost scope last.
///
/// `None` keys the default namespace; an empty URI undeclares it.
#[derive(Debug, Default)]
pub(crate) struct NamespaceScopes(Vec<Vec<(Option<String>, String)>>);

impl NamespaceScopes {
    pub(crate) fn push(&mut self, attrs: &Attributes) {
        let decls = attrs
            .iter()
            .filter(|a| a.is_namespace_decl())
            .map(|a| {
                let prefix = a.name.strip_prefix("xmlns:").map(str::to_string);
                (prefix, a.value.clone())
            })
            .collect();
        self.0.push(decls);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }

    fn bind_local(&mut self, prefix: Option<String>, uri: String) {
        if let Some(scope) = self.0.last_mut() {
            scope.push((prefix, uri));
        }
    }

    fn bind_root(&mut self, prefix: &str, uri: &str) {
        if let Some(scope) = self.0.first_mut() {
            scope.push((Some(prefix.to_string()), uri.to_string()));
        }
    }

    pub(crate) fn resolve(&self, prefix: Option<&str>) -> Option<String> {
        if prefix == Some(XML_PREFIX) {
            return Some(XML_NAMESPACE.to_string());
        }
        self.0
            .iter()
            .rev()
            .flat_map(|scope| scope.iter().rev())
            .find(|(p, _)| p.as_deref() == prefix)
            .and_then(|(_, uri)| (!uri.is_empty()).then(|| uri.clone()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/namespace.rs"]
mod tests;
