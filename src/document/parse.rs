use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::{
    document::{
        namespace::NamespaceScopes,
        tree::{Attributes, Element, Node, QualName},
    },
    foundation::error::{SvganimError, SvganimResult},
};

/// Parse one UTF-8 XML document into an owned element tree.
///
/// `input` names the source in error messages. Element nesting deeper than
/// `max_depth` is rejected. Comments, CDATA and non-whitespace character data inside
/// the root are kept; the prolog (declaration, doctype, processing instructions) is
/// dropped.
pub fn parse_document(bytes: &[u8], input: &str, max_depth: usize) -> SvganimResult<Element> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::with_capacity(256);
    let mut stack: Vec<Element> = Vec::with_capacity(16);
    let mut scopes = NamespaceScopes::default();
    let mut root: Option<Element> = None;

    let parse_err = |reader: &Reader<&[u8]>, msg: String| {
        SvganimError::parse(
            input,
            format!("{msg} (at byte {})", reader.buffer_position()),
        )
    };

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|err| parse_err(&reader, format!("XML error: {err}")))?;

        match event {
            Event::Start(e) => {
                if root.is_some() {
                    return Err(parse_err(&reader, "content after root element".into()));
                }
                if stack.len() >= max_depth {
                    return Err(parse_err(
                        &reader,
                        format!("element nesting exceeds max_depth ({max_depth})"),
                    ));
                }
                let el = element_from_start(&reader, &e, &mut scopes)
                    .map_err(|msg| parse_err(&reader, msg))?;
                stack.push(el);
            }
            Event::Empty(e) => {
                if root.is_some() {
                    return Err(parse_err(&reader, "content after root element".into()));
                }
                let el = element_from_start(&reader, &e, &mut scopes)
                    .map_err(|msg| parse_err(&reader, msg))?;
                scopes.pop();
                attach(&mut stack, &mut root, el);
            }
            Event::End(_) => {
                let Some(el) = stack.pop() else {
                    return Err(parse_err(&reader, "unbalanced end tag".into()));
                };
                scopes.pop();
                attach(&mut stack, &mut root, el);
            }
            Event::Text(e) => {
                let text = e
                    .decode()
                    .map_err(|err| parse_err(&reader, format!("text decode error: {err:?}")))?;
                push_text(&mut stack, &text);
            }
            Event::GeneralRef(e) => {
                let name = e
                    .decode()
                    .map_err(|err| parse_err(&reader, format!("entity decode error: {err:?}")))?;
                push_text(&mut stack, &format!("&{name};"));
            }
            Event::CData(e) => {
                let text = reader
                    .decoder()
                    .decode(&e)
                    .map_err(|err| parse_err(&reader, format!("cdata decode error: {err:?}")))?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::CData(text.into_owned()));
                }
            }
            Event::Comment(e) => {
                let text = e
                    .decode()
                    .map_err(|err| parse_err(&reader, format!("comment decode error: {err:?}")))?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Node::Comment(text.into_owned()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(SvganimError::parse(input, "unexpected end of document"));
    }
    root.ok_or_else(|| SvganimError::parse(input, "document has no root element"))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(el)),
        None => *root = Some(el),
    }
}

// Whitespace-only runs are layout noise between elements; anything else is content.
fn push_text(stack: &mut [Element], text: &str) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    match parent.children.last_mut() {
        Some(Node::Text(existing)) => existing.push_str(text),
        _ if text.trim().is_empty() => {}
        _ => parent.children.push(Node::Text(text.to_string())),
    }
}

/// Build an element from a start tag and open its namespace scope.
///
/// The caller closes the scope (immediately for empty elements, at the end tag otherwise).
fn element_from_start(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
    scopes: &mut NamespaceScopes,
) -> Result<Element, String> {
    let decoder = reader.decoder();
    let mut attributes = Attributes::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| format!("attribute error: {err}"))?;
        let key = decoder
            .decode(attr.key.as_ref())
            .map_err(|err| format!("attribute name decode error: {err:?}"))?;
        let raw = decoder
            .decode(&attr.value)
            .map_err(|err| format!("attribute value decode error: {err:?}"))?;
        let value = quick_xml::escape::unescape(&raw)
            .map_err(|err| format!("attribute '{key}' unescape error: {err:?}"))?;
        attributes.set(key.into_owned(), value.into_owned());
    }

    scopes.push(&attributes);

    let name = e.name();
    let raw_name = decoder
        .decode(name.as_ref())
        .map_err(|err| format!("tag name decode error: {err:?}"))?;
    let (prefix, local) = match raw_name.split_once(':') {
        Some((p, l)) => (Some(p.to_string()), l.to_string()),
        None => (None, raw_name.to_string()),
    };
    let namespace = scopes.resolve(prefix.as_deref());
    if prefix.is_some() && namespace.is_none() {
        return Err(format!("unbound namespace prefix in '{raw_name}'"));
    }

    Ok(Element {
        name: QualName {
            prefix,
            local,
            namespace,
        },
        attributes,
        children: Vec::new(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/document/parse.rs"]
mod tests;
