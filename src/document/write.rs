use std::io::Write;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;

use crate::{
    document::tree::{Element, Node},
    foundation::error::{SvganimError, SvganimResult},
};

/// Serialize `root` as a standalone UTF-8 document (with XML declaration) into `sink`.
pub fn write_document<W: Write>(root: &Element, sink: W) -> SvganimResult<()> {
    let mut writer = Writer::new(sink);
    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_element(&mut writer, root)?;
    writer
        .get_mut()
        .flush()
        .map_err(|err| SvganimError::serialize(format!("flush output: {err}")))
}

/// Serialize `root` into an in-memory string.
pub fn to_string(root: &Element) -> SvganimResult<String> {
    let mut out = Vec::new();
    write_document(root, &mut out)?;
    String::from_utf8(out).map_err(|err| SvganimError::serialize(err.to_string()))
}

/// Make sure `root` carries an `xmlns` declaration for its own namespace.
pub fn declare_namespace(root: &mut Element) {
    let Some(uri) = root.name.namespace.clone() else {
        return;
    };
    let decl = match &root.name.prefix {
        Some(p) => format!("xmlns:{p}"),
        None => "xmlns".to_string(),
    };
    if root.attributes.get(&decl).is_none() {
        root.attributes.set(decl, uri);
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, el: &Element) -> SvganimResult<()> {
    let name = el.name.qualified();
    let mut start = BytesStart::new(name.as_str());
    for attr in &el.attributes {
        start.push_attribute((attr.name.as_str(), attr.value.as_str()));
    }

    if el.children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for child in &el.children {
        match child {
            Node::Element(e) => write_element(writer, e)?,
            Node::Text(text) => emit(writer, Event::Text(BytesText::from_escaped(text.as_str())))?,
            Node::CData(text) => emit(writer, Event::CData(BytesCData::new(text.as_str())))?,
            Node::Comment(text) => {
                emit(writer, Event::Comment(BytesText::from_escaped(text.as_str())))?
            }
        }
    }
    emit(writer, Event::End(BytesEnd::new(name.as_str())))
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> SvganimResult<()> {
    writer
        .write_event(event)
        .map_err(|err| SvganimError::serialize(err.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/document/write.rs"]
mod tests;
