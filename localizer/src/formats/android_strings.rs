//! Support for Android `strings.xml` resource files.
//!
//! Only singular `<string>` elements are read; `<plurals>`, `<string-array>`
//! and other elements are skipped. Parsing is strict: malformed XML, a root
//! other than `<resources>` or a `<string>` without a `name` is an error.

use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{BufRead, Write};

use crate::{error::Error, traits::Parser};

const INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    pub strings: Vec<StringResource>,
}

impl Format {
    pub fn new(strings: Vec<StringResource>) -> Self {
        Self { strings }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringResource {
    pub name: String,
    pub value: String,
    /// `None` when the attribute is absent.
    pub translatable: Option<bool>,
}

impl StringResource {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            translatable: None,
        }
    }

    /// Only an explicit `translatable="false"` opts a string out.
    pub fn is_translatable(&self) -> bool {
        self.translatable != Some(false)
    }
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);

        let mut buf = Vec::new();
        let mut strings = Vec::new();
        let mut depth = 0usize;
        let mut saw_root = false;

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(ref e) if depth == 0 => {
                    check_root(e)?;
                    saw_root = true;
                    depth += 1;
                }
                Event::Empty(ref e) if depth == 0 => {
                    check_root(e)?;
                    saw_root = true;
                }
                Event::Start(ref e) if depth == 1 && e.name().as_ref() == b"string" => {
                    let mut sr = parse_attributes(e)?;
                    sr.value = read_string_value(&mut xml_reader, &sr.name)?;
                    strings.push(sr);
                }
                Event::Empty(ref e) if depth == 1 && e.name().as_ref() == b"string" => {
                    strings.push(parse_attributes(e)?);
                }
                Event::Start(_) => depth += 1,
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !saw_root {
            return Err(Error::InvalidResource(
                "missing <resources> root element".to_string(),
            ));
        }
        if depth != 0 {
            return Err(Error::InvalidResource(
                "unexpected end of file: <resources> is not closed".to_string(),
            ));
        }
        Ok(Format { strings })
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new_with_indent(&mut writer, b' ', INDENT_WIDTH);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;

        for sr in &self.strings {
            let mut elem = BytesStart::new("string");
            elem.push_attribute(("name", sr.name.as_str()));
            if let Some(trans) = sr.translatable {
                elem.push_attribute(("translatable", if trans { "true" } else { "false" }));
            }

            xml_writer.write_event(Event::Start(elem))?;
            // Always emitted, even when empty, so the end tag stays on the same line.
            xml_writer.write_event(Event::Text(BytesText::new(&sr.value)))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

fn check_root(e: &BytesStart) -> Result<(), Error> {
    if e.name().as_ref() == b"resources" {
        Ok(())
    } else {
        Err(Error::InvalidResource(format!(
            "expected root element <resources>, found <{}>",
            String::from_utf8_lossy(e.name().as_ref())
        )))
    }
}

fn parse_attributes(e: &BytesStart) -> Result<StringResource, Error> {
    let mut name = None;
    let mut translatable = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::InvalidResource(e.to_string()))?;
        match attr.key.as_ref() {
            b"name" => name = Some(attr.unescape_value()?.to_string()),
            b"translatable" => translatable = Some(attr.unescape_value()? != "false"),
            _ => {}
        }
    }
    let name =
        name.ok_or_else(|| Error::InvalidResource("string tag missing 'name'".to_string()))?;

    Ok(StringResource {
        name,
        value: String::new(),
        translatable,
    })
}

/// Collects the character data of a `<string>` up to its end tag.
/// Inline markup is flattened to its text.
fn read_string_value<R: BufRead>(xml_reader: &mut Reader<R>, name: &str) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut value = String::new();
    let mut nested = 0usize;

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Text(e) => value.push_str(&e.unescape()?),
            Event::CData(e) => value.push_str(
                std::str::from_utf8(&e).map_err(|e| Error::InvalidResource(e.to_string()))?,
            ),
            Event::Start(_) => nested += 1,
            Event::End(_) if nested == 0 => break,
            Event::End(_) => nested -= 1,
            Event::Eof => {
                return Err(Error::InvalidResource(format!(
                    "unexpected end of file inside string '{name}'"
                )));
            }
            _ => {}
        }
        buf.clear();
    }
    Ok(value)
}
