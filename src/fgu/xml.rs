//! FGU map XML serialization
//!
//! Output is pretty-printed with two-space indentation. Flags are written as
//! empty elements and coordinate lists are comma-joined without whitespace.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::occluder::Occluder;
use super::types::{FguDocument, Light};
use crate::error::{ConvertError, Result};

const ROOT_VERSION: &str = "4.1";
const ROOT_DATA_VERSION: &str = "20210302";
const ROOT_RELEASE: &str = "8|CoreRPG:4.1";

fn xml_err(e: impl std::fmt::Display) -> ConvertError {
    ConvertError::Xml(e.to_string())
}

struct MapWriter {
    writer: Writer<Vec<u8>>,
}

impl MapWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer.write_event(event).map_err(xml_err)
    }

    fn start(&mut self, name: &str) -> Result<()> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str) -> Result<()> {
        self.event(Event::Empty(BytesStart::new(name)))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name)?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn occluder(&mut self, occluder: &Occluder) -> Result<()> {
        let record = occluder.record();
        self.start("occluder")?;
        self.text_element("id", &record.id.to_string())?;
        self.text_element("points", &record.points)?;
        for marker in record.markers {
            self.empty(marker)?;
        }
        self.end("occluder")
    }

    fn light(&mut self, light: &Light) -> Result<()> {
        self.start("light")?;
        self.text_element("id", &light.id.to_string())?;
        self.text_element("position", &light.position.to_string())?;
        self.text_element("range", &light.range_string())?;
        self.text_element("color", &light.color())?;
        if light.is_on() {
            self.empty("on")?;
        }
        self.end("light")
    }

    fn finish(self) -> Result<String> {
        let mut text = String::from_utf8(self.writer.into_inner()).map_err(xml_err)?;
        text.push('\n');
        Ok(text)
    }
}

/// Render an FGU document to XML text
pub fn serialize(document: &FguDocument) -> Result<String> {
    let mut out = MapWriter::new();

    out.event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    out.event(Event::Start(BytesStart::new("root").with_attributes([
        ("version", ROOT_VERSION),
        ("dataversion", ROOT_DATA_VERSION),
        ("release", ROOT_RELEASE),
    ])))?;

    out.text_element("gridsize", &document.grid_size_string())?;

    if document.occluders.is_empty() {
        out.empty("occluders")?;
    } else {
        out.start("occluders")?;
        for occluder in &document.occluders {
            out.occluder(occluder)?;
        }
        out.end("occluders")?;
    }

    if document.lights.is_empty() {
        out.empty("lights")?;
    } else {
        out.start("lights")?;
        for light in &document.lights {
            out.light(light)?;
        }
        out.end("lights")?;
    }

    out.end("root")?;
    out.finish()
}
