use crate::{Error, Result};
use fpi2nite_types::{Coordinates, RawPacket};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

// Paths are relative to the root <VOEvent> element and compared on local names
pub const ISOTIME_PATH: &str =
    "WhereWhen/ObsDataLocation/ObservationLocation/AstroCoords/Time/TimeInstant/ISOTime";
pub const RA_PATH: &str =
    "WhereWhen/ObsDataLocation/ObservationLocation/AstroCoords/Position2D/Value2/C1";
pub const DEC_PATH: &str =
    "WhereWhen/ObsDataLocation/ObservationLocation/AstroCoords/Position2D/Value2/C2";
pub const INFERENCE_NAME_PATH: &str = "Why/Inference/Name";

const WHAT_PARAM_PATH: &str = "What/Param";
const GROUP_PARAM_PATH: &str = "What/Group/Param";

const TEXT_PATHS: [&str; 4] = [ISOTIME_PATH, RA_PATH, DEC_PATH, INFERENCE_NAME_PATH];

/// `<Param name=".." value=".."/>` attribute pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub value: Option<String>,
}

/// Fields of one VOEvent packet needed by the stream policies
///
/// Built in a single streaming pass. For every text path only the first matching
/// element is kept, so later duplicates are ignored.
#[derive(Debug, Clone, Default)]
pub struct VoEventPacket {
    texts: HashMap<&'static str, String>,
    what_params: Vec<Param>,
    group_params: Vec<Param>,
}

impl VoEventPacket {
    pub fn parse(raw: &RawPacket) -> Result<Self> {
        Self::parse_str(raw.as_str())
    }

    pub fn parse_str(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut packet = Self::default();
        let mut stack: Vec<String> = Vec::new();
        // (target path, element depth, accumulated text)
        let mut capture: Option<(&'static str, usize, String)> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    stack.push(local_name(&e));
                    let path = relative_path(&stack);
                    if capture.is_none()
                        && let Some(target) = packet.pending_text_path(&path)
                    {
                        capture = Some((target, stack.len(), String::new()));
                    }
                    packet.collect_param(&path, &e)?;
                }
                Event::Empty(e) => {
                    stack.push(local_name(&e));
                    let path = relative_path(&stack);
                    if let Some(target) = packet.pending_text_path(&path) {
                        packet.texts.insert(target, String::new());
                    }
                    packet.collect_param(&path, &e)?;
                    stack.pop();
                }
                Event::Text(t) => {
                    if let Some((_, depth, text)) = capture.as_mut()
                        && *depth == stack.len()
                    {
                        text.push_str(&t.unescape()?);
                    }
                }
                Event::CData(c) => {
                    if let Some((_, depth, text)) = capture.as_mut()
                        && *depth == stack.len()
                    {
                        text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                    }
                }
                Event::End(_) => {
                    if let Some((target, _, text)) = capture.take_if(|c| c.1 == stack.len()) {
                        packet.texts.insert(target, text.trim().to_string());
                    }
                    stack.pop();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(packet)
    }

    /// Text of the first element at `path`, if it exists and is not blank
    pub fn text(&self, path: &str) -> Option<&str> {
        self.texts
            .get(path)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }

    pub fn required_text(&self, path: &str) -> Result<String> {
        self.text(path)
            .map(str::to_string)
            .ok_or_else(|| Error::MissingField(path.to_string()))
    }

    /// `What/Param` elements in document order
    pub fn what_params(&self) -> &[Param] {
        &self.what_params
    }

    /// `What/Group/Param` elements in document order, across all groups
    pub fn group_params(&self) -> &[Param] {
        &self.group_params
    }

    pub fn coordinates(&self) -> Result<Coordinates> {
        Ok(Coordinates {
            isot: self.required_text(ISOTIME_PATH)?,
            ra: self.required_text(RA_PATH)?,
            dec: self.required_text(DEC_PATH)?,
        })
    }

    fn pending_text_path(&self, path: &str) -> Option<&'static str> {
        TEXT_PATHS
            .iter()
            .copied()
            .find(|target| *target == path && !self.texts.contains_key(target))
    }

    fn collect_param(&mut self, path: &str, e: &BytesStart<'_>) -> Result<()> {
        let params = match path {
            WHAT_PARAM_PATH => &mut self.what_params,
            GROUP_PARAM_PATH => &mut self.group_params,
            _ => return Ok(()),
        };

        let mut name = None;
        let mut value = None;
        for attr in e.attributes() {
            let attr = attr?;
            match attr.key.local_name().as_ref() {
                b"name" => name = Some(attr.unescape_value()?.into_owned()),
                b"value" => value = Some(attr.unescape_value()?.into_owned()),
                _ => {}
            }
        }

        // A Param without a name cannot be looked up
        if let Some(name) = name {
            params.push(Param { name, value });
        }
        Ok(())
    }
}

/// Parse a packet and pull out its observation instant and position
pub fn extract_coords(raw: &RawPacket) -> Result<Coordinates> {
    VoEventPacket::parse(raw)?.coordinates()
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn relative_path(stack: &[String]) -> String {
    stack.get(1..).map(|rest| rest.join("/")).unwrap_or_default()
}
