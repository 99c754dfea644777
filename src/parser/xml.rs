//! Event-driven binding of the cue list schema
//!
//! Elements are matched by local name. Unknown elements are skipped along with
//! everything inside them, and unknown attributes are ignored. A repeated
//! scalar element overwrites the earlier value. Text is kept exactly as written,
//! apart from entity decoding.

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::model::{Cue, CueList, Msg, Production};

const ROOT_ELEMENT: &str = "Production";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("{0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("{0}")]
    Attribute(#[from] AttrError),

    #[error("expected element type <Production> but have <{0}>")]
    UnexpectedRoot(String),

    #[error("document has no root element")]
    EmptyDocument,

    #[error("unexpected end of file inside <{0}>")]
    UnexpectedEof(&'static str),

    #[error("invalid integer '{value}' in {field}")]
    InvalidInteger { field: &'static str, value: String },
}

type Xml<'a> = Reader<&'a [u8]>;

/// Parse a whole cue list document held in memory
pub fn parse_production(bytes: &[u8]) -> Result<Production, ParseError> {
    let source = std::str::from_utf8(bytes)?;
    let mut reader = Reader::from_str(source);

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                check_root(&e)?;
                let mut production = Production::default();
                read_production(&mut reader, &mut production)?;
                log::debug!(
                    "parsed production with {} cue(s)",
                    production.cue_list.cues.len()
                );
                return Ok(production);
            }
            Event::Empty(e) => {
                check_root(&e)?;
                return Ok(Production::default());
            }
            Event::Eof => return Err(ParseError::EmptyDocument),
            // Prolog: declaration, doctype, comments, whitespace
            _ => {}
        }
    }
}

fn check_root(e: &BytesStart) -> Result<(), ParseError> {
    if e.local_name().as_ref() == ROOT_ELEMENT.as_bytes() {
        Ok(())
    } else {
        Err(ParseError::UnexpectedRoot(
            String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        ))
    }
}

fn read_production(reader: &mut Xml, production: &mut Production) -> Result<(), ParseError> {
    loop {
        match reader.read_event()? {
            // A second <CueList> adds to the first one.
            Event::Start(e) if e.local_name().as_ref() == b"CueList" => {
                read_cue_list(reader, &mut production.cue_list)?
            }
            Event::Start(e) => skip(reader, &e)?,
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(ParseError::UnexpectedEof("Production")),
            _ => {}
        }
    }
}

fn read_cue_list(reader: &mut Xml, cue_list: &mut CueList) -> Result<(), ParseError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"Cue" => {
                cue_list.cues.push(read_cue(reader)?)
            }
            Event::Empty(e) if e.local_name().as_ref() == b"Cue" => {
                cue_list.cues.push(Cue::default())
            }
            Event::Start(e) => skip(reader, &e)?,
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(ParseError::UnexpectedEof("CueList")),
            _ => {}
        }
    }
}

fn read_cue(reader: &mut Xml) -> Result<Cue, ParseError> {
    let mut cue = Cue::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"UID" => cue.uid = read_text(reader, "UID")?,
                b"Type" => cue.kind = parse_int("Type", &read_text(reader, "Type")?)?,
                b"Enabled" => cue.enabled = parse_int("Enabled", &read_text(reader, "Enabled")?)?,
                b"Q" => cue.q = read_text(reader, "Q")?,
                b"Description" => cue.description = read_text(reader, "Description")?,
                b"Msg" => {
                    cue.msgs.push(read_msg(&e)?);
                    skip(reader, &e)?;
                }
                _ => skip(reader, &e)?,
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"UID" => cue.uid.clear(),
                b"Type" => cue.kind = 0,
                b"Enabled" => cue.enabled = 0,
                b"Q" => cue.q.clear(),
                b"Description" => cue.description.clear(),
                b"Msg" => cue.msgs.push(read_msg(&e)?),
                _ => {}
            },
            Event::End(_) => return Ok(cue),
            Event::Eof => return Err(ParseError::UnexpectedEof("Cue")),
            _ => {}
        }
    }
}

fn read_msg(e: &BytesStart) -> Result<Msg, ParseError> {
    let mut msg = Msg::default();

    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.local_name().as_ref() {
            b"Name" => msg.name = value.into_owned(),
            b"Command" => msg.command = parse_int("Command", &value)?,
            b"Channel" => msg.channel = parse_int("Channel", &value)?,
            b"Data1" => msg.data1 = parse_int("Data1", &value)?,
            b"Data2" => msg.data2 = parse_int("Data2", &value)?,
            _ => {}
        }
    }

    Ok(msg)
}

/// Character data directly inside the current element, untrimmed.
/// Nested elements are skipped and contribute no text.
fn read_text(reader: &mut Xml, element: &'static str) -> Result<String, ParseError> {
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(&reader.decoder().decode(&c)?),
            Event::Start(e) => skip(reader, &e)?,
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(ParseError::UnexpectedEof(element)),
            _ => {}
        }
    }
}

fn skip(reader: &mut Xml, start: &BytesStart) -> Result<(), ParseError> {
    let end = start.to_end().into_owned();
    reader.read_to_end(end.name())?;
    Ok(())
}

/// Integer fields tolerate surrounding whitespace and read empty text as zero.
fn parse_int(field: &'static str, text: &str) -> Result<i64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| ParseError::InvalidInteger {
        field,
        value: trimmed.to_string(),
    })
}
