//! The line protocol spoken by the native key servers.
//!
//! Key server to bridge, one event per line:
//! ```text
//! KEYBOARD,DOWN,<code>,<scan>,<x>,<y>,<id>     (LineLayout::WithScanCode)
//! MOUSE,UP,<code>,<x>,<y>,<id>                 (LineLayout::CodeOnly)
//! ```
//! Bridge to key server, one acknowledgement per decoded event:
//! ```text
//! <0|1>,<id>
//! ```
//! where `1` asks the key server to stop the event from reaching other applications.
//!
//! Fields are not escaped. Every field is numeric or an enumerated token, so embedded commas are
//! treated as a malformed line.

use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::warn;

use crate::dispatch::Propagation;
use crate::error::KeyBridgeError;
use crate::event::InputDevice;
use crate::KeyBridgeResult;

/// Lines longer than this without a newline are dropped.
pub const MAX_LINE_LEN: usize = 4096;

/// The field layout a key server uses for its event lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLayout {
    /// `KIND,DIR,code,scan,x,y,id`
    WithScanCode,
    /// `KIND,DIR,code,x,y,id`; the scan code is the key code.
    CodeOnly,
}

impl LineLayout {
    pub fn field_count(self) -> usize {
        match self {
            LineLayout::WithScanCode => 7,
            LineLayout::CodeOnly => 6,
        }
    }
}

/// One decoded event line, before canonicalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    pub device: InputDevice,
    pub code: u32,
    pub scan_code: u32,
    pub is_down: bool,
    pub location: Option<(f64, f64)>,
    /// Echoed back verbatim in the acknowledgement.
    pub correlation_id: String,
    pub raw_line: String,
}

/// Decode a single line.
///
/// Returns `Ok(None)` for blank lines.
pub fn decode_line(layout: LineLayout, line: &str) -> KeyBridgeResult<Option<RawEvent>> {
    let compact = line
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();

    if compact.is_empty() {
        return Ok(None);
    }

    let fields = compact.split(',').collect::<Vec<_>>();

    if fields.len() != layout.field_count() {
        return Err(KeyBridgeError::malformed(
            line,
            format!(
                "expected {} fields, found {}",
                layout.field_count(),
                fields.len()
            ),
        ));
    }

    let device = match fields[0] {
        "KEYBOARD" => InputDevice::Keyboard,
        "MOUSE" => InputDevice::Mouse,
        other => {
            return Err(KeyBridgeError::malformed(
                line,
                format!("unknown device {other:?}"),
            ))
        }
    };

    let is_down = match fields[1] {
        "DOWN" => true,
        "UP" => false,
        other => {
            return Err(KeyBridgeError::malformed(
                line,
                format!("unknown key state {other:?}"),
            ))
        }
    };

    let code = parse_code(line, fields[2])?;

    let (scan_code, x, y, id) = match layout {
        LineLayout::WithScanCode => (parse_code(line, fields[3])?, fields[4], fields[5], fields[6]),
        LineLayout::CodeOnly => (code, fields[3], fields[4], fields[5]),
    };

    if id.is_empty() {
        return Err(KeyBridgeError::malformed(line, "missing correlation id"));
    }

    Ok(Some(RawEvent {
        device,
        code,
        scan_code,
        is_down,
        location: parse_location(line, x, y)?,
        correlation_id: id.to_owned(),
        raw_line: line.trim_end_matches('\r').to_owned(),
    }))
}

fn parse_code(line: &str, field: &str) -> KeyBridgeResult<u32> {
    field
        .parse()
        .map_err(|e| KeyBridgeError::malformed(line, format!("bad code {field:?}: {e}")))
}

fn parse_location(line: &str, x: &str, y: &str) -> KeyBridgeResult<Option<(f64, f64)>> {
    if x.is_empty() && y.is_empty() {
        return Ok(None);
    }

    let parse = |field: &str| {
        field
            .parse::<f64>()
            .map_err(|e| KeyBridgeError::malformed(line, format!("bad coordinate {field:?}: {e}")))
    };

    Ok(Some((parse(x)?, parse(y)?)))
}

/// The bridge's decision for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub propagation: Propagation,
    pub correlation_id: String,
}

impl Ack {
    pub fn new(propagation: Propagation, correlation_id: impl Into<String>) -> Self {
        Self {
            propagation,
            correlation_id: correlation_id.into(),
        }
    }

    /// The acknowledgement line, including the trailing newline.
    pub fn to_line(&self) -> String {
        encode_ack(self.propagation, &self.correlation_id)
    }
}

/// Encode an acknowledgement line: `1,<id>\n` to suppress the event, `0,<id>\n` to let it through.
pub fn encode_ack(propagation: Propagation, correlation_id: &str) -> String {
    let flag = match propagation {
        Propagation::Stop => '1',
        Propagation::Continue => '0',
    };

    format!("{flag},{correlation_id}\n")
}

/// A [`Decoder`] for event lines and an [`Encoder`] for acknowledgements.
///
/// Incomplete trailing lines stay buffered until their newline arrives. Malformed lines are
/// logged and skipped so that one bad line cannot end the event stream.
#[derive(Debug, Clone)]
pub struct KeyLineCodec {
    layout: LineLayout,
    // Where to resume the newline search in the read buffer.
    next_index: usize,
    // Inside an overlong line: drop everything up to the next newline.
    is_discarding: bool,
}

impl KeyLineCodec {
    pub fn new(layout: LineLayout) -> Self {
        Self {
            layout,
            next_index: 0,
            is_discarding: false,
        }
    }

    fn decode_bytes(&self, line: &[u8]) -> Option<RawEvent> {
        let result = match std::str::from_utf8(line) {
            Ok(text) => decode_line(self.layout, text),
            Err(e) => Err(KeyBridgeError::malformed(
                &String::from_utf8_lossy(line),
                e.to_string(),
            )),
        };

        result.unwrap_or_else(|err| {
            warn!(error = %err, "skipping key server output");
            None
        })
    }
}

impl Decoder for KeyLineCodec {
    type Item = RawEvent;
    type Error = KeyBridgeError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<RawEvent>, KeyBridgeError> {
        loop {
            let newline = buf[self.next_index..].iter().position(|b| *b == b'\n');

            let Some(offset) = newline else {
                if self.is_discarding {
                    buf.clear();
                    self.next_index = 0;
                } else if buf.len() > MAX_LINE_LEN {
                    warn!(
                        error = %KeyBridgeError::LineTooLong(MAX_LINE_LEN),
                        "skipping key server output"
                    );
                    buf.clear();
                    self.next_index = 0;
                    self.is_discarding = true;
                } else {
                    self.next_index = buf.len();
                }

                return Ok(None);
            };

            if self.is_discarding {
                buf.advance(self.next_index + offset + 1);
                self.next_index = 0;
                self.is_discarding = false;
                continue;
            }

            let end = self.next_index + offset;
            self.next_index = 0;

            let line = buf.split_to(end + 1);

            if let Some(event) = self.decode_bytes(&line[..end]) {
                return Ok(Some(event));
            }
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<RawEvent>, KeyBridgeError> {
        if let Some(event) = self.decode(buf)? {
            return Ok(Some(event));
        }

        if buf.is_empty() || self.is_discarding {
            buf.clear();
            self.next_index = 0;
            self.is_discarding = false;
            return Ok(None);
        }

        // The key server exited halfway through a line, or without a final newline.
        let line = buf.split();
        self.next_index = 0;

        Ok(self.decode_bytes(&line))
    }
}

impl Encoder<Ack> for KeyLineCodec {
    type Error = KeyBridgeError;

    fn encode(&mut self, ack: Ack, dst: &mut BytesMut) -> Result<(), KeyBridgeError> {
        dst.extend_from_slice(ack.to_line().as_bytes());

        Ok(())
    }
}
