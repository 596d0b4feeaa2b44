//! Text serialization for Colormap
//!
//! # Format
//!
//! ```text
//! \nColormap: N colors\n
//! Color    R-val    G-val    B-val   Alpha\n
//! ----------------------------------------\n
//!   0       R        G        B        A\n
//!   ...
//! \n
//! ```
//!
//! The entry index column is written for readability and ignored on read;
//! entries are restored in file order.

use super::{Colormap, MAX_ENTRIES, RgbaQuad};
use crate::error::{Error, Result};
use std::io::{Read, Write};

const HEADER_PREFIX: &str = "Colormap:";

/// Upper bound on accepted input; a full table is a few kilobytes.
const MAX_INPUT_SIZE: usize = 64 * 1024;

impl Colormap {
    /// Write the colormap as text.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "\n{HEADER_PREFIX} {} colors", self.len())?;
        writeln!(writer, "Color    R-val    G-val    B-val   Alpha")?;
        writeln!(writer, "----------------------------------------")?;
        for (i, c) in self.colors().iter().enumerate() {
            writeln!(
                writer,
                "{i:3}       {r:3}      {g:3}      {b:3}      {a:3}",
                r = c.red,
                g = c.green,
                b = c.blue,
                a = c.alpha,
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Write the colormap to a byte vector.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to_writer(&mut buf)?;
        Ok(buf)
    }

    /// Read a colormap from a reader.
    pub fn read_from_reader(reader: &mut impl Read) -> Result<Self> {
        let mut buf = Vec::new();
        reader
            .take((MAX_INPUT_SIZE + 1) as u64)
            .read_to_end(&mut buf)?;
        if buf.len() > MAX_INPUT_SIZE {
            return Err(Error::DecodeError(format!(
                "input exceeds {MAX_INPUT_SIZE} bytes"
            )));
        }
        Self::read_from_bytes(&buf)
    }

    /// Read a colormap from a byte slice.
    pub fn read_from_bytes(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::DecodeError(format!("invalid UTF-8: {e}")))?;
        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty());

        let ncolors = lines
            .by_ref()
            .find_map(|l| l.strip_prefix(HEADER_PREFIX))
            .ok_or_else(|| Error::DecodeError("colormap header not found".into()))
            .and_then(parse_count)?;

        let mut cmap = Colormap::new();
        let mut entries = lines.filter(|l| !l.starts_with("Color") && !l.starts_with("---"));
        for i in 0..ncolors {
            let line = entries.next().ok_or_else(|| {
                Error::DecodeError(format!("expected {ncolors} entries, found {i}"))
            })?;
            cmap.add_color(parse_entry(line)?)?;
        }
        Ok(cmap)
    }
}

/// Parse " N colors" following the header prefix.
fn parse_count(rest: &str) -> Result<usize> {
    let count = rest.trim().trim_end_matches("colors").trim();
    let n: usize = count
        .parse()
        .map_err(|e| Error::DecodeError(format!("bad color count '{count}': {e}")))?;
    if n > MAX_ENTRIES {
        return Err(Error::DecodeError(format!(
            "color count {n} exceeds {MAX_ENTRIES}"
        )));
    }
    Ok(n)
}

/// Parse "i  R  G  B  A".
fn parse_entry(line: &str) -> Result<RgbaQuad> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(Error::DecodeError(format!(
            "invalid color entry '{line}': expected 5 fields, got {}",
            fields.len()
        )));
    }
    let component = |s: &str| {
        s.parse::<u8>()
            .map_err(|e| Error::DecodeError(format!("bad component '{s}' in '{line}': {e}")))
    };
    Ok(RgbaQuad::new(
        component(fields[1])?,
        component(fields[2])?,
        component(fields[3])?,
        component(fields[4])?,
    ))
}
