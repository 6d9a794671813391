//! Manifest text writer.
//!
//! Emits the main section (with `Manifest-Version` first when present), a blank line, then one
//! block per entry section. Lines are folded at 72 bytes on UTF-8 character boundaries and
//! terminated with `CR LF`.

use std::io::Write;

use super::{Attributes, Manifest, MANIFEST_VERSION, MAX_LINE_LENGTH, NAME};
use crate::Result;

const LINE_BREAK: &[u8] = b"\r\n";

pub(crate) fn write<W: Write>(manifest: &Manifest, out: &mut W) -> Result<()> {
    let main = manifest.main_attributes();

    if let Some((name, value)) = main.iter().find(|(name, _)| name.matches(MANIFEST_VERSION)) {
        write_header(out, name.as_str(), value)?;
    }
    write_attributes(out, main, Some(MANIFEST_VERSION))?;
    out.write_all(LINE_BREAK)?;

    // Entry attributes may hold a Name header of their own, it follows the opening line
    for (entry, attributes) in manifest.entries() {
        write_header(out, NAME, entry)?;
        write_attributes(out, attributes, None)?;
        out.write_all(LINE_BREAK)?;
    }

    Ok(())
}

fn write_attributes<W: Write>(
    out: &mut W,
    attributes: &Attributes,
    skip: Option<&str>,
) -> Result<()> {
    for (name, value) in attributes.iter() {
        if skip.is_some_and(|skip| name.matches(skip)) {
            continue;
        }
        write_header(out, name.as_str(), value)?;
    }
    Ok(())
}

/// Write `name: value`, folding into continuation lines so no line exceeds 72 bytes.
fn write_header<W: Write>(out: &mut W, name: &str, value: &str) -> Result<()> {
    let line = format!("{}: {}", name, value);
    let mut rest = line.as_str();
    let mut limit = MAX_LINE_LENGTH;

    loop {
        let split = fold_point(rest, limit);
        let (chunk, tail) = rest.split_at(split);

        out.write_all(chunk.as_bytes())?;
        out.write_all(LINE_BREAK)?;

        if tail.is_empty() {
            return Ok(());
        }

        out.write_all(b" ")?;
        rest = tail;
        // continuation lines spend one byte on the leading space
        limit = MAX_LINE_LENGTH - 1;
    }
}

/// Largest char boundary of `text` not beyond `limit`.
fn fold_point(text: &str, limit: usize) -> usize {
    if text.len() <= limit {
        return text.len();
    }

    let mut split = limit;
    while !text.is_char_boundary(split) {
        split -= 1;
    }
    split
}
