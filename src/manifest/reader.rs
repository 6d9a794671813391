//! Manifest text reader.
//!
//! Turns manifest bytes into a [`Manifest`]. The main section runs up to the first blank line;
//! every following block of lines is an entry section introduced by a `Name` header. Values
//! folded over continuation lines are reassembled as bytes and decoded once complete.

use super::{
    attributes::Attributes, config::ManifestConfig, name::AttributeName, Manifest,
    MAX_LINE_LENGTH, NAME,
};
use crate::{
    file::parser::{Line, Parser},
    Result,
};

/// A decoded header together with the line it started on.
struct Header {
    name: AttributeName,
    value: String,
    line: usize,
}

/// A header whose value may still grow through continuation lines.
struct PendingHeader {
    name: AttributeName,
    value: Vec<u8>,
    line: usize,
}

impl PendingHeader {
    fn finish(self) -> Result<Header> {
        let value = String::from_utf8(self.value).map_err(|e| {
            malformed_error!(
                "Value of header '{}' at line {} is not valid UTF-8: {}",
                self.name,
                self.line,
                e
            )
        })?;

        Ok(Header {
            name: self.name,
            value,
            line: self.line,
        })
    }
}

pub(crate) fn read(data: &[u8], config: &ManifestConfig) -> Result<Manifest> {
    if data.len() > config.max_manifest_size {
        return Err(malformed_error!(
            "Manifest of {} bytes exceeds the limit of {} bytes",
            data.len(),
            config.max_manifest_size
        ));
    }

    let mut parser = Parser::new(data);
    let mut manifest = Manifest::new();

    let main = read_section(&mut parser, config)?;
    manifest.main = collect(main, config)?;

    loop {
        while let Some(line) = parser.peek_line().filter(Line::is_blank) {
            check_line(&line, config)?;
            parser.next_line();
        }

        if !parser.has_more_data() {
            break;
        }

        let mut headers = read_section(&mut parser, config)?.into_iter();
        let entry_name = match headers.next() {
            Some(header) if header.name.matches(NAME) => header.value,
            Some(header) => {
                return Err(malformed_error!(
                    "Entry section at line {} must start with a Name header, found '{}'",
                    header.line,
                    header.name
                ))
            }
            None => break,
        };

        let attributes = collect(headers, config)?;
        manifest.entry_mut(&entry_name).merge(attributes);
    }

    Ok(manifest)
}

/// Read header lines up to and including the next blank line, or to the end of input.
fn read_section(parser: &mut Parser<'_>, config: &ManifestConfig) -> Result<Vec<Header>> {
    let mut headers = Vec::new();
    let mut pending: Option<PendingHeader> = None;

    while let Some(line) = parser.next_line() {
        check_line(&line, config)?;

        if line.is_blank() {
            break;
        }

        if line.is_continuation() {
            let Some(header) = pending.as_mut() else {
                return Err(malformed_error!(
                    "Continuation line {} does not follow a header",
                    line.number
                ));
            };
            header.value.extend_from_slice(&line.content[1..]);
            continue;
        }

        if let Some(header) = pending.take() {
            headers.push(header.finish()?);
        }
        pending = Some(parse_header_line(&line)?);
    }

    if let Some(header) = pending {
        headers.push(header.finish()?);
    }

    Ok(headers)
}

fn parse_header_line(line: &Line<'_>) -> Result<PendingHeader> {
    let Some(colon) = line.content.iter().position(|&b| b == b':') else {
        return Err(malformed_error!(
            "Invalid header field at line {}: missing ':'",
            line.number
        ));
    };

    if line.content.get(colon + 1) != Some(&b' ') {
        return Err(malformed_error!(
            "Invalid header field at line {}: ':' must be followed by a space",
            line.number
        ));
    }

    let name = std::str::from_utf8(&line.content[..colon]).map_err(|_| {
        malformed_error!("Header name at line {} is not valid UTF-8", line.number)
    })?;

    Ok(PendingHeader {
        name: AttributeName::new(name)?,
        value: line.content[colon + 2..].to_vec(),
        line: line.number,
    })
}

fn check_line(line: &Line<'_>, config: &ManifestConfig) -> Result<()> {
    if config.enforce_line_length && line.content.len() > MAX_LINE_LENGTH {
        return Err(malformed_error!(
            "Line {} is {} bytes long, the limit is {}",
            line.number,
            line.content.len(),
            MAX_LINE_LENGTH
        ));
    }

    if config.require_trailing_newline && !line.terminated {
        return Err(malformed_error!(
            "Line {} is not terminated by a line break",
            line.number
        ));
    }

    Ok(())
}

fn collect(
    headers: impl IntoIterator<Item = Header>,
    config: &ManifestConfig,
) -> Result<Attributes> {
    let mut attributes = Attributes::new();

    for header in headers {
        if config.reject_duplicate_headers && attributes.contains(header.name.as_str()) {
            return Err(malformed_error!(
                "Duplicate header '{}' at line {}",
                header.name,
                header.line
            ));
        }
        attributes.insert_name(header.name, header.value);
    }

    Ok(attributes)
}
