use crate::analysis::domain::{AnalysisReport, Severity, Violation};
use crate::shared::error::CheckError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// ViolationParser - normalizes Checkstyle's XML report
///
/// Checkstyle writes a flat, machine-generated document:
///
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <checkstyle version="10.12.4">
/// <file name="/abs/path/Foo.java">
/// <error line="1" column="14" severity="error" message="..." source="...Check"/>
/// </file>
/// </checkstyle>
/// ```
///
/// A dedicated scanner over exactly that grammar keeps parse failures precise:
/// every error carries the byte offset where scanning stopped. Violation
/// ordering mirrors the document (file order, then in-file order).
pub struct ViolationParser;

impl ViolationParser {
    /// Read and parse the raw report written by the tool.
    ///
    /// # Errors
    /// - `CheckError::MissingReport` when the file does not exist (the tool
    ///   crashed before writing output)
    /// - `CheckError::Parse` with a byte offset for malformed/truncated input
    pub fn parse(raw_report_path: &Path, threshold: Severity) -> Result<AnalysisReport, CheckError> {
        if !raw_report_path.exists() {
            return Err(CheckError::MissingReport {
                path: raw_report_path.to_path_buf(),
            });
        }
        let content =
            std::fs::read_to_string(raw_report_path).map_err(|e| CheckError::Parse {
                path: raw_report_path.to_path_buf(),
                offset: 0,
                details: format!("Failed to read report: {}", e),
            })?;
        Self::parse_str(&content, raw_report_path, threshold)
    }

    /// Parse report content already in memory.
    pub fn parse_str(
        content: &str,
        raw_report_path: &Path,
        threshold: Severity,
    ) -> Result<AnalysisReport, CheckError> {
        let mut scanner = Scanner::new(content, raw_report_path);
        let violations = scanner.document()?;
        Ok(AnalysisReport::new(violations, threshold))
    }
}

/// Byte-offset scanner for the Checkstyle report grammar.
struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    path: &'a Path,
}

#[derive(Debug)]
struct Tag {
    name: String,
    attributes: HashMap<String, String>,
    self_closing: bool,
    closing: bool,
}

impl<'a> Scanner<'a> {
    fn new(content: &'a str, path: &'a Path) -> Self {
        Self {
            input: content.as_bytes(),
            pos: 0,
            path,
        }
    }

    fn error(&self, offset: usize, details: impl Into<String>) -> CheckError {
        CheckError::Parse {
            path: self.path.to_path_buf(),
            offset,
            details: details.into(),
        }
    }

    fn document(&mut self) -> Result<Vec<Violation>, CheckError> {
        let root = loop {
            match self.next_tag()? {
                Some(tag) if tag.name == "checkstyle" && !tag.closing => break tag,
                Some(tag) => {
                    return Err(self.error(
                        self.pos,
                        format!("Expected <checkstyle> root element, found <{}>", tag.name),
                    ));
                }
                None => {
                    return Err(self.error(self.pos, "Report contains no <checkstyle> element"));
                }
            }
        };
        if root.self_closing {
            // An empty run: <checkstyle version=".."/> carries no files.
            return Ok(Vec::new());
        }

        let mut violations = Vec::new();
        let mut current_file: Option<PathBuf> = None;
        let mut closed = false;

        while let Some(tag) = self.next_tag()? {
            let tag_offset = self.pos;
            match (tag.name.as_str(), tag.closing) {
                ("file", false) => {
                    if current_file.is_some() && !tag.self_closing {
                        return Err(self.error(tag_offset, "Nested <file> element"));
                    }
                    let name = tag.attributes.get("name").ok_or_else(|| {
                        self.error(tag_offset, "<file> element is missing the 'name' attribute")
                    })?;
                    if !tag.self_closing {
                        current_file = Some(PathBuf::from(name));
                    }
                }
                ("file", true) => {
                    if current_file.take().is_none() {
                        return Err(self.error(tag_offset, "</file> without an open <file>"));
                    }
                }
                ("error", false) => {
                    let file = current_file.clone().ok_or_else(|| {
                        self.error(tag_offset, "<error> element outside of a <file>")
                    })?;
                    violations.push(self.violation(file, &tag, tag_offset)?);
                    if !tag.self_closing {
                        self.expect_closing("error")?;
                    }
                }
                ("exception", false) => {
                    // Checkstyle reports internal check failures inline; they
                    // carry no rule metadata, so skip past the element body.
                    if !tag.self_closing {
                        self.skip_until_closing("exception")?;
                    }
                }
                ("checkstyle", true) => {
                    closed = true;
                    break;
                }
                (other, _) => {
                    return Err(self.error(tag_offset, format!("Unexpected element <{}>", other)));
                }
            }
        }

        if !closed {
            return Err(self.error(self.pos, "Unexpected end of report: missing </checkstyle>"));
        }
        if current_file.is_some() {
            return Err(self.error(self.pos, "Unexpected end of report: missing </file>"));
        }
        Ok(violations)
    }

    fn violation(
        &self,
        file: PathBuf,
        tag: &Tag,
        offset: usize,
    ) -> Result<Violation, CheckError> {
        let severity_raw = tag.attributes.get("severity").ok_or_else(|| {
            self.error(offset, "<error> element is missing the 'severity' attribute")
        })?;
        let severity = Severity::parse(severity_raw).ok_or_else(|| {
            self.error(offset, format!("Unknown severity '{}'", severity_raw))
        })?;
        let message = tag.attributes.get("message").ok_or_else(|| {
            self.error(offset, "<error> element is missing the 'message' attribute")
        })?;
        let rule = tag
            .attributes
            .get("source")
            .cloned()
            .unwrap_or_default();
        let line = tag.attributes.get("line").and_then(|l| l.parse().ok());
        let column = tag.attributes.get("column").and_then(|c| c.parse().ok());

        Ok(Violation {
            file,
            line,
            column,
            rule,
            severity,
            message: message.clone(),
        })
    }

    fn expect_closing(&mut self, name: &str) -> Result<(), CheckError> {
        match self.next_tag()? {
            Some(tag) if tag.closing && tag.name == name => Ok(()),
            _ => Err(self.error(self.pos, format!("Expected </{}>", name))),
        }
    }

    fn skip_until_closing(&mut self, name: &str) -> Result<(), CheckError> {
        loop {
            match self.next_tag()? {
                Some(tag) if tag.closing && tag.name == name => return Ok(()),
                Some(_) => continue,
                None => {
                    return Err(self.error(
                        self.pos,
                        format!("Unexpected end of report inside <{}>", name),
                    ));
                }
            }
        }
    }

    /// Advance to the next tag, skipping text, the XML prolog and comments.
    fn next_tag(&mut self) -> Result<Option<Tag>, CheckError> {
        loop {
            while self.pos < self.input.len() && self.input[self.pos] != b'<' {
                self.pos += 1;
            }
            if self.pos >= self.input.len() {
                return Ok(None);
            }
            let start = self.pos;
            if self.input[self.pos..].starts_with(b"<?") {
                self.skip_past(b"?>", start, "unterminated XML declaration")?;
                continue;
            }
            if self.input[self.pos..].starts_with(b"<!--") {
                self.skip_past(b"-->", start, "unterminated comment")?;
                continue;
            }
            return self.tag(start).map(Some);
        }
    }

    fn skip_past(
        &mut self,
        terminator: &[u8],
        start: usize,
        details: &str,
    ) -> Result<(), CheckError> {
        let haystack = &self.input[self.pos..];
        match haystack
            .windows(terminator.len())
            .position(|w| w == terminator)
        {
            Some(idx) => {
                self.pos += idx + terminator.len();
                Ok(())
            }
            None => Err(self.error(start, details)),
        }
    }

    fn tag(&mut self, start: usize) -> Result<Tag, CheckError> {
        debug_assert_eq!(self.input[self.pos], b'<');
        self.pos += 1;

        let closing = self.peek() == Some(b'/');
        if closing {
            self.pos += 1;
        }

        let name_start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == b'_' || c == b'-' {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == name_start {
            return Err(self.error(start, "Malformed tag: missing element name"));
        }
        let name = String::from_utf8_lossy(&self.input[name_start..self.pos]).into_owned();

        let mut attributes = HashMap::new();
        let mut self_closing = false;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') => {
                    self.pos += 1;
                    if self.peek() != Some(b'>') {
                        return Err(self.error(self.pos, "Expected '>' after '/'"));
                    }
                    self.pos += 1;
                    self_closing = true;
                    break;
                }
                Some(_) => {
                    let (key, value) = self.attribute(start)?;
                    attributes.insert(key, value);
                }
                None => {
                    return Err(self.error(start, format!("Unterminated <{}> tag", name)));
                }
            }
        }

        Ok(Tag {
            name,
            attributes,
            self_closing,
            closing,
        })
    }

    fn attribute(&mut self, tag_start: usize) -> Result<(String, String), CheckError> {
        let key_start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == b'_' || c == b'-' || c == b':' {
                self.pos += 1;
            } else {
                break;
            }
        }
        if self.pos == key_start {
            return Err(self.error(self.pos, "Malformed attribute name"));
        }
        let key = String::from_utf8_lossy(&self.input[key_start..self.pos]).into_owned();

        self.skip_whitespace();
        if self.peek() != Some(b'=') {
            return Err(self.error(self.pos, format!("Expected '=' after attribute '{}'", key)));
        }
        self.pos += 1;
        self.skip_whitespace();

        let quote = match self.peek() {
            Some(q @ (b'"' | b'\'')) => q,
            _ => {
                return Err(self.error(self.pos, "Attribute value must be quoted"));
            }
        };
        self.pos += 1;
        let value_start = self.pos;
        while let Some(c) = self.peek() {
            if c == quote {
                break;
            }
            self.pos += 1;
        }
        if self.peek() != Some(quote) {
            return Err(self.error(tag_start, "Unterminated attribute value"));
        }
        let raw = String::from_utf8_lossy(&self.input[value_start..self.pos]).into_owned();
        self.pos += 1;

        Ok((key, unescape_xml(&raw)))
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }
}

/// Resolve the five predefined XML entities plus numeric character
/// references. Unknown entities are kept literally - the message is tool
/// output that must survive verbatim.
fn unescape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp..];
        match after.find(';') {
            Some(semi) => {
                let entity = &after[1..semi];
                match entity {
                    "lt" => out.push('<'),
                    "gt" => out.push('>'),
                    "amp" => out.push('&'),
                    "quot" => out.push('"'),
                    "apos" => out.push('\''),
                    _ => {
                        let decoded = entity
                            .strip_prefix("#x")
                            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                            .or_else(|| entity.strip_prefix('#').and_then(|d| d.parse().ok()))
                            .and_then(char::from_u32);
                        match decoded {
                            Some(c) => out.push(c),
                            None => out.push_str(&after[..=semi]),
                        }
                    }
                }
                rest = &after[semi + 1..];
            }
            None => {
                out.push_str(after);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}
