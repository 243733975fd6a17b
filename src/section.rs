//! The section merger: upsert a "Bundle impact" section in a description.
//!
//! This is the correctness core of the crate. Given the current description
//! text and a freshly computed report body, it produces a new description
//! containing exactly one `## Bundle impact` section holding the latest
//! report, with every other section preserved. The function is pure and
//! total: it never fails, regardless of input.
//!
//! A description is treated as Markdown sections introduced by level-2
//! headings. A section boundary is any line beginning with `## `; the
//! bundle impact section is the line exactly equal to [`BUNDLE_IMPACT_HEADING`]
//! (a trailing `\r` is tolerated so CRLF descriptions round-trip).

/// Heading line that identifies the bundle impact section.
pub const BUNDLE_IMPACT_HEADING: &str = "## Bundle impact";

/// Prefix that marks a line as a level-2 section boundary.
const SECTION_PREFIX: &str = "## ";

/// Insert or replace the `## Bundle impact` section in `description`.
///
/// - If the section is absent, it is appended as the last section: the
///   existing text (trailing whitespace trimmed), a blank line, the heading,
///   a blank line, `report_body` verbatim, and a trailing blank line.
/// - If the section is present, only its body is replaced: the span from
///   the end of the heading line to the start of the next `## `-prefixed
///   line (or end of text) becomes a blank line, `report_body`, and a
///   blank line. Everything outside that span is preserved byte-for-byte.
///
/// Re-running with the same report body yields an identical description,
/// which is what makes blind re-invocation from CI safe.
pub fn upsert_bundle_impact(description: &str, report_body: &str) -> String {
    let Some(heading_at) = find_heading(description) else {
        return append_section(description, report_body);
    };

    // End of the heading line (the `\n` itself, or end of text)
    let line_end = description[heading_at..]
        .find('\n')
        .map_or(description.len(), |i| heading_at + i);

    let next = next_section_start(description, line_end);

    // Keep the prefix up to the heading text, dropping a CRLF carriage
    // return so the inserted block uses normalized line endings
    let heading_end = if description[..line_end].ends_with('\r') {
        line_end - 1
    } else {
        line_end
    };

    let mut out = String::with_capacity(description.len() + report_body.len() + 4);
    out.push_str(&description[..heading_end]);
    out.push_str(section_body(report_body).as_str());
    out.push_str(&description[next..]);
    out
}

/// Append a new bundle impact section at the end of the description.
fn append_section(description: &str, report_body: &str) -> String {
    let lead = description.trim_end();

    let mut out = String::with_capacity(lead.len() + report_body.len() + 24);
    if !lead.is_empty() {
        out.push_str(lead);
        out.push_str("\n\n");
    }
    out.push_str(BUNDLE_IMPACT_HEADING);
    out.push_str(section_body(report_body).as_str());
    out
}

/// The normalized body block inserted after the heading line.
///
/// One blank line on each side of the report; an empty report collapses to
/// a single blank line rather than two consecutive ones.
fn section_body(report_body: &str) -> String {
    if report_body.is_empty() {
        "\n\n".to_string()
    } else {
        format!("\n\n{report_body}\n\n")
    }
}

/// Byte offset of the line exactly matching the bundle impact heading.
fn find_heading(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);
        if content == BUNDLE_IMPACT_HEADING {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Byte offset of the next section boundary strictly after the heading line.
///
/// `heading_end` is the offset of the `\n` terminating the heading line (or
/// end of text). Scans forward line by line using the heading grammar, so a
/// boundary is only recognized at the start of a line - never by substring
/// search within the document.
fn next_section_start(text: &str, heading_end: usize) -> usize {
    if heading_end >= text.len() {
        return text.len();
    }

    // Skip past the newline ending the heading line
    let mut offset = heading_end + 1;
    for line in text[offset..].split_inclusive('\n') {
        if line.starts_with(SECTION_PREFIX) {
            return offset;
        }
        offset += line.len();
    }
    text.len()
}
