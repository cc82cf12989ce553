//! Text extraction: uploaded binary content to plaintext.
//!
//! PDF extraction goes through `pdf-extract`; DOCX is unzipped and the main
//! document part is tag-stripped. Extraction failures degrade to an empty
//! string here and are logged; the handler turns empty text into the 400
//! the client sees. Plain-text decoding tries UTF-8 first and falls back to
//! Latin-1 for `.txt`/`.md`, while unknown extensions get a strict UTF-8
//! decode so genuinely binary content is rejected instead of garbled.

use std::io::Read;
use std::path::Path;

use tracing::error;

/// Extracts plaintext from a spooled upload by extension (`pdf`, `docx`, `doc`).
/// Never errors: anything unreadable comes back as an empty string.
pub fn extract_document_text(path: &Path, ext: &str) -> String {
    let result = match ext {
        "pdf" => pdf_text(path),
        _ => docx_text(path),
    };
    match result {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            error!("text extraction failed for .{ext}: {e:#}");
            String::new()
        }
    }
}

fn pdf_text(path: &Path) -> anyhow::Result<String> {
    Ok(pdf_extract::extract_text(path)?)
}

/// A DOCX file is a zip archive; the visible text lives in
/// `word/document.xml` with `</w:p>` closing each paragraph.
fn docx_text(path: &Path) -> anyhow::Result<String> {
    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;
    Ok(strip_xml_tags(&xml))
}

fn strip_xml_tags(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len() / 2);
    let mut tag = String::new();
    let mut in_tag = false;
    for c in xml.chars() {
        match c {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                if tag == "/w:p" {
                    out.push('\n');
                }
            }
            _ if in_tag => tag.push(c),
            _ => out.push(c),
        }
    }
    decode_entities(&out)
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Lossless decode for `.txt`/`.md`: UTF-8 when valid, Latin-1 otherwise.
pub fn decode_plain_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Strict UTF-8 decode used for unknown extensions; `None` marks the
/// content as binary and the handler rejects it naming the extension.
pub fn decode_strict_utf8(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_string)
}
