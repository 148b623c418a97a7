//! INI translation.
//!
//! Works in two passes over the classified lines. The first pass translates
//! every key with a non-empty value into a per-section table; the second
//! re-emits the file line by line, replacing only those key lines with
//! `key=<translation>`. Comments, blank lines, headers, lines without a
//! usable `key=value` split and keys with empty values come out as they went in.
//!
//! When a key appears before any header, both passes open an implicit
//! `default` section and the output gets a synthesized `[default]` line.

mod classifier;

pub use classifier::{ClassifiedLine, LineKind, classify_line, section_name};

use std::collections::HashMap;

use crate::error::TranslateError;
use crate::translation::{LanguagePair, TranslationService};

/// Section opened implicitly for keys that precede every header.
pub const DEFAULT_SECTION: &str = "default";

const BOM: &str = "\u{feff}";

/// Translated values keyed by section name, then by key.
pub type SectionTable = HashMap<String, HashMap<String, String>>;

/// Tracks the current section while walking classified lines.
///
/// Both passes drive one of these the same way, so a key looked up in the
/// second pass is always under the section it was stored under in the first.
#[derive(Debug, Default)]
struct SectionCursor {
    current: Option<String>,
}

impl SectionCursor {
    /// Moves past `line`. Returns `true` if the line opened the implicit
    /// default section.
    fn advance(&mut self, line: &ClassifiedLine) -> bool {
        if line.kind == LineKind::Section {
            if let Some(name) = section_name(&line.raw) {
                self.current = Some(name.to_string());
            }
            return false;
        }

        if self.current.is_none() && line.translatable_pair().is_some() {
            self.current = Some(DEFAULT_SECTION.to_string());
            return true;
        }

        false
    }

    fn current(&self) -> &str {
        self.current.as_deref().unwrap_or(DEFAULT_SECTION)
    }
}

/// Translates the values of an INI document.
///
/// Requests are issued one at a time in file order. The first failure aborts
/// the whole document. A leading byte order mark is kept in the output but
/// is not part of the first line.
pub async fn translate_ini<S: TranslationService>(
    content: &str,
    languages: &LanguagePair,
    service: &S,
) -> Result<String, TranslateError> {
    let (bom, body) = content
        .strip_prefix(BOM)
        .map_or(("", content), |rest| (BOM, rest));

    let lines: Vec<ClassifiedLine> = body.lines().map(classify_line).collect();
    let table = build_section_table(&lines, languages, service).await?;

    let mut output = String::from(bom);
    output.push_str(&render(&lines, &table));
    Ok(output)
}

/// First pass: translate every key with a value into the section table.
async fn build_section_table<S: TranslationService>(
    lines: &[ClassifiedLine],
    languages: &LanguagePair,
    service: &S,
) -> Result<SectionTable, TranslateError> {
    let mut table = SectionTable::new();
    let mut cursor = SectionCursor::default();

    for line in lines {
        cursor.advance(line);

        if line.kind == LineKind::Section {
            // Re-opening an existing section keeps what it already holds
            table.entry(cursor.current().to_string()).or_default();
            continue;
        }

        if let Some((key, value)) = line.translatable_pair() {
            let translated = service.translate(value, languages).await?;
            table
                .entry(cursor.current().to_string())
                .or_default()
                .insert(key.to_string(), translated);
        }
    }

    Ok(table)
}

/// Second pass: re-emit the lines, substituting translated values.
fn render(lines: &[ClassifiedLine], table: &SectionTable) -> String {
    let mut output = String::new();
    let mut cursor = SectionCursor::default();

    for line in lines {
        if cursor.advance(line) {
            output.push('[');
            output.push_str(DEFAULT_SECTION);
            output.push_str("]\n");
        }

        let translated = line.translatable_pair().and_then(|(key, _)| {
            table
                .get(cursor.current())
                .and_then(|section| section.get(key))
                .map(|value| (key, value))
        });

        match translated {
            Some((key, value)) => {
                output.push_str(key);
                output.push('=');
                output.push_str(value);
            }
            None => output.push_str(&line.raw),
        }
        output.push('\n');
    }

    output
}
