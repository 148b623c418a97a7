//! Line classification for INI files.

/// What a single INI line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only.
    Empty,
    /// Starts with `;` or `#` after trimming.
    Comment,
    /// A `[name]` header. The name is recovered with [`section_name`].
    Section,
    /// A `key=value` pair, split at the first `=` and trimmed on both sides.
    KeyValue { key: String, value: String },
    /// Anything else. Reproduced verbatim and never translated.
    Other,
}

/// One input line together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub raw: String,
}

impl ClassifiedLine {
    /// Returns the key and value when this line carries a value to translate.
    pub fn translatable_pair(&self) -> Option<(&str, &str)> {
        match &self.kind {
            LineKind::KeyValue { key, value } if !key.is_empty() && !value.is_empty() => {
                Some((key.as_str(), value.as_str()))
            }
            _ => None,
        }
    }
}

/// Classifies a single line (without its trailing newline).
pub fn classify_line(line: &str) -> ClassifiedLine {
    let trimmed = line.trim();

    let kind = if trimmed.is_empty() {
        LineKind::Empty
    } else if trimmed.starts_with(';') || trimmed.starts_with('#') {
        LineKind::Comment
    } else if section_name(trimmed).is_some() {
        LineKind::Section
    } else {
        match trimmed.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => LineKind::KeyValue {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            },
            _ => LineKind::Other,
        }
    };

    ClassifiedLine {
        kind,
        raw: line.to_string(),
    }
}

/// Extracts the section name from a `[name]` header line.
pub fn section_name(raw: &str) -> Option<&str> {
    raw.trim().strip_prefix('[')?.strip_suffix(']')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_value(key: &str, value: &str) -> LineKind {
        LineKind::KeyValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_empty_lines() {
        assert_eq!(classify_line("").kind, LineKind::Empty);
        assert_eq!(classify_line("   \t").kind, LineKind::Empty);
    }

    #[test]
    fn test_comments() {
        assert_eq!(classify_line("; semicolon").kind, LineKind::Comment);
        assert_eq!(classify_line("# hash").kind, LineKind::Comment);
        assert_eq!(classify_line("   # indented = still comment").kind, LineKind::Comment);
    }

    #[test]
    fn test_section_headers() {
        let line = classify_line("  [server]  ");
        assert_eq!(line.kind, LineKind::Section);
        assert_eq!(section_name(&line.raw), Some("server"));
        assert_eq!(section_name("[a=b]"), Some("a=b"));
        assert_eq!(section_name("[unclosed"), None);
    }

    #[test]
    fn test_key_value_trimmed() {
        assert_eq!(classify_line("name = My Server ").kind, key_value("name", "My Server"));
    }

    #[test]
    fn test_key_value_splits_on_first_equals() {
        assert_eq!(
            classify_line("query=a=b&c=d").kind,
            key_value("query", "a=b&c=d")
        );
    }

    #[test]
    fn test_key_value_empty_value() {
        let line = classify_line("port=");
        assert_eq!(line.kind, key_value("port", ""));
        assert_eq!(line.translatable_pair(), None);
    }

    #[test]
    fn test_empty_key_is_other() {
        assert_eq!(classify_line("=orphan").kind, LineKind::Other);
        assert_eq!(classify_line("  = orphan").kind, LineKind::Other);
    }

    #[test]
    fn test_other_lines() {
        assert_eq!(classify_line("just some text").kind, LineKind::Other);
    }

    #[test]
    fn test_raw_text_preserved() {
        let line = classify_line("\tname = value  ");
        assert_eq!(line.raw, "\tname = value  ");
        assert_eq!(line.translatable_pair(), Some(("name", "value")));
    }
}
