//! Line-level model of the startup file.
//!
//! Every line is either a bookmark record (`hash -d NAME="TARGET"`) or an
//! opaque line. Opaque lines must survive rewrites byte for byte and in
//! their original relative order; record lines are owned by bom and are
//! regenerated on every write.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RcLine {
    /// A `hash -d` declaration.
    Record { name: String, target: String },
    /// Anything else, preserved verbatim.
    Opaque(String),
}

impl RcLine {
    pub(crate) fn parse(raw: &str) -> RcLine {
        match parse_record(raw) {
            Some((name, target)) => RcLine::Record { name, target },
            None => RcLine::Opaque(raw.to_string()),
        }
    }

    pub(crate) fn is_record(&self) -> bool {
        matches!(self, RcLine::Record { .. })
    }
}

/// Canonical record syntax. The target is always quoted on write even
/// though quotes are optional on read.
pub(crate) fn format_record(name: &str, target: &str) -> String {
    format!("hash -d {name}=\"{target}\"")
}

// Accepted shape: optional leading whitespace, `hash`, whitespace, `-d`,
// whitespace, a non-empty name from [A-Za-z0-9_-], `=`, then the rest of
// the line as the target with optional surrounding quotes.
fn parse_record(raw: &str) -> Option<(String, String)> {
    let rest = raw.trim_start();
    let rest = rest.strip_prefix("hash")?;
    let rest = strip_whitespace(rest)?;
    let rest = rest.strip_prefix("-d")?;
    let rest = strip_whitespace(rest)?;
    let (name, rest) = take_name(rest)?;
    let rest = rest.strip_prefix('=')?;
    let value = rest.trim_end();
    if value.is_empty() {
        return None;
    }
    let target = value.trim_matches('"');
    Some((name.to_string(), target.to_string()))
}

// At least one whitespace character.
fn strip_whitespace(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    if trimmed.len() == s.len() {
        return None;
    }
    Some(trimmed)
}

fn take_name(s: &str) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some((&s[..end], &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, target: &str) -> RcLine {
        RcLine::Record {
            name: name.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn parse_quoted_record() {
        assert_eq!(
            RcLine::parse("hash -d proj=\"/home/u/project/\""),
            record("proj", "/home/u/project/")
        );
    }

    #[test]
    fn parse_unquoted_record() {
        assert_eq!(
            RcLine::parse("hash -d proj=/home/u/project/"),
            record("proj", "/home/u/project/")
        );
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        assert_eq!(
            RcLine::parse("  hash   -d   proj=\"/p/\""),
            record("proj", "/p/")
        );
    }

    #[test]
    fn parse_target_may_contain_spaces() {
        assert_eq!(
            RcLine::parse("hash -d docs=\"/mnt/my docs/\""),
            record("docs", "/mnt/my docs/")
        );
    }

    #[test]
    fn parse_name_may_contain_dash_and_underscore() {
        assert_eq!(RcLine::parse("hash -d a-b_2=\"/p/\""), record("a-b_2", "/p/"));
    }

    #[test]
    fn comment_is_opaque() {
        let raw = "# hash -d proj=\"/p/\" (disabled)";
        assert_eq!(RcLine::parse(raw), RcLine::Opaque(raw.to_string()));
    }

    #[test]
    fn unrelated_shell_is_opaque() {
        for raw in [
            "export PATH=$PATH:/usr/local/bin",
            "alias ll='ls -l'",
            "hash",
            "hash -d",
            "hash -d name",
            "hash -d name=",
            "hash -r",
            "hashes -d name=\"/p/\"",
            "hash-d name=\"/p/\"",
        ] {
            assert_eq!(RcLine::parse(raw), RcLine::Opaque(raw.to_string()), "{raw}");
        }
    }

    #[test]
    fn name_stops_at_first_foreign_character() {
        // A space inside the name position breaks the `=` expectation.
        let raw = "hash -d two words=\"/p/\"";
        assert_eq!(RcLine::parse(raw), RcLine::Opaque(raw.to_string()));
    }

    #[test]
    fn format_then_parse_round_trips() {
        let line = format_record("proj", "/home/u/project/");
        assert_eq!(line, "hash -d proj=\"/home/u/project/\"");
        assert_eq!(RcLine::parse(&line), record("proj", "/home/u/project/"));
    }
}
