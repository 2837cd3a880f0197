use crate::parser::types::*;

/// Tags whose first word is a type.
const TYPED_TAGS: &[&str] = &["param", "return", "var", "throws", "property"];

/// Typed tags that may name a `$variable` after the type.
const VARIABLE_TAGS: &[&str] = &["param", "var", "property"];

/// Splits raw doc-comments into descriptions and `@tags`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocParser;

impl DocParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw: &str) -> DocBlock {
        let mut description_lines = Vec::new();
        let mut tags: Vec<DocTag> = Vec::new();

        for line in raw.lines().map(strip_comment_markers) {
            if let Some(rest) = line.strip_prefix('@') {
                tags.push(self.parse_tag(rest));
            } else if let Some(tag) = tags.last_mut() {
                // Continuation of the previous tag
                if !line.is_empty() {
                    if !tag.description.is_empty() {
                        tag.description.push(' ');
                    }
                    tag.description.push_str(line);
                }
            } else {
                description_lines.push(line);
            }
        }

        let (short_description, long_description) = split_description(&description_lines);

        DocBlock {
            short_description,
            long_description,
            tags,
        }
    }

    fn parse_tag(&self, line: &str) -> DocTag {
        let (name, rest) = split_word(line);
        let name = match name {
            "returns" => "return",
            other => other,
        };

        let mut tag = DocTag {
            name: name.to_string(),
            ty: String::new(),
            variable: None,
            description: String::new(),
        };

        if !TYPED_TAGS.contains(&name) {
            tag.description = rest.to_string();
            return tag;
        }

        let (ty, mut rest) = split_word(rest);
        tag.ty = ty.to_string();

        if VARIABLE_TAGS.contains(&name) && rest.starts_with('$') {
            let (variable, remainder) = split_word(rest);
            tag.variable = Some(variable.trim_start_matches('$').to_string());
            rest = remainder;
        }

        tag.description = rest.to_string();
        tag
    }
}

/// Removes `/**`, `*/`, leading `*`, `///` and `//!` from one comment line.
fn strip_comment_markers(line: &str) -> &str {
    let mut line = line.trim();

    if let Some(rest) = line.strip_prefix("/**").or_else(|| line.strip_prefix("/*")) {
        line = rest;
    }
    if let Some(rest) = line.strip_suffix("*/") {
        line = rest;
    }
    line = line.trim();

    if let Some(rest) = line.strip_prefix("///").or_else(|| line.strip_prefix("//!")) {
        line = rest;
    } else if let Some(rest) = line.strip_prefix('*') {
        line = rest;
    }

    line.trim()
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

/// First paragraph becomes the short description, the rest the long one.
fn split_description(lines: &[&str]) -> (String, String) {
    let mut lines = lines.iter().copied().skip_while(|line| line.is_empty());

    let short: Vec<&str> = lines.by_ref().take_while(|line| !line.is_empty()).collect();
    let long: Vec<&str> = lines.skip_while(|line| line.is_empty()).collect();

    (short.join(" "), long.join("\n").trim_end().to_string())
}
