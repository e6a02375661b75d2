use std::{collections::BTreeMap, str::Chars};

use anyhow::{bail, Context, Result};
use regex::Regex;

const DEFAULT_PATTERN: &str = "[^/]+";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Variable { name: String, pattern: String },
}

/// Parsed route path.
///
/// `segments[0]` is the required part of the path. Every following segment is
/// optional and nested inside the one before it, so `/a/{x}[/{y}[/{z}]]` has
/// three segments.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Vec<Token>>,
}

impl Template {
    pub fn parse(path: &str) -> Result<Self> {
        let without_closing = path.trim_end_matches(']');
        let optionals = path.len() - without_closing.len();
        let segments = tokenize(without_closing)?;
        if segments.len() - 1 != optionals {
            bail!("Number of opening '[' and closing ']' does not match");
        }
        if segments.iter().skip(1).any(Vec::is_empty) {
            bail!("Empty optional part");
        }
        let template = Self { segments };
        let mut seen = Vec::new();
        for name in template.variables() {
            if seen.contains(&name) {
                bail!("Cannot use the same placeholder \"{}\" twice", name);
            }
            seen.push(name);
        }
        if optionals > 0 && seen.is_empty() {
            bail!("Optional segments require at least one placeholder");
        }
        Ok(template)
    }

    /// Variable names in capture group order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().flatten().filter_map(|token| match token {
            Token::Variable { name, .. } => Some(name.as_str()),
            Token::Literal(_) => None,
        })
    }

    pub fn has_optionals(&self) -> bool {
        self.segments.len() > 1
    }

    /// Unanchored regex with one capture group per variable.
    pub fn pattern(&self) -> String {
        let mut pattern = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                pattern.push_str("(?:");
            }
            for token in segment {
                match token {
                    Token::Literal(text) => pattern.push_str(&regex::escape(text)),
                    Token::Variable { pattern: regex, .. } => {
                        pattern.push('(');
                        pattern.push_str(regex);
                        pattern.push(')');
                    }
                }
            }
        }
        pattern.push_str(&")?".repeat(self.segments.len() - 1));
        pattern
    }

    /// Substitutes the placeholders with `values`.
    ///
    /// Fails with the names of the required variables that have no value.
    /// Optional segments are rendered while all their variables are known,
    /// the first incomplete one is dropped together with everything nested in it.
    pub fn render(&self, values: &BTreeMap<String, String>) -> std::result::Result<String, Vec<String>> {
        let value = |name: &str| values.get(name).filter(|value| !value.is_empty());
        let missing = self.segments[0]
            .iter()
            .filter_map(|token| match token {
                Token::Variable { name, .. } if value(name.as_str()).is_none() => Some(name.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(missing);
        }
        let mut path = String::new();
        for segment in &self.segments {
            let complete = segment.iter().all(|token| match token {
                Token::Variable { name, .. } => value(name.as_str()).is_some(),
                Token::Literal(_) => true,
            });
            if !complete {
                break;
            }
            for token in segment {
                match token {
                    Token::Literal(text) => path.push_str(text),
                    Token::Variable { name, .. } => {
                        path.push_str(value(name.as_str()).map(String::as_str).unwrap_or_default())
                    }
                }
            }
        }
        if self.has_optionals() {
            path.truncate(path.trim_end_matches('/').len());
            if path.is_empty() {
                path.push('/');
            }
        }
        Ok(path)
    }
}

fn tokenize(path: &str) -> Result<Vec<Vec<Token>>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    let mut literal = String::new();
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        match c {
            '{' => {
                flush(&mut literal, &mut current);
                current.push(placeholder(&mut chars)?);
            }
            '[' => {
                flush(&mut literal, &mut current);
                segments.push(std::mem::take(&mut current));
            }
            ']' => bail!("Optional segments can only occur at the end of a route"),
            '}' => bail!("Unexpected '}}' outside of a placeholder"),
            c => literal.push(c),
        }
    }
    flush(&mut literal, &mut current);
    segments.push(current);
    Ok(segments)
}

fn flush(literal: &mut String, tokens: &mut Vec<Token>) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

fn placeholder(chars: &mut Chars) -> Result<Token> {
    let mut depth = 0;
    let mut content = String::new();
    loop {
        match chars.next() {
            None => bail!("Unterminated placeholder \"{{{}\"", content),
            Some('}') if depth == 0 => break,
            Some(c) => {
                match c {
                    '{' => depth += 1,
                    '}' => depth -= 1,
                    _ => {}
                }
                content.push(c);
            }
        }
    }
    let (name, pattern) = match content.split_once(':') {
        Some((name, pattern)) => (name.trim(), pattern.trim()),
        None => (content.trim(), ""),
    };
    if !is_valid_name(name) {
        bail!("Invalid placeholder name \"{}\"", name);
    }
    let pattern = if pattern.is_empty() {
        DEFAULT_PATTERN
    } else {
        pattern
    };
    let compiled = Regex::new(pattern)
        .with_context(|| format!("Invalid pattern \"{}\" for placeholder \"{}\"", pattern, name))?;
    if compiled.captures_len() > 1 {
        bail!(
            "Pattern \"{}\" for placeholder \"{}\" contains a capturing group",
            pattern,
            name
        );
    }
    Ok(Token::Variable {
        name: name.to_string(),
        pattern: pattern.to_string(),
    })
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
