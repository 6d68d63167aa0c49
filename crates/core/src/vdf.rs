//! Minimal codec for the VDF (Valve Data Format) subset used by Steam's
//! `libraryconfig.vdf`.
//!
//! The grammar is line-oriented: a bare `"key"` line declares that the
//! next `{ ... }` block is that key's section, `"key" "value"` declares a
//! leaf, and braces open/close sections. Indentation is cosmetic on input;
//! the formatter always regenerates two spaces per nesting level.
//!
//! Supported shapes only: no arrays, comments, includes, or escape
//! sequences. Section key order is preserved through a round trip.

use indexmap::IndexMap;

use crate::error::{CoreError, CoreResult};

/// An ordered mapping of keys to child nodes. The document root is always
/// a section.
pub type VdfSection = IndexMap<String, VdfNode>;

/// A node in a parsed VDF tree.
#[derive(Debug, Clone, PartialEq)]
pub enum VdfNode {
    /// A string value.
    Leaf(String),
    /// A nested block of keys.
    Section(VdfSection),
}

/// Section path that holds the active theme leaf.
const ACTIVE_THEME_PATH: [&str; 2] = ["libraryconfig", "settings"];

/// Leaf key naming the currently applied skin.
const ACTIVE_THEME_KEY: &str = "SteamTheme";

/// Parse VDF text into a root section.
///
/// Empty input produces an empty root section. Re-declaring a key at the
/// same depth overwrites the earlier value (last write wins). Any brace
/// mismatch -- a stray `}`, a `{` with no preceding key, a key never
/// followed by its block, or unclosed sections at end of input -- is a
/// [`CoreError::MalformedConfig`].
pub fn parse(text: &str) -> CoreResult<VdfSection> {
    let mut stack: Vec<VdfSection> = vec![VdfSection::new()];
    let mut keys: Vec<String> = Vec::new();
    let mut pending: Option<String> = None;

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "{" => {
                let key = pending.take().ok_or_else(|| {
                    CoreError::MalformedConfig(format!(
                        "line {}: block opened without a key",
                        lineno + 1
                    ))
                })?;
                keys.push(key);
                stack.push(VdfSection::new());
            }
            "}" => {
                if pending.is_some() {
                    return Err(CoreError::MalformedConfig(format!(
                        "line {}: key declared but never given a block",
                        lineno + 1
                    )));
                }
                if stack.len() == 1 {
                    return Err(CoreError::MalformedConfig(format!(
                        "line {}: unmatched closing brace",
                        lineno + 1
                    )));
                }
                let section = stack.pop().unwrap_or_default();
                let key = keys.pop().unwrap_or_default();
                if let Some(parent) = stack.last_mut() {
                    parent.insert(key, VdfNode::Section(section));
                }
            }
            _ => {
                let tokens = quoted_tokens(line, lineno + 1)?;
                match tokens.len() {
                    1 => {
                        if pending.is_some() {
                            return Err(CoreError::MalformedConfig(format!(
                                "line {}: key declared but never given a block",
                                lineno + 1
                            )));
                        }
                        pending = Some(tokens.into_iter().next().unwrap_or_default());
                    }
                    2 => {
                        if pending.is_some() {
                            return Err(CoreError::MalformedConfig(format!(
                                "line {}: key declared but never given a block",
                                lineno + 1
                            )));
                        }
                        let mut iter = tokens.into_iter();
                        let key = iter.next().unwrap_or_default();
                        let value = iter.next().unwrap_or_default();
                        if let Some(current) = stack.last_mut() {
                            current.insert(key, VdfNode::Leaf(value));
                        }
                    }
                    n => {
                        return Err(CoreError::MalformedConfig(format!(
                            "line {}: expected a key or key-value pair, found {n} tokens",
                            lineno + 1
                        )));
                    }
                }
            }
        }
    }

    if pending.is_some() {
        return Err(CoreError::MalformedConfig(
            "key declared but never given a block".into(),
        ));
    }
    if stack.len() != 1 {
        return Err(CoreError::MalformedConfig(format!(
            "{} unclosed section(s) at end of input",
            stack.len() - 1
        )));
    }

    Ok(stack.pop().unwrap_or_default())
}

/// Extract the quoted tokens from a single line.
///
/// Only whitespace may appear between tokens; an unterminated quote or
/// stray unquoted text is malformed.
fn quoted_tokens(line: &str, lineno: usize) -> CoreResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars();

    loop {
        match chars.next() {
            None => break,
            Some(c) if c.is_whitespace() => continue,
            Some('"') => {
                let mut token = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '"' {
                        closed = true;
                        break;
                    }
                    token.push(c);
                }
                if !closed {
                    return Err(CoreError::MalformedConfig(format!(
                        "line {lineno}: unterminated quoted string"
                    )));
                }
                tokens.push(token);
            }
            Some(c) => {
                return Err(CoreError::MalformedConfig(format!(
                    "line {lineno}: unexpected character '{c}'"
                )));
            }
        }
    }

    Ok(tokens)
}

/// Serialize a section back to VDF text with canonical indentation.
///
/// Deterministic for a fixed key order; `parse(format(x))` reproduces `x`
/// for any tree this codec can build.
pub fn format(section: &VdfSection, depth: usize) -> String {
    let mut out = String::new();
    write_section(&mut out, section, depth);
    out
}

fn write_section(out: &mut String, section: &VdfSection, depth: usize) {
    let indent = "  ".repeat(depth);
    for (key, node) in section {
        match node {
            VdfNode::Leaf(value) => {
                out.push_str(&format!("{indent}\"{key}\" \"{value}\"\n"));
            }
            VdfNode::Section(children) => {
                out.push_str(&format!("{indent}\"{key}\"\n{indent}{{\n"));
                write_section(out, children, depth + 1);
                out.push_str(&format!("{indent}}}\n"));
            }
        }
    }
}

/// Set the active theme leaf (`libraryconfig.settings.SteamTheme`) in the
/// given config text, creating missing sections along the path.
///
/// Operates on a freshly parsed tree, so the caller's text is never
/// partially mutated. Parse failures surface as
/// [`CoreError::ConfigUpdateFailed`].
pub fn set_active_theme(text: &str, theme_name: &str) -> CoreResult<String> {
    let mut root = parse(text)
        .map_err(|e| CoreError::ConfigUpdateFailed(format!("config parse failed: {e}")))?;

    let mut current = &mut root;
    for segment in ACTIVE_THEME_PATH {
        let node = current
            .entry(segment.to_string())
            .and_modify(|n| {
                // A leaf squatting on a path segment is replaced, matching
                // the codec's last-write-wins rule.
                if matches!(n, VdfNode::Leaf(_)) {
                    *n = VdfNode::Section(VdfSection::new());
                }
            })
            .or_insert_with(|| VdfNode::Section(VdfSection::new()));
        current = match node {
            VdfNode::Section(map) => map,
            VdfNode::Leaf(_) => unreachable!("leaf replaced with section above"),
        };
    }
    current.insert(
        ACTIVE_THEME_KEY.to_string(),
        VdfNode::Leaf(theme_name.to_string()),
    );

    Ok(format(&root, 0))
}

/// Read the active theme leaf from config text.
///
/// Returns an empty string if any path segment is absent or the text does
/// not parse; absence is an expected state, never an error.
pub fn get_active_theme(text: &str) -> String {
    let Ok(root) = parse(text) else {
        return String::new();
    };

    let mut current = &root;
    for segment in ACTIVE_THEME_PATH {
        match current.get(segment) {
            Some(VdfNode::Section(map)) => current = map,
            _ => return String::new(),
        }
    }
    match current.get(ACTIVE_THEME_KEY) {
        Some(VdfNode::Leaf(value)) => value.clone(),
        _ => String::new(),
    }
}
