//! Textual type spellings
//!
//! The Bundle dictionary and the symbol table both describe types as source
//! text (`java.util.ArrayList<? extends android.os.Parcelable>`, `int[]`).
//! This module turns those spellings into a small tree without touching any
//! type system; resolution happens in the caller against its own oracle.
//!
//! Rules are tried in a fixed order:
//! 1. a spelling containing `<` and ending in `>` is a parameterized type,
//! 2. a spelling ending in `[]` is an array of its prefix,
//! 3. a spelling without `.` is a simple name (primitive keyword, type
//!    variable or default-package class),
//! 4. anything else is a qualified class name.

use std::fmt;

use crate::common::consts::WILDCARD_EXTENDS_PREFIX;
use crate::common::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    Parameterized { container: String, args: Vec<TypeArgSpec> },
    Array(Box<TypeSpec>),
    Simple(String),
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeArgSpec {
    Type(TypeSpec),
    WildcardExtends(TypeSpec),
    Unbounded,
}

impl TypeSpec {
    pub fn parse(spelling: &str) -> Result<TypeSpec> {
        let s = spelling.trim();
        if s.is_empty() {
            return Err(Error::type_spec(spelling, "empty type"));
        }

        if s.contains('<') && s.ends_with('>') {
            return parse_parameterized(s);
        }
        if let Some(component) = s.strip_suffix("[]") {
            return Ok(TypeSpec::Array(Box::new(TypeSpec::parse(component)?)));
        }
        if s.contains('<') || s.contains('>') {
            return Err(Error::type_spec(s, "unbalanced type argument brackets"));
        }
        if !s.contains('.') {
            check_identifier(s, s)?;
            return Ok(TypeSpec::Simple(s.to_string()));
        }
        for segment in s.split('.') {
            check_identifier(s, segment)?;
        }
        Ok(TypeSpec::Named(s.to_string()))
    }

    /// Array nesting depth, 0 for non-array spellings
    pub fn dimensions(&self) -> usize {
        match self {
            TypeSpec::Array(component) => 1 + component.dimensions(),
            _ => 0,
        }
    }
}

fn parse_parameterized(s: &str) -> Result<TypeSpec> {
    let open = s.find('<').ok_or_else(|| Error::type_spec(s, "missing '<'"))?;
    let container = s[..open].trim();
    if container.is_empty() {
        return Err(Error::type_spec(s, "missing container type"));
    }
    for segment in container.split('.') {
        check_identifier(s, segment)?;
    }

    let inner = &s[open + 1..s.len() - 1];
    let args = split_top_level(s, inner)?
        .into_iter()
        .map(|arg| parse_arg(s, arg))
        .collect::<Result<Vec<_>>>()?;

    Ok(TypeSpec::Parameterized { container: container.to_string(), args })
}

fn parse_arg(whole: &str, arg: &str) -> Result<TypeArgSpec> {
    let arg = arg.trim();
    if arg == "?" {
        return Ok(TypeArgSpec::Unbounded);
    }
    if let Some(bound) = arg.strip_prefix(WILDCARD_EXTENDS_PREFIX) {
        return Ok(TypeArgSpec::WildcardExtends(TypeSpec::parse(bound)?));
    }
    if arg.starts_with('?') {
        return Err(Error::type_spec(whole, format!("unsupported wildcard '{}'", arg)));
    }
    Ok(TypeArgSpec::Type(TypeSpec::parse(arg)?))
}

/// Split type arguments on commas that are not nested inside `<...>`
fn split_top_level<'a>(whole: &str, inner: &'a str) -> Result<Vec<&'a str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (idx, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::type_spec(whole, "unbalanced type argument brackets"))?;
            }
            ',' if depth == 0 => {
                parts.push(&inner[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Error::type_spec(whole, "unbalanced type argument brackets"));
    }
    parts.push(&inner[start..]);
    if parts.iter().any(|p| p.trim().is_empty()) {
        return Err(Error::type_spec(whole, "empty type argument"));
    }
    Ok(parts)
}

fn check_identifier(whole: &str, ident: &str) -> Result<()> {
    let mut chars = ident.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::type_spec(whole, format!("invalid identifier '{}'", ident)))
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Parameterized { container, args } => {
                write!(f, "{}<", container)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeSpec::Array(component) => write!(f, "{}[]", component),
            TypeSpec::Simple(name) | TypeSpec::Named(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for TypeArgSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArgSpec::Type(t) => write!(f, "{}", t),
            TypeArgSpec::WildcardExtends(bound) => write!(f, "{}{}", WILDCARD_EXTENDS_PREFIX, bound),
            TypeArgSpec::Unbounded => f.write_str("?"),
        }
    }
}
