// src/domain/naming.rs
//! Field-name conventions shared by error projection and payload serialisation.
//!
//! Every transform here is idempotent: applying it to its own output returns
//! the same string. Keys that differ only in spelling ("UserName",
//! "user_name") may collapse onto the same normalised key; callers decide how
//! to resolve that.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::OnceLock};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamingConvention {
    #[default]
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "kebab-case")]
    KebabCase,
    #[serde(rename = "preserve")]
    Preserve,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown naming convention: {0}")]
pub struct UnknownConvention(pub String);

impl NamingConvention {
    pub fn apply(self, key: &str) -> String {
        match self {
            Self::CamelCase => to_camel_case(key),
            Self::PascalCase => to_pascal_case(key),
            Self::SnakeCase => join_words(key, '_'),
            Self::KebabCase => join_words(key, '-'),
            Self::Preserve => key.to_owned(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::PascalCase => "PascalCase",
            Self::SnakeCase => "snake_case",
            Self::KebabCase => "kebab-case",
            Self::Preserve => "preserve",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingConvention {
    type Err = UnknownConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camelcase" | "camel" => Ok(Self::CamelCase),
            "pascalcase" | "pascal" => Ok(Self::PascalCase),
            "snake_case" | "snake" => Ok(Self::SnakeCase),
            "kebab-case" | "kebab" => Ok(Self::KebabCase),
            "preserve" | "none" => Ok(Self::Preserve),
            _ => Err(UnknownConvention(s.to_owned())),
        }
    }
}

static PROCESS_CONVENTION: OnceLock<NamingConvention> = OnceLock::new();

/// Install the process-wide convention. Only the first call wins; later calls
/// report whether they agree with the installed value.
pub fn install(convention: NamingConvention) -> bool {
    let installed = *PROCESS_CONVENTION.get_or_init(|| convention);
    if installed != convention {
        tracing::warn!(
            %installed,
            requested = %convention,
            "naming convention already installed; ignoring"
        );
    }
    installed == convention
}

pub fn current() -> NamingConvention {
    PROCESS_CONVENTION.get().copied().unwrap_or_default()
}

const fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | ' ' | '.')
}

fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split(is_separator).filter(|s| !s.is_empty())
}

fn upper_first(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Uppercase letters with no lowercase form ("ϒ", "𝐀") are left alone
/// everywhere, so they never start or extend a run of capitals.
fn is_capital(c: char) -> bool {
    c.is_uppercase() && !c.to_lowercase().eq(std::iter::once(c))
}

/// Lower the leading run of capitals, keeping the last one when it starts a
/// new word: "URLValue" -> "urlValue", "ID" -> "id".
fn lower_leading(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let mut out = String::with_capacity(segment.len());
    let mut i = 0;
    while i < chars.len() && is_capital(chars[i]) {
        let next_is_lower = chars.get(i + 1).is_some_and(|&c| !is_capital(c));
        if i > 0 && next_is_lower {
            break;
        }
        out.extend(chars[i].to_lowercase());
        i += 1;
    }
    out.extend(&chars[i..]);
    out
}

fn to_camel_case(key: &str) -> String {
    let mut parts = segments(key);
    let Some(first) = parts.next() else {
        return String::new();
    };
    let mut out = lower_leading(first);
    for part in parts {
        out.push_str(&upper_first(part));
    }
    out
}

fn to_pascal_case(key: &str) -> String {
    segments(key).map(upper_first).collect()
}

/// Split on separators and case boundaries ("userID2Name" -> user, id2, name).
fn words(key: &str) -> Vec<String> {
    let mut words = Vec::new();
    for segment in segments(key) {
        let chars: Vec<char> = segment.chars().collect();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            if is_capital(c) && i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                let boundary = prev.is_lowercase()
                    || prev.is_numeric()
                    || (is_capital(prev) && next_is_lower);
                if boundary && !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.extend(c.to_lowercase());
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

fn join_words(key: &str, separator: char) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, word) in words(key).iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(word);
    }
    out
}
