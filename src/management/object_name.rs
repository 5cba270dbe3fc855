//! Structured object names
//!
//! An [`ObjectName`] has the form `domain:key=value[,key=value]*` and is the
//! key every exported object is published under. Values may be quoted
//! (`key="a,b"`) to carry characters that would otherwise be separators.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::{RegistrarError, Result};

/// Not allowed in keys or unquoted values
const SPECIAL_CHARS: &[char] = &[':', ',', '=', '*', '?', '"', '\n'];
const DOMAIN_FORBIDDEN: &[char] = &['*', '?', '\n'];

/// Parsed management name.
///
/// Equality, ordering and hashing use the canonical form (properties sorted
/// by key), so `a:x=1,y=2` and `a:y=2,x=1` name the same object.
#[derive(Debug, Clone)]
pub struct ObjectName {
    domain: String,
    properties: Vec<(String, String)>,
    canonical: String,
}

impl ObjectName {
    /// Build a name from a domain and `(key, value)` pairs.
    ///
    /// Each key and value is validated on its own, so a value can never
    /// introduce extra properties. Values containing separators must be
    /// passed through [`ObjectName::quote`] first.
    pub fn new<D, K, V>(domain: D, properties: &[(K, V)]) -> Result<Self>
    where
        D: AsRef<str>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let domain = domain.as_ref();
        validate_domain(domain)?;
        if domain.contains(':') {
            return Err(RegistrarError::malformed_name(
                "invalid character ':' in domain",
            ));
        }
        if properties.is_empty() {
            return Err(RegistrarError::malformed_name(
                "key property list cannot be empty",
            ));
        }

        let mut parsed: Vec<(String, String)> = Vec::with_capacity(properties.len());
        for (key, value) in properties {
            let (key, value) = (key.as_ref(), value.as_ref());
            validate_key(key)?;
            if value.starts_with('"') {
                if split_quoted(value)?.1.is_some() {
                    return Err(RegistrarError::malformed_name(format!(
                        "unexpected characters after quoted value for key {:?}",
                        key
                    )));
                }
            } else {
                validate_unquoted(key, value)?;
            }
            push_property(&mut parsed, key, value)?;
        }

        Ok(Self::from_parts(domain.to_string(), parsed))
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Value of `key` as written, including surrounding quotes if it was quoted.
    pub fn key_property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Properties in the order they were written.
    pub fn key_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn canonical_name(&self) -> &str {
        &self.canonical
    }

    /// Quote arbitrary text so it can be used as a property value.
    ///
    /// ```
    /// use mgmt_registrar::management::ObjectName;
    /// let value = ObjectName::quote("a,b");
    /// assert_eq!(value, "\"a,b\"");
    /// let name = ObjectName::new("app", &[("path", value.as_str())]).unwrap();
    /// assert_eq!(name.key_property("path"), Some("\"a,b\""));
    /// ```
    pub fn quote(text: &str) -> String {
        let mut quoted = String::with_capacity(text.len() + 2);
        quoted.push('"');
        for ch in text.chars() {
            match ch {
                '\\' | '"' | '*' | '?' => {
                    quoted.push('\\');
                    quoted.push(ch);
                }
                '\n' => quoted.push_str("\\n"),
                _ => quoted.push(ch),
            }
        }
        quoted.push('"');
        quoted
    }

    fn from_parts(domain: String, properties: Vec<(String, String)>) -> Self {
        let mut sorted: Vec<&(String, String)> = properties.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        let canonical = format!(
            "{}:{}",
            domain,
            sorted
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(",")
        );
        Self {
            domain,
            properties,
            canonical,
        }
    }
}

impl FromStr for ObjectName {
    type Err = RegistrarError;

    fn from_str(s: &str) -> Result<Self> {
        let (domain, props) = s.split_once(':').ok_or_else(|| {
            RegistrarError::malformed_name("missing ':' between domain and key properties")
        })?;

        validate_domain(domain)?;
        if props.is_empty() {
            return Err(RegistrarError::malformed_name(
                "key property list cannot be empty",
            ));
        }

        let properties = parse_properties(props)?;
        Ok(Self::from_parts(domain.to_string(), properties))
    }
}

fn parse_properties(input: &str) -> Result<Vec<(String, String)>> {
    let mut properties: Vec<(String, String)> = Vec::new();
    let mut rest = input;

    loop {
        if rest.is_empty() {
            return Err(RegistrarError::malformed_name(
                "empty key property after ','",
            ));
        }

        let (key, after_key) = rest.split_once('=').ok_or_else(|| {
            RegistrarError::malformed_name(format!("key property {:?} is missing '='", rest))
        })?;
        validate_key(key)?;

        let (value, remainder) = if after_key.starts_with('"') {
            split_quoted(after_key)?
        } else {
            let (value, remainder) = match after_key.split_once(',') {
                Some((value, remainder)) => (value, Some(remainder)),
                None => (after_key, None),
            };
            validate_unquoted(key, value)?;
            (value, remainder)
        };

        push_property(&mut properties, key, value)?;

        match remainder {
            Some(next) => rest = next,
            None => return Ok(properties),
        }
    }
}

fn push_property(properties: &mut Vec<(String, String)>, key: &str, value: &str) -> Result<()> {
    if properties.iter().any(|(k, _)| k == key) {
        return Err(RegistrarError::malformed_name(format!(
            "duplicate key {:?}",
            key
        )));
    }
    properties.push((key.to_string(), value.to_string()));
    Ok(())
}

fn validate_domain(domain: &str) -> Result<()> {
    if let Some(ch) = domain.chars().find(|c| DOMAIN_FORBIDDEN.contains(c)) {
        return Err(RegistrarError::malformed_name(format!(
            "invalid character {:?} in domain",
            ch
        )));
    }
    Ok(())
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(RegistrarError::malformed_name("key cannot be empty"));
    }
    if let Some(ch) = key.chars().find(|c| SPECIAL_CHARS.contains(c)) {
        return Err(RegistrarError::malformed_name(format!(
            "invalid character {:?} in key {:?}",
            ch, key
        )));
    }
    Ok(())
}

fn validate_unquoted(key: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RegistrarError::malformed_name(format!(
            "value for key {:?} cannot be empty",
            key
        )));
    }
    if let Some(ch) = value.chars().find(|c| SPECIAL_CHARS.contains(c)) {
        return Err(RegistrarError::malformed_name(format!(
            "invalid character {:?} in value for key {:?}",
            ch, key
        )));
    }
    Ok(())
}

/// Split a quoted value off the front of `input`, which starts with `"`.
fn split_quoted(input: &str) -> Result<(&str, Option<&str>)> {
    let mut chars = input.char_indices().skip(1);

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some((_, '\\' | '"' | '*' | '?' | 'n')) => {}
                Some((_, other)) => {
                    return Err(RegistrarError::malformed_name(format!(
                        "invalid escape sequence \\{} in quoted value",
                        other
                    )));
                }
                None => break,
            },
            '\n' => {
                return Err(RegistrarError::malformed_name(
                    "newline in quoted value must be escaped",
                ));
            }
            '"' => {
                let end = idx + 1;
                let value = &input[..end];
                let after = &input[end..];
                return match after.strip_prefix(',') {
                    Some(remainder) => Ok((value, Some(remainder))),
                    None if after.is_empty() => Ok((value, None)),
                    None => Err(RegistrarError::malformed_name(
                        "unexpected characters after quoted value",
                    )),
                };
            }
            _ => {}
        }
    }

    Err(RegistrarError::malformed_name("unterminated quoted value"))
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.domain)?;
        for (i, (k, v)) in self.properties.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        Ok(())
    }
}

impl PartialEq for ObjectName {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for ObjectName {}

impl Hash for ObjectName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for ObjectName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ObjectName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl Serialize for ObjectName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical)
    }
}
