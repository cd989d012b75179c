use crate::Result;
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use ohno::app_err;
use serde_json::Value;

/// A parsed dotted/indexed path into a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonPath {
    segments: Vec<String>,
}

impl JsonPath {
    /// Parse a path expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty, contains an empty segment, whitespace,
    /// or a bracketed index that is unterminated or not a non-negative integer.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(app_err!("JSON path is empty"));
        }

        let mut segments = Vec::new();
        for part in text.split('.') {
            parse_part(text, part, &mut segments)?;
        }

        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk the document, returning the addressed value if every segment exists.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments.iter().try_fold(root, |node, segment| match node {
            Value::Object(members) => members.get(segment),
            Value::Array(items) => as_index(segment).and_then(|index| items.get(index)),
            _ => None,
        })
    }

    /// Whether this path addresses a location strictly above `other` in the tree.
    ///
    /// Comparison is per segment, so `memstats.By` is not a prefix of `memstats.BySize`.
    /// A strict prefix always shares its root segment with the longer path.
    #[must_use]
    pub fn is_strict_prefix_of(&self, other: &Self) -> bool {
        self.segments.len() < other.segments.len() && other.segments.starts_with(&self.segments)
    }
}

fn parse_part(path: &str, part: &str, segments: &mut Vec<String>) -> Result<()> {
    let (key, mut rest) = part.find('[').map_or((part, ""), |pos| part.split_at(pos));

    if key.is_empty() && rest.is_empty() {
        return Err(app_err!("JSON path '{path}' contains an empty segment"));
    }

    if key.chars().any(|c| c.is_whitespace() || c == ']') {
        return Err(app_err!("JSON path '{path}' contains an invalid segment '{part}'"));
    }

    if !key.is_empty() {
        segments.push(key.to_string());
    }

    while !rest.is_empty() {
        let Some(inner) = rest.strip_prefix('[') else {
            return Err(app_err!("JSON path '{path}' has unexpected text '{rest}' after an index"));
        };

        let Some((index, tail)) = inner.split_once(']') else {
            return Err(app_err!("JSON path '{path}' has an unterminated index in '{part}'"));
        };

        if as_index(index).is_none() {
            return Err(app_err!("JSON path '{path}' has a non-numeric index '[{index}]'"));
        }

        segments.push(index.to_string());
        rest = tail;
    }

    Ok(())
}

fn as_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    segment.parse().ok()
}

impl FromStr for JsonPath {
    type Err = ohno::AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
