//! IAccessible2 attribute strings.
//!
//! Text and object attributes arrive as one flat string:
//!
//! ```text
//! CharFontName:Liberation Serif;CharHeight:12;Numbering:NumberingPrefix=1.,BulletChar=;
//! ```
//!
//! `;` ends an attribute, the first `:` ends its key, `=` and `,` build a
//! nested group, and `\` escapes the next character.

use ahash::AHashMap;

/// The value of one attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Plain text value
    Text(String),
    /// Nested `sub=value,` pairs (e.g. `Numbering`)
    Group(AHashMap<String, String>),
}

impl AttrValue {
    /// The text value, if this is not a group
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Group(_) => None,
        }
    }

    /// The nested pairs, if this is a group
    pub fn as_group(&self) -> Option<&AHashMap<String, String>> {
        match self {
            AttrValue::Group(g) => Some(g),
            AttrValue::Text(_) => None,
        }
    }
}

/// Attributes of a text run or an object, keyed by attribute name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttributes {
    entries: AHashMap<String, AttrValue>,
}

impl RawAttributes {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an attribute string
    pub fn parse(s: &str) -> Self {
        split_attributes(s)
    }

    /// Insert a plain text attribute
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), AttrValue::Text(value.into()));
    }

    /// Insert a nested group attribute
    pub fn insert_group<K: Into<String>>(&mut self, key: K, group: AHashMap<String, String>) {
        self.entries.insert(key.into(), AttrValue::Group(group));
    }

    /// Look up an attribute
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Look up a plain text attribute
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_text)
    }

    /// Look up a nested group attribute
    pub fn group(&self, key: &str) -> Option<&AHashMap<String, String>> {
        self.get(key).and_then(AttrValue::as_group)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// Split an attribute string into its attributes
///
/// Malformed input never fails: a segment without a key is discarded, and a
/// missing trailing `;` still yields the last attribute.
pub fn split_attributes(s: &str) -> RawAttributes {
    let mut attrs = RawAttributes::new();
    let mut tmp = String::new();
    let mut key = String::new();
    let mut sub_key = String::new();
    let mut group: AHashMap<String, String> = AHashMap::new();
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            tmp.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            ':' => key = std::mem::take(&mut tmp),
            '=' => sub_key = std::mem::take(&mut tmp),
            ',' => {
                if !sub_key.is_empty() {
                    group.insert(std::mem::take(&mut sub_key), std::mem::take(&mut tmp));
                }
            }
            ';' => {
                flush(&mut attrs, &mut key, &mut sub_key, &mut tmp, &mut group);
            }
            _ => tmp.push(ch),
        }
    }
    flush(&mut attrs, &mut key, &mut sub_key, &mut tmp, &mut group);

    attrs
}

fn flush(
    attrs: &mut RawAttributes,
    key: &mut String,
    sub_key: &mut String,
    tmp: &mut String,
    group: &mut AHashMap<String, String>,
) {
    if !sub_key.is_empty() {
        group.insert(std::mem::take(sub_key), std::mem::take(tmp));
        attrs.insert_group(std::mem::take(key), std::mem::take(group));
    } else if !group.is_empty() {
        // `Key:a=1,;` leaves the group complete with no pending sub-key.
        attrs.insert_group(std::mem::take(key), std::mem::take(group));
    } else if !key.is_empty() {
        attrs.insert(std::mem::take(key), std::mem::take(tmp));
    }
    key.clear();
    tmp.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_plain() {
        let attrs = split_attributes("CharFontName:Liberation Serif;CharHeight:12;CharWeight:150;");
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs.text("CharFontName"), Some("Liberation Serif"));
        assert_eq!(attrs.text("CharHeight"), Some("12"));
        assert_eq!(attrs.text("CharWeight"), Some("150"));
    }

    #[test]
    fn test_split_without_trailing_semicolon() {
        let attrs = split_attributes("a:1;b:2");
        assert_eq!(attrs.text("a"), Some("1"));
        assert_eq!(attrs.text("b"), Some("2"));
    }

    #[test]
    fn test_split_escapes() {
        let attrs = split_attributes(r"CharFontName:A\;B\:C\\D;x:y");
        assert_eq!(attrs.text("CharFontName"), Some(r"A;B:C\D"));
        assert_eq!(attrs.text("x"), Some("y"));
    }

    #[test]
    fn test_split_group() {
        let attrs = split_attributes(
            "Numbering:NumberingLevel=0,NumberingPrefix=1.,BulletChar=;CharHeight:12;",
        );
        let numbering = attrs.group("Numbering").unwrap();
        assert_eq!(numbering.get("NumberingLevel").map(String::as_str), Some("0"));
        assert_eq!(numbering.get("NumberingPrefix").map(String::as_str), Some("1."));
        assert_eq!(numbering.get("BulletChar").map(String::as_str), Some(""));
        assert_eq!(attrs.text("CharHeight"), Some("12"));
        assert_eq!(attrs.text("Numbering"), None);
    }

    #[test]
    fn test_split_group_trailing_comma() {
        let attrs = split_attributes("Numbering:BulletChar=•,;");
        let numbering = attrs.group("Numbering").unwrap();
        assert_eq!(numbering.get("BulletChar").map(String::as_str), Some("•"));
    }

    #[test]
    fn test_split_empty_and_garbage() {
        assert!(split_attributes("").is_empty());
        assert!(split_attributes(";;;").is_empty());
        assert!(split_attributes("no-key-here;").is_empty());
        assert_eq!(split_attributes("empty:;").text("empty"), Some(""));
    }

    #[test]
    fn test_from_iter() {
        let attrs: RawAttributes = [("CharPosture", "2")].into_iter().collect();
        assert_eq!(attrs.text("CharPosture"), Some("2"));
    }
}
