//! Query parameter encoders.
//!
//! TAPD filters accept several values in one query parameter. Two
//! delimiters are in use and they are not interchangeable:
//!
//! - [`Multi`] joins with `,` (field selection, id lists)
//! - [`Enum`] joins with `|` (enumerated value filters such as status)
//!
//! [`Order`] renders a sort clause as `"<field> <asc|desc>"`.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{ser, Deserialize, Serialize, Serializer};

/// An ordered list of values encoded as one delimited string.
///
/// Use the [`Multi`] and [`Enum`] aliases rather than naming this type
/// directly. Values are rendered with their `Display` form and joined by
/// `SEP`; order and duplicates are preserved. An empty list is treated as
/// unset: it serializes as `null` and is left out of query strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimited<T, const SEP: char>(Vec<T>);

/// Comma-joined multi-value parameter (`id=1,2,3`).
///
/// # Example
///
/// ```
/// use tapd_rs::models::Multi;
///
/// let ids = Multi::new([1, 2, 3]);
/// assert_eq!(ids.encode().as_deref(), Some("1,2,3"));
/// ```
pub type Multi<T> = Delimited<T, ','>;

/// Pipe-joined enumerated filter (`status=open|done`).
///
/// # Example
///
/// ```
/// use tapd_rs::models::Enum;
///
/// let status = Enum::new(["open", "done"]);
/// assert_eq!(status.encode().as_deref(), Some("open|done"));
/// ```
pub type Enum<T> = Delimited<T, '|'>;

impl<T, const SEP: char> Delimited<T, SEP> {
    /// Create a list from any iterable of values.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Append a value.
    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    /// The delimiter used on the wire.
    pub const fn separator() -> char {
        SEP
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the list and return the values.
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: fmt::Display, const SEP: char> Delimited<T, SEP> {
    /// Render the joined value, or `None` when the list is empty.
    pub fn encode(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let mut out = String::new();
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(SEP);
            }
            out.push_str(&value.to_string());
        }
        Some(out)
    }

    /// Write `key=<joined>` into a query collection. Empty lists add nothing.
    pub fn encode_into(&self, key: &str, query: &mut Vec<(String, String)>) {
        if let Some(value) = self.encode() {
            query.push((key.to_string(), value));
        }
    }
}

impl<T, const SEP: char> Default for Delimited<T, SEP> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T, const SEP: char> From<Vec<T>> for Delimited<T, SEP> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T, const SEP: char> FromIterator<T> for Delimited<T, SEP> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T, const SEP: char> IntoIterator for &'a Delimited<T, SEP> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display, const SEP: char> fmt::Display for Delimited<T, SEP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode().unwrap_or_default())
    }
}

impl<T: fmt::Display, const SEP: char> Serialize for Delimited<T, SEP> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.encode() {
            Some(joined) => serializer.serialize_str(&joined),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T, const SEP: char> Deserialize<'de> for Delimited<T, SEP>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DelimitedVisitor<T, const SEP: char>(PhantomData<T>);

        impl<T, const SEP: char> Visitor<'_> for DelimitedVisitor<T, SEP>
        where
            T: FromStr,
            T::Err: fmt::Display,
        {
            type Value = Delimited<T, SEP>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a string of values separated by '{SEP}'")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v.is_empty() {
                    return Ok(Delimited::default());
                }
                v.split(SEP)
                    .map(|part| part.parse::<T>().map_err(E::custom))
                    .collect()
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Delimited::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Delimited::default())
            }
        }

        deserializer.deserialize_any(DelimitedVisitor::<T, SEP>(PhantomData))
    }
}

/// Sort direction for an [`Order`] clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderDirection {
    /// Ascending (the default)
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl OrderDirection {
    /// Wire form, `asc` or `desc`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(OrderDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(OrderDirection::Desc)
        } else {
            Err(format!("unknown order direction: {s}"))
        }
    }
}

/// Sort clause rendered as `"<field> <direction>"`.
///
/// Serializes to the same string in JSON bodies and query strings, and
/// deserializes back to an equal value.
///
/// # Example
///
/// ```
/// use tapd_rs::models::Order;
///
/// assert_eq!(Order::new("created").to_string(), "created asc");
/// assert_eq!(Order::desc("created").to_string(), "created desc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    field: String,
    direction: OrderDirection,
}

impl Order {
    /// Ascending order on `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self::with_direction(field, OrderDirection::Asc)
    }

    /// Ascending order on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::with_direction(field, OrderDirection::Asc)
    }

    /// Descending order on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::with_direction(field, OrderDirection::Desc)
    }

    /// Order on `field` in the given direction.
    pub fn with_direction(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// The field being sorted on.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The sort direction.
    pub fn direction(&self) -> OrderDirection {
        self.direction
    }

    /// Write `key=<field> <direction>` into a query collection.
    pub fn encode_into(&self, key: &str, query: &mut Vec<(String, String)>) {
        query.push((key.to_string(), self.to_string()));
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("order clause is empty".to_string());
        }
        // The field is kept as written; only the last word can be a direction.
        if let Some((field, direction)) = s.rsplit_once(' ') {
            if let Ok(direction) = direction.parse::<OrderDirection>() {
                if field.is_empty() {
                    return Err(format!("order clause `{s}` has no field"));
                }
                return Ok(Order::with_direction(field, direction));
            }
        }
        Ok(Order::new(s))
    }
}

impl Serialize for Order {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.field.is_empty() {
            return Err(ser::Error::custom("order field is empty"));
        }
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Order {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Payload of every `*/count` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct CountResponse {
    /// Number of matching records
    pub count: i64,
}
