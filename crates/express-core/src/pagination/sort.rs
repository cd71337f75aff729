//! Sort clauses attached to a page query.

use crate::validation::rules::valid_sort_property;
use crate::{ExpressError, ExpressResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction of a single clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl Direction {
    /// Returns true for ascending order.
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }

    /// Returns true for descending order.
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        matches!(self, Self::Desc)
    }

    /// Returns the SQL keyword for this direction.
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Direction {
    type Err = ExpressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ExpressError::invalid_argument(format!(
                "invalid sort direction '{other}' (expected asc or desc)"
            ))),
        }
    }
}

/// A single `(property, direction)` sort clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrder {
    property: String,
    direction: Direction,
}

impl SortOrder {
    /// Creates a sort clause.
    pub fn new(property: impl Into<String>, direction: Direction) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }

    /// Creates an ascending sort clause.
    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Asc)
    }

    /// Creates a descending sort clause.
    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Desc)
    }

    /// The sorted property.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The sort direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.direction)
    }
}

/// Parses `property` or `property,direction`.
impl FromStr for SortOrder {
    type Err = ExpressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (property, direction) = match s.split_once(',') {
            Some((property, direction)) => (property.trim(), direction.parse::<Direction>()?),
            None => (s.trim(), Direction::default()),
        };

        valid_sort_property(property).map_err(|e| {
            ExpressError::invalid_argument(format!("invalid sort property '{property}': {}", e.code))
        })?;

        Ok(Self::new(property, direction))
    }
}

/// Ordered list of sort clauses. Clause order is significant and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sort {
    orders: Vec<SortOrder>,
}

impl Sort {
    /// A sort without any clauses.
    #[must_use]
    pub const fn unsorted() -> Self {
        Self { orders: Vec::new() }
    }

    /// One clause per property, all in the given direction.
    pub fn by<I, S>(direction: Direction, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            orders: properties
                .into_iter()
                .map(|property| SortOrder::new(property, direction))
                .collect(),
        }
    }

    /// Builds a sort from explicit clauses.
    #[must_use]
    pub fn from_orders(orders: Vec<SortOrder>) -> Self {
        Self { orders }
    }

    /// Parses query-string clauses such as `["createdDate,desc", "name"]`.
    pub fn parse<I, S>(clauses: I) -> ExpressResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let orders = clauses
            .into_iter()
            .map(|clause| clause.as_ref().parse())
            .collect::<ExpressResult<Vec<SortOrder>>>()?;
        Ok(Self { orders })
    }

    /// Appends the clauses of `other` after this sort's clauses.
    #[must_use]
    pub fn and(mut self, other: Sort) -> Self {
        self.orders.extend(other.orders);
        self
    }

    /// Returns true when there are no clauses.
    #[must_use]
    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    /// Returns true when there is at least one clause.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        !self.orders.is_empty()
    }

    /// The clauses in order.
    #[must_use]
    pub fn orders(&self) -> &[SortOrder] {
        &self.orders
    }

    /// Iterates over the clauses in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SortOrder> {
        self.orders.iter()
    }

    /// Returns the clause for `property`, if any.
    #[must_use]
    pub fn order_for(&self, property: &str) -> Option<&SortOrder> {
        self.orders.iter().find(|order| order.property == property)
    }
}

impl From<SortOrder> for Sort {
    fn from(order: SortOrder) -> Self {
        Self { orders: vec![order] }
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a SortOrder;
    type IntoIter = std::slice::Iter<'a, SortOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("asc".parse::<Direction>().unwrap(), Direction::Asc);
        assert_eq!("DESC".parse::<Direction>().unwrap(), Direction::Desc);
        assert_eq!(" Desc ".parse::<Direction>().unwrap(), Direction::Desc);
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_direction_default_and_display() {
        assert_eq!(Direction::default(), Direction::Asc);
        assert_eq!(Direction::Desc.to_string(), "DESC");
        assert!(Direction::Asc.is_ascending());
        assert!(Direction::Desc.is_descending());
    }

    #[test]
    fn test_sort_by_and_keeps_order() {
        let sort = Sort::by(Direction::Desc, ["createdDate"]).and(Sort::by(Direction::Asc, ["name"]));
        let orders = sort.orders();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0], SortOrder::desc("createdDate"));
        assert_eq!(orders[1], SortOrder::asc("name"));
    }

    #[test]
    fn test_sort_keeps_duplicates() {
        let sort = Sort::from(SortOrder::asc("name")).and(Sort::from(SortOrder::desc("name")));
        assert_eq!(sort.orders().len(), 2);
        assert_eq!(sort.order_for("name"), Some(&SortOrder::asc("name")));
    }

    #[test]
    fn test_unsorted() {
        let sort = Sort::unsorted();
        assert!(sort.is_unsorted());
        assert!(!sort.is_sorted());
        assert_eq!(sort.iter().count(), 0);
        assert_eq!(Sort::default(), sort);
    }

    #[test]
    fn test_sort_parse() {
        let sort = Sort::parse(["createdDate,desc", "name", "owner.id,ASC"]).unwrap();
        let properties: Vec<_> = sort.iter().map(SortOrder::property).collect();
        assert_eq!(properties, ["createdDate", "name", "owner.id"]);
        assert_eq!(sort.orders()[0].direction(), Direction::Desc);
        assert_eq!(sort.orders()[1].direction(), Direction::Asc);
        assert_eq!(sort.orders()[2].direction(), Direction::Asc);
    }

    #[test]
    fn test_sort_parse_rejects_bad_clauses() {
        assert!(Sort::parse([",desc"]).is_err());
        assert!(Sort::parse(["name,up"]).is_err());
        assert!(Sort::parse(["name; drop table"]).is_err());
    }

    #[test]
    fn test_sort_serializes_as_list() {
        let sort = Sort::by(Direction::Desc, ["createdDate"]);
        let json = serde_json::to_value(&sort).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "property": "createdDate", "direction": "DESC" }])
        );
    }
}
