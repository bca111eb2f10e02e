//! Conjunctive predicate builder and sort orders for paginated searches.
//!
//! A [`Filter`] is a list of `(column, operator, value)` criteria over one
//! entity's columns. All criteria are ANDed; an empty filter matches every row.

use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, EntityTrait, Order, QueryOrder, Select, Value};

use crate::errors::ModelError;

const LIKE_ESCAPE: char = '\\';

#[derive(Clone, Debug, PartialEq)]
pub enum Operator {
    /// Case-sensitive substring containment; the needle is matched literally.
    Contains(String),
    Gte(Value),
    Lte(Value),
    /// Inclusive on both bounds.
    Between(Value, Value),
    Eq(Value),
}

#[derive(Clone, Debug)]
pub struct Criterion<C> {
    pub column: C,
    pub operator: Operator,
}

impl<C: ColumnTrait> Criterion<C> {
    pub fn into_expr(self) -> SimpleExpr {
        let column = self.column;
        match self.operator {
            Operator::Contains(needle) => {
                let pattern = format!("%{}%", escape_like(&needle));
                Expr::col((column.entity_name(), column)).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
            }
            Operator::Gte(v) => column.gte(v),
            Operator::Lte(v) => column.lte(v),
            Operator::Between(lo, hi) => column.between(lo, hi),
            Operator::Eq(v) => column.eq(v),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Filter<C> {
    criteria: Vec<Criterion<C>>,
}

impl<C> Default for Filter<C> {
    fn default() -> Self { Self { criteria: Vec::new() } }
}

impl<C: ColumnTrait> Filter<C> {
    pub fn new() -> Self { Self::default() }

    pub fn push(mut self, column: C, operator: Operator) -> Self {
        self.criteria.push(Criterion { column, operator });
        self
    }

    pub fn contains(self, column: C, needle: &str) -> Self {
        self.push(column, Operator::Contains(needle.to_string()))
    }

    pub fn gte<V: Into<Value>>(self, column: C, v: V) -> Self {
        self.push(column, Operator::Gte(v.into()))
    }

    pub fn lte<V: Into<Value>>(self, column: C, v: V) -> Self {
        self.push(column, Operator::Lte(v.into()))
    }

    pub fn between<V: Into<Value>>(self, column: C, lo: V, hi: V) -> Self {
        self.push(column, Operator::Between(lo.into(), hi.into()))
    }

    pub fn eq<V: Into<Value>>(self, column: C, v: V) -> Self {
        self.push(column, Operator::Eq(v.into()))
    }

    pub fn criteria(&self) -> &[Criterion<C>] { &self.criteria }

    pub fn is_empty(&self) -> bool { self.criteria.is_empty() }

    pub fn into_condition(self) -> Condition {
        self.criteria
            .into_iter()
            .fold(Condition::all(), |cond, c| cond.add(c.into_expr()))
    }
}

/// Escape `%`, `_` and the escape character itself for a `LIKE ... ESCAPE '\'` pattern.
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == '%' || ch == '_' || ch == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(ch);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl From<Direction> for Order {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SortOrder<C> {
    pub column: C,
    pub direction: Direction,
}

impl<C: ColumnTrait> SortOrder<C> {
    pub fn asc(column: C) -> Self { Self { column, direction: Direction::Asc } }

    pub fn desc(column: C) -> Self { Self { column, direction: Direction::Desc } }

    /// Parse `field` or `field,asc|desc`.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let mut parts = raw.split(',').map(str::trim);
        let field = parts.next().unwrap_or_default();
        if field.is_empty() {
            return Err(ModelError::Validation("sort field required".into()));
        }
        let column = C::from_str(field)
            .map_err(|_| ModelError::Validation(format!("unknown sort field '{field}'")))?;
        let direction = match parts.next() {
            None | Some("") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
            Some(d) => return Err(ModelError::Validation(format!("unknown sort direction '{d}'"))),
        };
        if parts.next().is_some() {
            return Err(ModelError::Validation(format!("malformed sort '{raw}'")));
        }
        Ok(Self { column, direction })
    }

    /// Parse a `;`-separated list of sort orders. Blank input means no ordering.
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, ModelError> {
        raw.split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::parse)
            .collect()
    }
}

/// Apply sort orders in sequence.
pub fn apply_sort<E>(select: Select<E>, orders: &[SortOrder<E::Column>]) -> Select<E>
where
    E: EntityTrait,
{
    orders
        .iter()
        .fold(select, |s, o| s.order_by(o.column, o.direction.into()))
}
