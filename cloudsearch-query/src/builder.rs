//! Factory functions for structured query expressions.
//!
//! These are the only way to construct an [`Expression`], so every tree that
//! reaches the serializer has already been validated here.

use crate::errors::QueryError;
use crate::expression::{Compound, Expression, ExpressionKind, Leaf, Node, Operator, RangeLeaf};
use crate::value::Value;
use log::debug;

/// Creates a `matchall` expression, which returns every document in the domain.
///
/// ```text
/// ( matchall )
/// ```
pub fn matchall() -> Expression {
    Expression::new(Node::MatchAll)
}

/// Creates a `term` expression for a text, integer, float or timestamp value.
///
/// ```text
/// ( term field= title 'star wars' )
/// ( term field= year 1977 )
/// ( term field= released '1977-05-25T00:00:00Z' )
/// ```
pub fn term(field: impl Into<String>, value: impl Into<Value>) -> Result<Expression, QueryError> {
    let field = checked_field(field.into(), ExpressionKind::Term)?;
    let literal = checked_literal(&field, &value.into())?;
    Ok(Expression::new(Node::Term(Leaf { field, literal })))
}

/// Same as [`term`]
pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Result<Expression, QueryError> {
    term(field, value)
}

/// Creates a `phrase` expression.
///
/// ```text
/// ( phrase field= plot 'the phrase' )
/// ```
pub fn phrase(
    field: impl Into<String>,
    phrase: impl Into<String>,
) -> Result<Expression, QueryError> {
    let field = checked_field(field.into(), ExpressionKind::Phrase)?;
    let literal = checked_literal(&field, &Value::Text(phrase.into()))?;
    Ok(Expression::new(Node::Phrase(Leaf { field, literal })))
}

/// Creates a `prefix` expression.
///
/// ```text
/// ( prefix field= title 'sta' )
/// ```
pub fn prefix(
    field: impl Into<String>,
    prefix: impl Into<String>,
) -> Result<Expression, QueryError> {
    let field = checked_field(field.into(), ExpressionKind::Prefix)?;
    let literal = checked_literal(&field, &Value::Text(prefix.into()))?;
    Ok(Expression::new(Node::Prefix(Leaf { field, literal })))
}

/// Creates a closed `range` expression. Both bounds share one value type.
///
/// ```text
/// ( range field= year { 1977 , 1980 } )
/// ( range field= title { 'abc' , 'def' } )
/// ```
pub fn range<V: Into<Value>>(
    field: impl Into<String>,
    from: V,
    to: V,
) -> Result<Expression, QueryError> {
    range_bounds(field, Some(from.into()), Some(to.into()))
}

/// Creates a `range` expression where either bound may be open, and the bounds
/// may be of different value types.
///
/// ```text
/// ( range field= year { 1977 , } )
/// ( range field= year { , 1980 } )
/// ```
pub fn range_bounds(
    field: impl Into<String>,
    from: Option<Value>,
    to: Option<Value>,
) -> Result<Expression, QueryError> {
    let field = checked_field(field.into(), ExpressionKind::Range)?;
    let from = from.map(|v| checked_literal(&field, &v)).transpose()?;
    let to = to.map(|v| checked_literal(&field, &v)).transpose()?;
    Ok(Expression::new(Node::Range(RangeLeaf { field, from, to })))
}

/// Range with only a lower bound
pub fn range_from(
    field: impl Into<String>,
    from: impl Into<Value>,
) -> Result<Expression, QueryError> {
    range_bounds(field, Some(from.into()), None)
}

/// Range with only an upper bound
pub fn range_to(field: impl Into<String>, to: impl Into<Value>) -> Result<Expression, QueryError> {
    range_bounds(field, None, Some(to.into()))
}

/// Combines one or more expressions with `and`.
///
/// ```text
/// ( and EXPRESSION1 EXPRESSION2 )
/// ```
pub fn and<I>(expressions: I) -> Result<Expression, QueryError>
where
    I: IntoIterator<Item = Expression>,
{
    compound(Operator::And, expressions)
}

/// Combines one or more expressions with `or`.
///
/// ```text
/// ( or EXPRESSION1 EXPRESSION2 )
/// ```
pub fn or<I>(expressions: I) -> Result<Expression, QueryError>
where
    I: IntoIterator<Item = Expression>,
{
    compound(Operator::Or, expressions)
}

/// Negates an expression.
///
/// ```text
/// ( not EXPRESSION )
/// ```
pub fn not(expression: Expression) -> Expression {
    Expression::new(Node::Compound(Compound {
        operator: Operator::Not,
        children: vec![expression],
    }))
}

fn compound<I>(operator: Operator, expressions: I) -> Result<Expression, QueryError>
where
    I: IntoIterator<Item = Expression>,
{
    let children: Vec<Expression> = expressions.into_iter().collect();
    if children.is_empty() {
        return Err(rejected(format!(
            "At least one expression is required for `{}`",
            operator
        )));
    }
    Ok(Expression::new(Node::Compound(Compound {
        operator,
        children,
    })))
}

fn checked_field(field: String, kind: ExpressionKind) -> Result<String, QueryError> {
    if field.trim().is_empty() {
        return Err(rejected(format!("`{}` expression requires a field name", kind)));
    }
    Ok(field)
}

fn checked_literal(field: &str, value: &Value) -> Result<String, QueryError> {
    value.to_literal().map_err(|e| {
        debug!("Rejected value {:?} for field {}: {}", value, field, e);
        e
    })
}

fn rejected(msg: String) -> QueryError {
    debug!("Rejected structured query argument: {}", msg);
    QueryError::Argument(msg)
}
