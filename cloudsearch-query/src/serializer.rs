use crate::errors::QueryError;
use crate::expression::{Compound, Expression, Leaf, Node, Operator, RangeLeaf};
use log::trace;
use std::fmt;

const OPEN: &str = "(";
const CLOSE: &str = ")";
const FIELD: &str = "field=";
const RANGE_OPEN: &str = "{";
const RANGE_SEPARATOR: &str = ",";
const RANGE_CLOSE: &str = "}";

impl Expression {
    /// Builds the structured query string. For example:
    ///
    /// ```text
    /// ( and ( term field= title 'star wars' ) ( range field= year { 1977 , 1980 } ) )
    /// ```
    ///
    /// Every token is separated by a single space. Output is all-or-nothing:
    /// a malformed tree yields [`QueryError::Consistency`] and no text.
    pub fn build(&self) -> Result<String, QueryError> {
        let query = render(self)?;
        trace!("Built structured query: {}", query);
        Ok(query)
    }
}

fn render(expr: &Expression) -> Result<String, QueryError> {
    let boost = expr.boost.map(|b| format!("boost={}", b));
    let kind = expr.kind().to_string();

    // there are a few shapes to handle:
    // 1. matchall, which takes no boost
    // 2. compound (nested) expressions
    // 3. value leaves
    // 4. range leaves
    let tokens = match &expr.node {
        Node::MatchAll => vec![OPEN.to_string(), kind, CLOSE.to_string()],
        Node::Compound(compound) => render_compound(compound, boost)?,
        Node::Term(leaf) | Node::Phrase(leaf) | Node::Prefix(leaf) => {
            render_leaf(kind, leaf, boost)?
        }
        Node::Range(range) => render_range(kind, range, boost)?,
    };
    Ok(tokens.join(" "))
}

fn render_compound(
    compound: &Compound,
    boost: Option<String>,
) -> Result<Vec<String>, QueryError> {
    match (compound.operator, compound.children.len()) {
        (_, 0) => {
            return Err(QueryError::Consistency(format!(
                "`{}` expression has no children",
                compound.operator
            )))
        }
        (Operator::Not, n) if n != 1 => {
            return Err(QueryError::Consistency(format!(
                "`not` expression must have exactly one child, found {}",
                n
            )))
        }
        _ => {}
    }

    let mut tokens = vec![OPEN.to_string(), compound.operator.to_string()];
    tokens.extend(boost);
    for child in &compound.children {
        tokens.push(render(child)?);
    }
    tokens.push(CLOSE.to_string());
    Ok(tokens)
}

fn render_leaf(
    kind: String,
    leaf: &Leaf,
    boost: Option<String>,
) -> Result<Vec<String>, QueryError> {
    check_field(&kind, &leaf.field)?;
    if leaf.literal.is_empty() {
        return Err(QueryError::Consistency(format!(
            "`{}` expression on field {} has no value",
            kind, leaf.field
        )));
    }

    let mut tokens = vec![OPEN.to_string(), kind, FIELD.to_string(), leaf.field.clone()];
    tokens.extend(boost);
    tokens.push(leaf.literal.clone());
    tokens.push(CLOSE.to_string());
    Ok(tokens)
}

fn render_range(
    kind: String,
    range: &RangeLeaf,
    boost: Option<String>,
) -> Result<Vec<String>, QueryError> {
    check_field(&kind, &range.field)?;

    let mut tokens = vec![OPEN.to_string(), kind, FIELD.to_string(), range.field.clone()];
    tokens.extend(boost);
    // an open bound contributes no token, the braces and comma always stay
    tokens.push(RANGE_OPEN.to_string());
    tokens.extend(range.from.clone());
    tokens.push(RANGE_SEPARATOR.to_string());
    tokens.extend(range.to.clone());
    tokens.push(RANGE_CLOSE.to_string());
    tokens.push(CLOSE.to_string());
    Ok(tokens)
}

fn check_field(kind: &str, field: &str) -> Result<(), QueryError> {
    if field.trim().is_empty() {
        return Err(QueryError::Consistency(format!(
            "`{}` expression has no field",
            kind
        )));
    }
    Ok(())
}

/// Writes the same text as [`Expression::build`].
///
/// A malformed tree is reported as `fmt::Error`, which makes `to_string()`
/// panic. Factory-built trees never hit this; use `build()` to get the
/// [`QueryError`] instead.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = render(self).map_err(|_| fmt::Error)?;
        f.write_str(&query)
    }
}

/// Serializes as the built query string, so an expression can be embedded
/// directly in a request body.
impl serde::Serialize for Expression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let query = self.build().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&query)
    }
}
