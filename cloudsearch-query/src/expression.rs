//! Expression tree for CloudSearch structured queries

/// The shape of an expression node. `Display` gives the grammar keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExpressionKind {
    MatchAll,
    Term,
    Phrase,
    Prefix,
    Range,
    Compound,
}

/// Boolean operator of a compound expression. `Display` gives the grammar keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operator {
    And,
    Or,
    Not,
}

/// One node of a structured query.
///
/// Expressions are created by the factory functions (`term`, `range`, `and`, ...),
/// optionally given a boost, and rendered with [`Expression::build`].
/// They cannot be changed afterwards, so a tree can be shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub(crate) node: Node,
    pub(crate) boost: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    MatchAll,
    Term(Leaf),
    Phrase(Leaf),
    Prefix(Leaf),
    Range(RangeLeaf),
    Compound(Compound),
}

/// Field plus a pre-formatted literal (already quoted where needed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Leaf {
    pub(crate) field: String,
    pub(crate) literal: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RangeLeaf {
    pub(crate) field: String,
    pub(crate) from: Option<String>,
    pub(crate) to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Compound {
    pub(crate) operator: Operator,
    pub(crate) children: Vec<Expression>,
}

impl Expression {
    pub(crate) fn new(node: Node) -> Self {
        Self { node, boost: None }
    }

    pub fn kind(&self) -> ExpressionKind {
        match self.node {
            Node::MatchAll => ExpressionKind::MatchAll,
            Node::Term(_) => ExpressionKind::Term,
            Node::Phrase(_) => ExpressionKind::Phrase,
            Node::Prefix(_) => ExpressionKind::Prefix,
            Node::Range(_) => ExpressionKind::Range,
            Node::Compound(_) => ExpressionKind::Compound,
        }
    }

    /// `None` for anything that is not a compound
    pub fn compound_operator(&self) -> Option<Operator> {
        match &self.node {
            Node::Compound(c) => Some(c.operator),
            _ => None,
        }
    }

    pub fn field(&self) -> Option<&str> {
        match &self.node {
            Node::Term(leaf) | Node::Phrase(leaf) | Node::Prefix(leaf) => Some(leaf.field.as_str()),
            Node::Range(range) => Some(range.field.as_str()),
            Node::MatchAll | Node::Compound(_) => None,
        }
    }

    /// The formatted literal of a `term`, `phrase` or `prefix`
    pub fn literal(&self) -> Option<&str> {
        match &self.node {
            Node::Term(leaf) | Node::Phrase(leaf) | Node::Prefix(leaf) => {
                Some(leaf.literal.as_str())
            }
            _ => None,
        }
    }

    /// The formatted `(from, to)` bounds of a `range`, each possibly open
    pub fn bounds(&self) -> Option<(Option<&str>, Option<&str>)> {
        match &self.node {
            Node::Range(range) => Some((range.from.as_deref(), range.to.as_deref())),
            _ => None,
        }
    }

    /// Child expressions in insertion order; empty for leaves
    pub fn children(&self) -> &[Expression] {
        match &self.node {
            Node::Compound(c) => c.children.as_slice(),
            _ => &[],
        }
    }

    pub fn boost(&self) -> Option<i32> {
        self.boost
    }

    /// Returns this expression with a relevance boost attached.
    ///
    /// Leaves and compounds render it as `boost=<n>`. A `matchall` keeps the
    /// value (see [`Expression::boost`]) but never renders it, since the
    /// grammar has no slot for it.
    ///
    /// ```
    /// use cloudsearch_query::term;
    ///
    /// let query = term("title", "star wars")?.with_boost(5).build()?;
    /// assert_eq!(query, "( term field= title boost=5 'star wars' )");
    /// # Ok::<(), cloudsearch_query::QueryError>(())
    /// ```
    pub fn with_boost(self, boost: i32) -> Self {
        Self {
            boost: Some(boost),
            ..self
        }
    }
}
