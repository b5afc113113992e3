mod common;

use chrono::{TimeZone, Utc};
use cloudsearch_query::{
    and, matchall, not, or, phrase, prefix, range, range_from, term, ExpressionKind, Operator,
};
use common::{original_trilogy_years, star_wars};

#[test]
fn test_matchall_shape() {
    let expr = matchall();
    assert_eq!(expr.kind(), ExpressionKind::MatchAll);
    assert_eq!(expr.compound_operator(), None);
    assert_eq!(expr.field(), None);
    assert_eq!(expr.literal(), None);
    assert_eq!(expr.bounds(), None);
    assert!(expr.children().is_empty());
    assert_eq!(expr.boost(), None);
}

#[test]
fn test_leaf_shapes() {
    let expr = star_wars();
    assert_eq!(expr.kind(), ExpressionKind::Term);
    assert_eq!(expr.field(), Some("title"));
    assert_eq!(expr.literal(), Some("'star wars'"));
    assert_eq!(expr.bounds(), None);

    assert_eq!(phrase("plot", "x").unwrap().kind(), ExpressionKind::Phrase);
    assert_eq!(prefix("plot", "x").unwrap().kind(), ExpressionKind::Prefix);
}

#[test]
fn test_literals_are_preformatted() {
    assert_eq!(term("year", 1977).unwrap().literal(), Some("1977"));
    assert_eq!(term("rating", 7.0).unwrap().literal(), Some("7.0"));
    let epoch = Utc.timestamp_opt(0, 0).unwrap();
    assert_eq!(
        term("released", epoch).unwrap().literal(),
        Some("'1970-01-01T00:00:00Z'")
    );
}

#[test]
fn test_range_shape() {
    let expr = original_trilogy_years();
    assert_eq!(expr.kind(), ExpressionKind::Range);
    assert_eq!(expr.field(), Some("year"));
    assert_eq!(expr.literal(), None);
    assert_eq!(expr.bounds(), Some((Some("1977"), Some("1980"))));

    let open = range_from("year", 1977).unwrap();
    assert_eq!(open.bounds(), Some((Some("1977"), None)));

    let text = range("title", "a", "m").unwrap();
    assert_eq!(text.bounds(), Some((Some("'a'"), Some("'m'"))));
}

#[test]
fn test_compound_shape() {
    let expr = and([star_wars(), original_trilogy_years()]).unwrap();
    assert_eq!(expr.kind(), ExpressionKind::Compound);
    assert_eq!(expr.compound_operator(), Some(Operator::And));
    assert_eq!(expr.field(), None);
    assert_eq!(expr.children(), &[star_wars(), original_trilogy_years()]);

    let expr = or([star_wars()]).unwrap();
    assert_eq!(expr.compound_operator(), Some(Operator::Or));

    let expr = not(matchall());
    assert_eq!(expr.compound_operator(), Some(Operator::Not));
    assert_eq!(expr.children(), &[matchall()]);
}

#[test]
fn test_with_boost_keeps_shape() {
    let expr = star_wars().with_boost(9);
    assert_eq!(expr.boost(), Some(9));
    assert_eq!(expr.kind(), ExpressionKind::Term);
    assert_eq!(expr.literal(), Some("'star wars'"));
}

#[test]
fn test_matchall_keeps_unrendered_boost() {
    let expr = matchall().with_boost(4);
    assert_eq!(expr.boost(), Some(4));
    assert_eq!(expr.build().unwrap(), "( matchall )");
}

#[test]
fn test_field_accepts_owned_strings() {
    let field = String::from("title");
    let value = String::from("star wars");
    assert_eq!(term(field.clone(), &value).unwrap(), star_wars());
    assert_eq!(term(&*field, value).unwrap(), star_wars());
}

#[test]
fn test_trees_are_shareable_across_threads() {
    let tree = std::sync::Arc::new(and([star_wars(), original_trilogy_years()]).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tree = tree.clone();
            std::thread::spawn(move || tree.build().unwrap())
        })
        .collect();
    let expected = tree.build().unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
