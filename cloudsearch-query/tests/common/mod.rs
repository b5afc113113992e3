//! Shared helpers for the cloudsearch-query integration tests

#![allow(dead_code)]

use cloudsearch_query::{range, term, Expression};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `( term field= title 'star wars' )`
pub fn star_wars() -> Expression {
    term("title", "star wars").unwrap()
}

/// `( range field= year { 1977 , 1980 } )`
pub fn original_trilogy_years() -> Expression {
    range("year", 1977, 1980).unwrap()
}

/// Leaves covering every leaf kind, paired with their rendered text
pub fn sample_leaves() -> Vec<(Expression, &'static str)> {
    vec![
        (star_wars(), "( term field= title 'star wars' )"),
        (
            cloudsearch_query::phrase("plot", "death star").unwrap(),
            "( phrase field= plot 'death star' )",
        ),
        (
            cloudsearch_query::prefix("director", "luc").unwrap(),
            "( prefix field= director 'luc' )",
        ),
        (
            original_trilogy_years(),
            "( range field= year { 1977 , 1980 } )",
        ),
        (cloudsearch_query::matchall(), "( matchall )"),
    ]
}
