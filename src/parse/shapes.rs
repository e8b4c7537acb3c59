use chumsky::prelude::*;
use std::str::FromStr;

use super::error::{ParseError, ParseResult, first_error};
use crate::domain::{MIN_VERTEX_COUNT, Point, Polygon};

/// Optionally signed decimal coordinate, surrounded by any whitespace
fn coordinate() -> impl Parser<char, i32, Error = Simple<char>> + Clone {
    just('-')
        .or(just('+'))
        .or_not()
        .then(text::digits(10))
        .try_map(|(sign, digits): (Option<char>, String), span| {
            let literal = match sign {
                Some('-') => format!("-{}", digits),
                _ => digits,
            };
            literal
                .parse::<i32>()
                .map_err(|_| Simple::custom(span, format!("invalid number '{}'", literal)))
        })
        .padded()
}

/// Leading vertex count of a polygon; anything below the minimum is rejected here
fn vertex_count() -> impl Parser<char, usize, Error = Simple<char>> + Clone {
    text::digits(10)
        .try_map(|digits: String, span: std::ops::Range<usize>| {
            let declared: usize = digits.parse().map_err(|_| {
                Simple::custom(span.clone(), format!("invalid vertex count '{}'", digits))
            })?;
            if declared < MIN_VERTEX_COUNT {
                return Err(Simple::custom(
                    span,
                    format!(
                        "polygon declares {} vertices, at least {} required",
                        declared, MIN_VERTEX_COUNT
                    ),
                ));
            }
            Ok(declared)
        })
        .padded()
}

/// `(x;y)`, whitespace allowed between tokens
pub fn point_parser() -> impl Parser<char, Point, Error = Simple<char>> + Clone {
    just('(')
        .padded()
        .ignore_then(coordinate())
        .then_ignore(just(';').padded())
        .then(coordinate())
        .then_ignore(just(')').padded())
        .map(|(x, y)| Point::new(x, y))
}

/// A vertex count followed by exactly that many points. Input after the last
/// point is left unconsumed.
pub fn polygon_parser() -> impl Parser<char, Polygon, Error = Simple<char>> {
    vertex_count()
        .then_with(|declared| point_parser().repeated().exactly(declared))
        .try_map(|points, span| {
            Polygon::new(points).ok_or_else(|| Simple::custom(span, "too few vertices"))
        })
}

/// Parse a polygon from the start of `text`, ignoring whatever follows it
pub fn parse_leading_polygon(text: &str) -> ParseResult<Polygon> {
    polygon_parser()
        .then_ignore(any().repeated())
        .then_ignore(end())
        .parse(text)
        .map_err(first_error)
}

/// Parse text holding exactly one polygon and nothing else
pub fn parse_polygon_line(line: &str) -> ParseResult<Polygon> {
    polygon_parser()
        .then_ignore(end())
        .parse(line)
        .map_err(first_error)
}

impl FromStr for Point {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        point_parser()
            .then_ignore(end())
            .parse(s)
            .map_err(first_error)
    }
}

impl FromStr for Polygon {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_polygon_line(s)
    }
}
