//! Translating sort parameters into order clauses.

use crate::model::Product;
use crate::spec::{Direction, OrderClause, ValidationError};

/// The product fields a caller may sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortField {
    Title,
    Price,
    Date,
}

impl ProductSortField {
    /// Parses a field name case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "title" => Some(Self::Title),
            "price" => Some(Self::Price),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    /// The order clause for this field in the given direction.
    pub fn clause(self, direction: Direction) -> OrderClause<Product> {
        match self {
            Self::Title => OrderClause::by(|p: &Product| p.title.clone(), direction),
            Self::Price => {
                OrderClause::by_cmp(|a: &Product, b: &Product| a.price.total_cmp(&b.price), direction)
            }
            Self::Date => OrderClause::by(|p: &Product| p.date, direction),
        }
    }
}

fn parse_direction(token: &str) -> Option<Direction> {
    match token.to_ascii_lowercase().as_str() {
        "asc" | "ascending" => Some(Direction::Asc),
        "desc" | "descending" => Some(Direction::Desc),
        _ => None,
    }
}

/// Turns `(field, direction)` parameter pairs into order clauses, in order.
///
/// Lenient mode (`strict = false`) skips pairs with an unrecognized field or
/// direction token, the way a public listing endpoint tolerates junk query
/// strings. Strict mode rejects them with a [`ValidationError`] instead.
pub fn parse_sorts(
    pairs: &[(String, String)],
    strict: bool,
) -> Result<Vec<OrderClause<Product>>, ValidationError> {
    let mut clauses = Vec::with_capacity(pairs.len());

    for (field, token) in pairs {
        let parsed_field = match ProductSortField::parse(field) {
            Some(f) => f,
            None if strict => return Err(ValidationError::UnknownSortField(field.clone())),
            None => continue,
        };
        let direction = match parse_direction(token) {
            Some(d) => d,
            None if strict => return Err(ValidationError::UnknownSortDirection(token.clone())),
            None => continue,
        };
        clauses.push(parsed_field.clause(direction));
    }

    Ok(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(field: &str, dir: &str) -> (String, String) {
        (field.to_string(), dir.to_string())
    }

    #[test]
    fn recognized_fields_parse_case_insensitively() {
        assert_eq!(ProductSortField::parse("Title"), Some(ProductSortField::Title));
        assert_eq!(ProductSortField::parse("PRICE"), Some(ProductSortField::Price));
        assert_eq!(ProductSortField::parse("date"), Some(ProductSortField::Date));
        assert_eq!(ProductSortField::parse("rating"), None);
    }

    #[test]
    fn long_direction_tokens_are_accepted() {
        let clauses = parse_sorts(
            &[pair("price", "ascending"), pair("date", "DESCENDING")],
            false,
        )
        .unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].direction(), Direction::Asc);
        assert_eq!(clauses[1].direction(), Direction::Desc);
    }

    #[test]
    fn lenient_mode_ignores_unknown_input() {
        let clauses = parse_sorts(
            &[
                pair("rating", "asc"),
                pair("price", "sideways"),
                pair("title", "desc"),
            ],
            false,
        )
        .unwrap();
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].direction(), Direction::Desc);
    }

    #[test]
    fn strict_mode_rejects_unknown_field() {
        let err = parse_sorts(&[pair("rating", "asc")], true).unwrap_err();
        assert_eq!(err, ValidationError::UnknownSortField("rating".to_string()));
    }

    #[test]
    fn strict_mode_rejects_unknown_direction() {
        let err = parse_sorts(&[pair("price", "sideways")], true).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownSortDirection("sideways".to_string())
        );
    }

    #[test]
    fn clause_order_follows_input_order() {
        let clauses = parse_sorts(&[pair("price", "asc"), pair("title", "asc")], true).unwrap();
        assert_eq!(clauses.len(), 2);

        // Price clause decides first; title only breaks ties.
        let cheap = Product::new("p1", "Zebra", 1.0, 0, "b", "c");
        let costly = Product::new("p2", "Apple", 9.0, 0, "b", "c");
        assert_eq!(
            clauses[0].ordering(&cheap, &costly),
            std::cmp::Ordering::Less
        );
    }
}
