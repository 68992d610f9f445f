use alloc::string::ToString;
use alloc::vec::Vec;

use crate::*;

/// Reads a guess written as a row and a column separated by whitespace, e.g. `"2 3"`.
///
/// Only the shape of the input is checked here. Whether the cell exists on the board and is still
/// hidden is decided by the engine.
pub fn parse_coordinate(raw: &str) -> core::result::Result<Coord2, InputError> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    let &[row, col] = parts.as_slice() else {
        return Err(InputError::WrongArity(parts.len()));
    };
    Ok((parse_axis(row)?, parse_axis(col)?))
}

fn parse_axis(part: &str) -> core::result::Result<Coord, InputError> {
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(part.to_string()));
    }
    // digits that overflow the axis type can never be on the board
    Ok(part.parse().unwrap_or(Coord::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_then_column() {
        assert_eq!(parse_coordinate("2 3"), Ok((2, 3)));
        assert_eq!(parse_coordinate("  0\t9 \n"), Ok((0, 9)));
    }

    #[test]
    fn rejects_wrong_number_of_parts() {
        assert_eq!(parse_coordinate(""), Err(InputError::WrongArity(0)));
        assert_eq!(parse_coordinate("1"), Err(InputError::WrongArity(1)));
        assert_eq!(parse_coordinate("1 2 3"), Err(InputError::WrongArity(3)));
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(
            parse_coordinate("1 x"),
            Err(InputError::NotANumber("x".into()))
        );
        assert_eq!(
            parse_coordinate("-1 2"),
            Err(InputError::NotANumber("-1".into()))
        );
    }

    #[test]
    fn huge_numbers_are_left_for_bounds_checking() {
        assert_eq!(parse_coordinate("999 0"), Ok((Coord::MAX, 0)));
    }
}
