/// A single signed term of a linear equation
///
/// `3P` tokenizes as `{ coefficient: 3.0, variable: true }`, a bare `-P` as
/// `{ coefficient: -1.0, variable: true }`, and a constant `16` as
/// `{ coefficient: 16.0, variable: false }`.
#[derive(Debug, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub variable: bool,
}

/// Errors that can occur when parsing equation text into a linear curve
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum EquationError {
    /// Error when the text contains no terms at all
    #[error("equation has no terms")]
    Empty,
    /// Error when a character fits no term pattern
    #[error("unexpected `{0}` in equation")]
    Unexpected(char),
    /// Error when a coefficient is not a readable decimal number
    #[error("`{0}` is not a numeric coefficient")]
    BadCoefficient(String),
    /// Error when a sign has no term after it
    #[error("a sign must be followed by a term")]
    DanglingSign,
    /// Error when accumulated coefficients are not finite
    #[error("coefficients must be finite numbers")]
    NonFinite,
}

/// Tokenizes equation text into a sequence of signed terms.
///
/// Whitespace is stripped and case is normalized first, so `" - p + 16 "`
/// and `"-P+16"` tokenize identically. Each term is an optional sign, an
/// optional decimal coefficient, and an optional price marker `P`; a bare
/// marker carries an implicit coefficient of ±1.
pub fn tokenize(input: &str) -> Result<Vec<Term>, EquationError> {
    let compact = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect::<String>();

    let mut chars = compact.chars().peekable();
    let mut terms = Vec::new();

    while let Some(&c) = chars.peek() {
        let sign = match c {
            '+' => {
                chars.next();
                1.0
            }
            '-' => {
                chars.next();
                -1.0
            }
            _ => 1.0,
        };

        let mut digits = String::new();
        while let Some(&d) = chars.peek() {
            if d.is_ascii_digit() || d == '.' {
                digits.push(d);
                chars.next();
            } else {
                break;
            }
        }

        let variable = chars.peek() == Some(&'P');
        if variable {
            chars.next();
        }

        let coefficient = if digits.is_empty() {
            if variable {
                // A bare `P` (possibly signed) means a coefficient of ±1.
                sign
            } else {
                return match chars.peek() {
                    Some(&other) => Err(EquationError::Unexpected(other)),
                    None => Err(EquationError::DanglingSign),
                };
            }
        } else {
            let magnitude = digits
                .parse::<f64>()
                .map_err(|_| EquationError::BadCoefficient(digits.clone()))?;
            sign * magnitude
        };

        terms.push(Term {
            coefficient,
            variable,
        });
    }

    if terms.is_empty() {
        Err(EquationError::Empty)
    } else {
        Ok(terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_marker_has_unit_coefficient() {
        let terms = tokenize("-P + 16").unwrap();
        assert_eq!(
            terms,
            vec![
                Term {
                    coefficient: -1.0,
                    variable: true
                },
                Term {
                    coefficient: 16.0,
                    variable: false
                },
            ]
        );
    }

    #[test]
    fn test_variable_term_in_either_position() {
        let terms = tokenize("50-3P").unwrap();
        assert_eq!(
            terms,
            vec![
                Term {
                    coefficient: 50.0,
                    variable: false
                },
                Term {
                    coefficient: -3.0,
                    variable: true
                },
            ]
        );
    }

    #[test]
    fn test_case_and_whitespace_normalization() {
        assert_eq!(tokenize(" 2 p + 10 ").unwrap(), tokenize("2P+10").unwrap());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").unwrap_err(), EquationError::Empty);
        assert_eq!(tokenize("   ").unwrap_err(), EquationError::Empty);
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(tokenize("abc").unwrap_err(), EquationError::Unexpected('A'));
        assert_eq!(
            tokenize("2*P").unwrap_err(),
            EquationError::Unexpected('*')
        );
    }

    #[test]
    fn test_dangling_sign() {
        assert_eq!(tokenize("5+").unwrap_err(), EquationError::DanglingSign);
        assert_eq!(tokenize("-").unwrap_err(), EquationError::DanglingSign);
    }

    #[test]
    fn test_malformed_coefficient() {
        assert_eq!(
            tokenize("1.2.3P").unwrap_err(),
            EquationError::BadCoefficient("1.2.3".to_string())
        );
    }
}
