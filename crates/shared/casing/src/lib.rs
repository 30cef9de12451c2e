//! # Case converters
//!
//! Pure `&str -> String` conversions used by the naming presets.
//!
//! Every uppercase letter starts a new word (`XMLHttp` -> `x-m-l-http`), so camel case
//! produced by [`to_camel_case`] always converts back to the kebab-case it came from.
//! Separator normalization (`_`, spaces, repeated dashes) is left to `heck`.
//!
//! Words that begin with a digit cannot be recovered: `b1-2x` -> `B12x` -> `b12x`.

use heck::{ToKebabCase, ToUpperCamelCase};

/// Converts an identifier to kebab-case: `B1WithLongName` -> `b1-with-long-name`,
/// `A1B2` -> `a1-b2`.
#[must_use]
pub fn to_kebab_case(value: &str) -> String {
    split_capitals(value).to_kebab_case()
}

/// Converts an identifier to component-style camel case, capitalizing every word:
/// `b1-with-long-name` -> `B1WithLongName`, `x-y` -> `XY`.
#[must_use]
pub fn to_camel_case(value: &str) -> String {
    split_capitals(value).to_upper_camel_case()
}

/// Lower-cases `value`, opening a `-` separated word at every uppercase letter that
/// follows a letter or digit.
fn split_capitals(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 2);

    for c in value.chars() {
        if c.is_uppercase() {
            if out.chars().next_back().is_some_and(char::is_alphanumeric) {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case() {
        assert_eq!(to_kebab_case("b1"), "b1");
        assert_eq!(to_kebab_case("B1"), "b1");
        assert_eq!(to_kebab_case("B1WithLongName"), "b1-with-long-name");
        assert_eq!(to_kebab_case("ElemWithLongName"), "elem-with-long-name");
        assert_eq!(to_kebab_case("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn camel_case() {
        assert_eq!(to_camel_case("b1"), "B1");
        assert_eq!(to_camel_case("e1"), "E1");
        assert_eq!(to_camel_case("b1-with-long-name"), "B1WithLongName");
        assert_eq!(to_camel_case("elem-with-long-name"), "ElemWithLongName");
    }

    #[test]
    fn every_capital_opens_a_word() {
        assert_eq!(to_kebab_case("XY"), "x-y");
        assert_eq!(to_kebab_case("A1B2"), "a1-b2");
        assert_eq!(to_kebab_case("XMLHttp"), "x-m-l-http");
        assert_eq!(to_camel_case("XY"), "XY");
        assert_eq!(to_camel_case("XMLHttp"), "XMLHttp");
    }

    #[test]
    fn single_letter_and_digit_words_survive_camel_case() {
        for kebab in ["x-y", "a1-b2", "a-b-c", "x-m-l-http"] {
            assert_eq!(to_kebab_case(&to_camel_case(kebab)), kebab);
        }
    }

    #[test]
    fn digit_led_words_merge() {
        assert_eq!(to_camel_case("b1-2x"), "B12x");
        assert_eq!(to_kebab_case("B12x"), "b12x");
    }
}
