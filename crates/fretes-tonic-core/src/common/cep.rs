//! CEP validation.
//!
//! Every request is checked here before any pricing happens. A blank CEP and
//! a malformed CEP are distinct failures so callers can tell a missing field
//! from a badly shaped one.

use super::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Accepted CEP layout: five digits, a hyphen, three digits.
static CEP_LAYOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("CEP pattern compiles"));

/// Validates a CEP string.
///
/// Returns [`Error::MissingCep`] when the input is empty or whitespace-only,
/// [`Error::MalformedCep`] when it does not match `99999-999`, and `Ok(())`
/// otherwise.
pub fn validate_cep(cep: &str) -> Result<()> {
    if cep.trim().is_empty() {
        return Err(Error::MissingCep);
    }

    if !CEP_LAYOUT.is_match(cep) {
        return Err(Error::MalformedCep);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_ceps() {
        for cep in ["01310-100", "99999-999", "00000-000", "30130-010"] {
            assert!(validate_cep(cep).is_ok(), "{cep} should be accepted");
        }
    }

    #[test]
    fn rejects_blank_input_as_missing() {
        for cep in ["", " ", "\t", "   "] {
            assert!(matches!(validate_cep(cep), Err(Error::MissingCep)));
        }
    }

    #[test]
    fn rejects_bad_layouts_as_malformed() {
        for cep in [
            "0131-100",    // short prefix
            "013100-100",  // long prefix
            "01310100",    // no hyphen
            "01310-10",    // short suffix
            "01310-1000",  // long suffix
            "abcde-fgh",   // letters
            "01310–100",   // non-ASCII dash
            " 01310-100",  // leading space
            "01310-100 ",  // trailing space
        ] {
            assert!(
                matches!(validate_cep(cep), Err(Error::MalformedCep)),
                "{cep:?} should be malformed"
            );
        }
    }
}
