//! Parameter validation for the CLI and configuration file.
//!
//! The library entry points accept any numbers. Values coming from users
//! are checked here first, and every problem is reported in one message.

use crate::errors::{PhrasemapError, Result};
use crate::phrases::PhraseParams;

/// Collect every problem with `params`.
pub fn params_problems(params: &PhraseParams) -> Vec<String> {
    let mut problems = Vec::new();

    if params.min_len == 0 {
        problems.push("min_len must be at least 1".to_string());
    }
    if params.min_len > params.max_len {
        problems.push(format!(
            "min_len ({}) must not exceed max_len ({})",
            params.min_len, params.max_len
        ));
    }
    if params.min_occurrences == 0 {
        problems.push("min_occurrences must be at least 1".to_string());
    }

    problems
}

pub fn validate_params(params: &PhraseParams) -> Result<()> {
    let problems = params_problems(params);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(PhrasemapError::invalid_params(problems.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_params(&PhraseParams::default()).is_ok());
    }

    #[test]
    fn test_zero_top_is_allowed() {
        assert!(validate_params(&PhraseParams::new(1, 1, 1, 0)).is_ok());
    }

    #[test]
    fn test_all_problems_are_reported() {
        let problems = params_problems(&PhraseParams::new(0, 0, 0, 10));
        assert_eq!(problems.len(), 2);

        let problems = params_problems(&PhraseParams::new(4, 2, 0, 10));
        assert_eq!(
            problems,
            vec![
                "min_len (4) must not exceed max_len (2)".to_string(),
                "min_occurrences must be at least 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_error_joins_problems() {
        let err = validate_params(&PhraseParams::new(0, 3, 0, 10)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameters: min_len must be at least 1; min_occurrences must be at least 1"
        );
    }
}
