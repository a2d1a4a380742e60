use crate::error::CoreError;
use serde::{Deserialize, Serialize};

pub const MAX_DIAL_CODE_DIGITS: usize = 4;

/// Numbering-plan assumptions the matcher and normalizer are built from.
///
/// Only the rewrite of locally-dialed numbers is country-specific; the rest
/// of the pipeline treats numbers as opaque digit strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRule {
    /// International dial code, without the `+` (e.g. `"60"`).
    pub dial_code: String,
    /// Digit that replaces the dial code when dialing domestically (e.g. `'0'`).
    pub trunk_prefix: char,
}

impl Default for CountryRule {
    fn default() -> Self {
        Self {
            dial_code: "60".to_string(),
            trunk_prefix: '0',
        }
    }
}

impl CountryRule {
    pub fn new(dial_code: impl Into<String>, trunk_prefix: char) -> Result<Self, CoreError> {
        let rule = Self {
            dial_code: dial_code.into(),
            trunk_prefix,
        };
        rule.validate()?;
        Ok(rule)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.dial_code.is_empty()
            || self.dial_code.len() > MAX_DIAL_CODE_DIGITS
            || !self.dial_code.chars().all(|ch| ch.is_ascii_digit())
        {
            return Err(CoreError::InvalidDialCode(self.dial_code.clone()));
        }
        if !self.trunk_prefix.is_ascii_digit() {
            return Err(CoreError::InvalidTrunkPrefix(self.trunk_prefix));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CountryRule;

    #[test]
    fn default_rule_is_malaysia() {
        let rule = CountryRule::default();
        assert_eq!(rule.dial_code, "60");
        assert_eq!(rule.trunk_prefix, '0');
        assert!(rule.validate().is_ok());
    }

    #[test]
    fn new_accepts_digit_codes() {
        assert!(CountryRule::new("1", '1').is_ok());
        assert!(CountryRule::new("9999", '0').is_ok());
    }

    #[test]
    fn new_rejects_bad_dial_codes() {
        assert!(CountryRule::new("", '0').is_err());
        assert!(CountryRule::new("60a", '0').is_err());
        assert!(CountryRule::new("12345", '0').is_err());
    }

    #[test]
    fn new_rejects_non_digit_trunk_prefix() {
        assert!(CountryRule::new("60", '+').is_err());
    }
}
