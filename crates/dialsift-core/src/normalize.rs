use crate::country::CountryRule;
use crate::error::CoreError;
use regex::Regex;

/// Rewrites raw candidates into a canonical `+<dial code> ...` display form
/// and checks the final shape.
#[derive(Debug)]
pub struct Normalizer {
    dial_code: String,
    trunk_prefix: char,
    /// `^\+<dial><9..11 digits>$` — numbers eligible for display grouping.
    country_shape: Regex,
    /// Head of an eligible number, split into display groups.
    grouping: Regex,
    /// Shape every surfaced number must satisfy end to end.
    shape: Regex,
}

impl Normalizer {
    pub fn new(rule: &CountryRule) -> Result<Self, CoreError> {
        rule.validate()?;
        let dial = &rule.dial_code;
        Ok(Self {
            dial_code: rule.dial_code.clone(),
            trunk_prefix: rule.trunk_prefix,
            country_shape: Regex::new(&format!(r"^\+{dial}\d{{9,11}}$"))?,
            grouping: Regex::new(&format!(r"^(\+{dial})(\d{{1,2}})(\d{{3,4}})(\d{{4}})"))?,
            shape: Regex::new(r"^\+\d{1,4}[\s-]?\d{1,4}[\s-]?\d{3,4}[\s-]?\d{4}$")?,
        })
    }

    /// Maps a raw candidate to its canonical form. Never rejects; callers
    /// filter through [`Normalizer::is_valid`] afterwards.
    pub fn normalize(&self, candidate: &str) -> String {
        let cleaned: String = candidate
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '-')
            .collect();

        let number = if let Some(rest) = cleaned.strip_prefix(self.trunk_prefix) {
            // Locally dialed: drop the trunk digit, substitute the dial code.
            format!("+{}{}", self.dial_code, rest)
        } else if cleaned.starts_with(&self.dial_code) || !cleaned.starts_with('+') {
            format!("+{cleaned}")
        } else {
            cleaned
        };

        if self.country_shape.is_match(&number) {
            return self
                .grouping
                .replace(&number, "${1} ${2}-${3} ${4}")
                .into_owned();
        }

        number
    }

    /// Final shape check: `+`, 1-4 digits, then three separator-optional
    /// digit groups. Anything else is silently dropped by the pipeline.
    pub fn is_valid(&self, number: &str) -> bool {
        self.shape.is_match(number)
    }
}

#[cfg(test)]
mod tests {
    use super::Normalizer;
    use crate::country::CountryRule;

    fn normalizer() -> Normalizer {
        Normalizer::new(&CountryRule::default()).expect("build normalizer")
    }

    #[test]
    fn normalize_rewrites_trunk_prefix() {
        let norm = normalizer();
        assert_eq!(norm.normalize("012-345 6789"), "+60 12-345 6789");
    }

    #[test]
    fn normalize_prefixes_bare_dial_code() {
        let norm = normalizer();
        assert_eq!(norm.normalize("60123456789"), "+60 12-345 6789");
    }

    #[test]
    fn normalize_groups_ten_digit_numbers() {
        let norm = normalizer();
        assert_eq!(norm.normalize("+601234567890"), "+60 12-3456 7890");
    }

    #[test]
    fn normalize_leaves_foreign_numbers_ungrouped() {
        let norm = normalizer();
        assert_eq!(norm.normalize("+44 20 7946 0958"), "+442079460958");
    }

    #[test]
    fn normalize_plus_prefixes_unrecognized_digits() {
        let norm = normalizer();
        assert_eq!(norm.normalize("123456"), "+123456");
    }

    #[test]
    fn normalize_is_idempotent_on_canonical_input() {
        let norm = normalizer();
        let canonical = norm.normalize("0123456789");
        let stripped: String = canonical
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '-')
            .collect();
        assert_eq!(norm.normalize(&stripped), canonical);
    }

    #[test]
    fn is_valid_accepts_canonical_forms() {
        let norm = normalizer();
        assert!(norm.is_valid("+60 12-345 6789"));
        assert!(norm.is_valid("+442079460958"));
        assert!(norm.is_valid("+60 12-3456 7890"));
    }

    #[test]
    fn is_valid_rejects_junk() {
        let norm = normalizer();
        assert!(!norm.is_valid("+2024001"));
        assert!(!norm.is_valid("60123456789"));
        assert!(!norm.is_valid("+60 12-345"));
        assert!(!norm.is_valid(""));
    }
}
