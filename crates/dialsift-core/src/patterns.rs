use crate::country::CountryRule;
use crate::error::CoreError;
use regex::Regex;

/// The four unanchored detection patterns, compiled once per extractor.
///
/// The patterns intentionally overlap: a single true number can match two or
/// three of them. Callers are expected to deduplicate downstream rather than
/// rely on the patterns being mutually exclusive.
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    pub fn new(rule: &CountryRule) -> Result<Self, CoreError> {
        rule.validate()?;
        let dial = &rule.dial_code;
        let trunk = rule.trunk_prefix;
        let sources = [
            // Country-specific, with +.
            format!(r"\+{dial}[\s-]?\d{{1,2}}[\s-]?\d{{3,4}}[\s-]?\d{{4}}"),
            // Generic international.
            r"\+\d{1,4}[\s-]?\d{1,4}[\s-]?\d{3,4}[\s-]?\d{4}".to_string(),
            // Country-specific, without +.
            format!(r"{dial}[\s-]?\d{{1,2}}[\s-]?\d{{3,4}}[\s-]?\d{{4}}"),
            // Locally dialed.
            format!(r"{trunk}\d{{1,2}}[\s-]?\d{{3,4}}[\s-]?\d{{4}}"),
        ];
        let patterns = sources
            .iter()
            .map(|source| Regex::new(source))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns every substring of `fragment` matched by any pattern, in
    /// pattern order. Duplicates across patterns are preserved.
    pub fn candidates(&self, fragment: &str) -> Vec<String> {
        if fragment.is_empty() {
            return Vec::new();
        }
        let mut found = Vec::new();
        for pattern in &self.patterns {
            for hit in pattern.find_iter(fragment) {
                found.push(hit.as_str().to_string());
            }
        }
        found
    }
}
