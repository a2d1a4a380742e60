use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::country::CountryRule;
use crate::document::PageDocument;
use crate::error::CoreError;
use crate::harvest::{default_strategies, HarvestStrategy};
use crate::normalize::Normalizer;
use crate::patterns::PatternSet;

/// The full extraction pipeline: harvest, match, normalize, validate,
/// deduplicate, sort.
pub struct Extractor {
    strategies: Vec<Box<dyn HarvestStrategy>>,
    patterns: PatternSet,
    normalizer: Normalizer,
}

impl Extractor {
    pub fn new(rule: &CountryRule, chat_selectors: &[String]) -> Result<Self, CoreError> {
        Ok(Self {
            strategies: default_strategies(chat_selectors),
            patterns: PatternSet::new(rule)?,
            normalizer: Normalizer::new(rule)?,
        })
    }

    /// Replaces the strategy list. Mostly useful in tests.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn HarvestStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Runs one extraction pass over the page. Infallible: a failing strategy
    /// is logged and skipped, invalid candidates are dropped silently, and an
    /// empty page simply yields an empty list.
    ///
    /// The result carries no duplicates and is sorted ascending.
    pub fn extract(&self, page: &PageDocument) -> Vec<String> {
        let mut numbers = BTreeSet::new();
        for strategy in &self.strategies {
            let fragments = match strategy.harvest(page) {
                Ok(fragments) => fragments,
                Err(err) => {
                    warn!(strategy = strategy.name(), error = %err, "harvest strategy failed");
                    continue;
                }
            };
            for fragment in &fragments {
                for candidate in self.patterns.candidates(fragment) {
                    let normalized = self.normalizer.normalize(&candidate);
                    if self.normalizer.is_valid(&normalized) {
                        numbers.insert(normalized);
                    }
                }
            }
        }
        debug!(count = numbers.len(), "extraction pass finished");
        numbers.into_iter().collect()
    }
}
