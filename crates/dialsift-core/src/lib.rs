pub mod country;
pub mod document;
pub mod error;
pub mod harvest;
pub mod normalize;
pub mod patterns;
pub mod pipeline;

pub use country::CountryRule;
pub use document::PageDocument;
pub use error::CoreError;
pub use harvest::{default_strategies, HarvestStrategy, DEFAULT_CHAT_SELECTORS};
pub use normalize::Normalizer;
pub use patterns::PatternSet;
pub use pipeline::Extractor;
