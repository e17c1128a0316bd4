use crate::{
    catalog::{RangeCatalog, RecommendationCatalog},
    error::AquaError,
    evaluation::engine::StatusEvaluator,
};
use aquamind_schemas::catalog::Language;

/// A fluent builder for constructing a `StatusEvaluator`.
///
/// Both catalogs must be supplied, either explicitly or through
/// `with_builtin_catalogs`, before `build` succeeds.
#[derive(Default)]
pub struct EvaluatorBuilder {
    ranges: Option<RangeCatalog>,
    recommendations: Option<RecommendationCatalog>,
    language: Language,
}

impl EvaluatorBuilder {
    /// Creates a new, empty `EvaluatorBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the range catalog parameters are checked against.
    pub fn with_ranges(mut self, ranges: RangeCatalog) -> Self {
        self.ranges = Some(ranges);
        self
    }

    /// Sets the catalog advice text is drawn from.
    pub fn with_recommendations(mut self, recommendations: RecommendationCatalog) -> Self {
        self.recommendations = Some(recommendations);
        self
    }

    /// Uses the catalogs shipped with the application.
    pub fn with_builtin_catalogs(self) -> Self {
        self.with_ranges(RangeCatalog::builtin())
            .with_recommendations(RecommendationCatalog::builtin())
    }

    /// Sets the language advice text is returned in. Defaults to Spanish.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Consumes the builder and returns a configured `StatusEvaluator`.
    ///
    /// # Errors
    ///
    /// Returns `AquaError::CatalogNotDefined` if either catalog is missing.
    pub fn build(self) -> Result<StatusEvaluator, AquaError> {
        Ok(StatusEvaluator {
            ranges: self.ranges.ok_or(AquaError::CatalogNotDefined("range"))?,
            recommendations: self
                .recommendations
                .ok_or(AquaError::CatalogNotDefined("recommendation"))?,
            language: self.language,
        })
    }
}
