//! Analyzer facade

use std::sync::Arc;

use crate::api::Config;
use crate::cache::{AnalysisCache, AnalysisKind};
use crate::error::Result;
use crate::fry::{FryCoordinate, FrySampler};
use crate::interpret::{Band, Scale};
use crate::metrics::{self, MetricResult};
use crate::segment::{get_rules, SentenceSegmenter};
use crate::wordlist::{FamiliarWords, WordFamiliarity};

/// Readability analyzer bundling its collaborators
pub struct Analyzer {
    config: Config,
    sampler: FrySampler,
    segmenter: Arc<dyn SentenceSegmenter>,
    word_list: Arc<dyn WordFamiliarity>,
    cache: Option<AnalysisCache>,
}

impl Analyzer {
    /// Analyzer with the embedded English rules and word list
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("Default config should always be valid")
    }

    /// Analyzer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let sampler = FrySampler::new(config.window_size, config.samples)?;
        let segmenter: Arc<dyn SentenceSegmenter> = get_rules(&config.segmenter)?;
        let cache = (config.cache_capacity > 0).then(|| AnalysisCache::new(config.cache_capacity));

        log::debug!(
            "Analyzer ready: segmenter={}, window_size={}, samples={}, cache_capacity={}",
            config.segmenter,
            config.window_size,
            config.samples,
            config.cache_capacity
        );

        Ok(Self {
            config,
            sampler,
            segmenter,
            word_list: Arc::new(FamiliarWords::embedded()),
            cache,
        })
    }

    /// Replace the sentence segmenter used for Fry sampling
    pub fn with_segmenter(mut self, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the familiar-word list used by composite analysis
    pub fn with_word_list(mut self, word_list: Arc<dyn WordFamiliarity>) -> Self {
        self.word_list = word_list;
        // cached composite results were judged with the old list
        if let Some(cache) = &self.cache {
            cache.clear();
        }
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn segmenter(&self) -> &dyn SentenceSegmenter {
        self.segmenter.as_ref()
    }

    pub fn word_list(&self) -> &dyn WordFamiliarity {
        self.word_list.as_ref()
    }

    /// Counts, averages and Flesch-Kincaid grade
    pub fn analyze_basic(&self, text: &str) -> MetricResult {
        self.cached(AnalysisKind::Basic, text, || metrics::analyze_basic(text))
    }

    /// Every metric, judging difficult words with the configured list
    pub fn analyze_composite(&self, text: &str) -> MetricResult {
        self.cached(AnalysisKind::Composite, text, || {
            metrics::analyze_composite(text, self.word_list.as_ref())
        })
    }

    /// Fry coordinate sampled with the configured segmenter
    pub fn fry_coordinate(&self, text: &str) -> Result<FryCoordinate> {
        self.sampler.coordinate(text, self.segmenter.as_ref())
    }

    /// Band of `scale` containing `score`
    pub fn classify(&self, score: f64, scale: Scale) -> &'static Band {
        crate::interpret::classify_scale(score, scale)
    }

    /// Bands for every scale whose metric `result` carries
    pub fn interpret(&self, result: &MetricResult) -> Vec<(Scale, f64, &'static Band)> {
        Scale::ALL
            .into_iter()
            .filter_map(|scale| {
                result
                    .get(scale.metric())
                    .map(|score| (scale, score, self.classify(score, scale)))
            })
            .collect()
    }

    /// Composite analysis of many texts, in input order
    #[cfg(feature = "parallel")]
    pub fn analyze_batch(&self, texts: &[&str]) -> Vec<MetricResult> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.analyze_composite(text))
            .collect()
    }

    /// Composite analysis of many texts, in input order
    #[cfg(not(feature = "parallel"))]
    pub fn analyze_batch(&self, texts: &[&str]) -> Vec<MetricResult> {
        texts
            .iter()
            .map(|text| self.analyze_composite(text))
            .collect()
    }

    fn cached<F>(&self, kind: AnalysisKind, text: &str, compute: F) -> MetricResult
    where
        F: FnOnce() -> MetricResult,
    {
        match &self.cache {
            Some(cache) => cache.get_or_compute(kind, text, compute).as_ref().clone(),
            None => compute(),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("sampler", &self.sampler)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
