//! Tunables for [`AmortizedDeque`](crate::AmortizedDeque) growth and trimming.

use crate::error::CollectionError;

/// Growth and trim thresholds for an [`AmortizedDeque`](crate::AmortizedDeque).
///
/// | Field | Default |
/// |-------|---------|
/// | `min_trim_len` | `100` |
/// | `max_slack_ratio` | `0.3` |
/// | `initial_front_slack` | `2` |
/// | `growth_factor` | `2` |
///
/// Use [`DequeConfig::builder`] to change a field; the builder validates the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DequeConfig {
    min_trim_len: usize,
    max_slack_ratio: f64,
    initial_front_slack: usize,
    growth_factor: usize,
}

impl DequeConfig {
    /// Default buffer length that must be exceeded before a trim is considered.
    pub const DEFAULT_MIN_TRIM_LEN: usize = 100;
    /// Default fraction of leading empty slots tolerated before a trim.
    pub const DEFAULT_MAX_SLACK_RATIO: f64 = 0.3;
    /// Default seed of the front-growth counter.
    pub const DEFAULT_INITIAL_FRONT_SLACK: usize = 2;
    /// Default multiplier applied to the front-growth counter.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Starts a builder seeded with the defaults.
    pub fn builder() -> DequeConfigBuilder {
        DequeConfigBuilder {
            config: Self::default(),
        }
    }

    /// Buffer length that must be exceeded before `pop_front` compacts.
    #[inline(always)]
    pub fn min_trim_len(&self) -> usize {
        self.min_trim_len
    }

    /// Fraction of leading empty slots that must be exceeded before `pop_front` compacts.
    #[inline(always)]
    pub fn max_slack_ratio(&self) -> f64 {
        self.max_slack_ratio
    }

    /// Seed of the per-deque front-growth counter.
    #[inline(always)]
    pub fn initial_front_slack(&self) -> usize {
        self.initial_front_slack
    }

    /// Multiplier applied to the front-growth counter whenever the front runs out of slack.
    #[inline(always)]
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Returns `true` when a buffer of `buffer_len` slots with `head` leading empty
    /// slots should be compacted.
    #[inline]
    pub(crate) fn should_trim(&self, head: usize, buffer_len: usize) -> bool {
        if buffer_len <= self.min_trim_len {
            return false;
        }
        let nil_ratio = head as f64 / buffer_len as f64;
        nil_ratio > self.max_slack_ratio
    }

    fn validate(self) -> Result<Self, CollectionError> {
        if !self.max_slack_ratio.is_finite()
            || self.max_slack_ratio <= 0.0
            || self.max_slack_ratio > 1.0
        {
            return Err(CollectionError::InvalidSlackRatio(self.max_slack_ratio));
        }
        if self.initial_front_slack == 0 {
            return Err(CollectionError::InvalidFrontSlack);
        }
        if self.growth_factor < 2 {
            return Err(CollectionError::InvalidGrowthFactor(self.growth_factor));
        }
        Ok(self)
    }
}

impl Default for DequeConfig {
    fn default() -> Self {
        Self {
            min_trim_len: Self::DEFAULT_MIN_TRIM_LEN,
            max_slack_ratio: Self::DEFAULT_MAX_SLACK_RATIO,
            initial_front_slack: Self::DEFAULT_INITIAL_FRONT_SLACK,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }
}

/// Builder for [`DequeConfig`]. Obtain one from [`DequeConfig::builder`].
#[derive(Debug, Clone, Copy)]
pub struct DequeConfigBuilder {
    config: DequeConfig,
}

impl DequeConfigBuilder {
    /// Sets the buffer length that must be exceeded before trimming.
    pub fn with_min_trim_len(mut self, min_trim_len: usize) -> Self {
        self.config.min_trim_len = min_trim_len;
        self
    }

    /// Sets the tolerated fraction of leading empty slots. Must be in `(0.0, 1.0]`.
    pub fn with_max_slack_ratio(mut self, ratio: f64) -> Self {
        self.config.max_slack_ratio = ratio;
        self
    }

    /// Sets the seed of the front-growth counter. Must be at least 1.
    pub fn with_initial_front_slack(mut self, slack: usize) -> Self {
        self.config.initial_front_slack = slack;
        self
    }

    /// Sets the front-growth multiplier. Must be at least 2.
    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        self.config.growth_factor = factor;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<DequeConfig, CollectionError> {
        self.config.validate()
    }
}
