//! Configuration validation for Shamir Secret Sharing splits

use crate::error::EngineError;

use super::{ShareCount, Threshold};

/// Validated pair of threshold and share count.
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
/// This prevents creating configurations where more shares are required
/// than actually exist.
#[derive(Debug, Clone, Copy)]
pub struct SplitConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl SplitConfig {
    /// Creates a new split configuration
    ///
    /// # Errors
    /// `NotEnoughShares` if threshold exceeds share count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemosss::domain::{SplitConfig, Threshold, ShareCount};
    ///
    /// let config = SplitConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    ///
    /// let result = SplitConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self, EngineError> {
        if *threshold > *share_count {
            return Err(EngineError::NotEnoughShares);
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_threshold_above_share_count() {
        let result = SplitConfig::new(Threshold::new(5).unwrap(), ShareCount::new(3).unwrap());
        assert!(matches!(result, Err(EngineError::NotEnoughShares)));
    }

    #[test]
    fn accepts_threshold_equal_to_share_count() {
        let config = SplitConfig::new(Threshold::new(3).unwrap(), ShareCount::new(3).unwrap()).unwrap();
        assert_eq!(*config.threshold(), 3);
        assert_eq!(*config.share_count(), 3);
    }
}
