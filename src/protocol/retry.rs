// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Retry policy for setter requests.

use std::time::Duration;

/// Configuration for re-issuing retryable commands after transient failures.
///
/// Only commands whose [`Command::is_retryable`](crate::command::Command::is_retryable)
/// returns `true` are retried, and only for errors where
/// [`ProtocolError::is_transient`](crate::error::ProtocolError::is_transient)
/// holds.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use reactled_lib::protocol::RetryPolicy;
///
/// // Default policy (3 retries with exponential backoff)
/// let policy = RetryPolicy::default();
///
/// // Never retry
/// let policy = RetryPolicy::disabled();
///
/// // Custom policy
/// let policy = RetryPolicy::new()
///     .with_max_retries(5)
///     .with_initial_delay(Duration::from_millis(50))
///     .with_max_delay(Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound for the delay between retries.
    pub max_delay: Duration,
    /// Multiplier for exponential backoff.
    pub backoff_multiplier: f32,
}

impl RetryPolicy {
    /// Creates a new retry policy with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Sets the maximum number of retries.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the delay before the first retry.
    #[must_use]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the maximum delay between retries.
    #[must_use]
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Sets the backoff multiplier.
    #[must_use]
    pub fn with_backoff_multiplier(mut self, multiplier: f32) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Calculates the delay before retry number `attempt` (0-based).
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return self.initial_delay.min(self.max_delay);
        }

        let multiplier = self
            .backoff_multiplier
            .powi(i32::try_from(attempt).unwrap_or(i32::MAX));

        // Safe: delays are milliseconds to seconds, far from f32 precision limits
        #[allow(clippy::cast_precision_loss)]
        let delay_ms = self.initial_delay.as_millis() as f32 * multiplier;

        // Safe: delay_ms is non-negative and clamped by max_delay below
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delay = Duration::from_millis(delay_ms as u64);

        delay.min(self.max_delay)
    }

    /// Returns `true` if retry number `attempt` (0-based) is allowed.
    #[must_use]
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_policy_default() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.initial_delay, Duration::from_millis(200));
    }

    #[test]
    fn retry_policy_disabled() {
        let policy = RetryPolicy::disabled();
        assert!(!policy.should_retry(0));
    }

    #[test]
    fn retry_delay_calculation() {
        let policy = RetryPolicy::new()
            .with_initial_delay(Duration::from_millis(100))
            .with_backoff_multiplier(2.0)
            .with_max_delay(Duration::from_millis(500));

        assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(400));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(500));
    }

    #[test]
    fn retry_limit() {
        let policy = RetryPolicy::new().with_max_retries(2);

        assert!(policy.should_retry(0));
        assert!(policy.should_retry(1));
        assert!(!policy.should_retry(2));
    }
}
