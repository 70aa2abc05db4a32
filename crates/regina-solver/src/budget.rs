//! Enumeration budget: solution-count cap and deadline.

use std::time::{Duration, Instant};

use regina_core::{ReginaError, Result};
use regina_config::SearchConfig;

/// Bounds for an enumeration run.
///
/// An unbounded budget never stops a search early. Caps are validated at
/// construction: a zero limit or zero deadline fails fast with a
/// configuration error before any search starts, never a silent no-op.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use regina_solver::SearchBudget;
///
/// let budget = SearchBudget::unbounded()
///     .with_solution_limit(100)
///     .unwrap()
///     .with_deadline(Duration::from_secs(2))
///     .unwrap();
/// assert_eq!(budget.solution_limit(), Some(100));
///
/// assert!(SearchBudget::unbounded().with_solution_limit(0).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    solution_limit: Option<usize>,
    deadline: Option<Duration>,
}

impl SearchBudget {
    /// A budget that never stops the search.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Caps the number of solutions gathered.
    pub fn with_solution_limit(mut self, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(ReginaError::Config(
                "solution limit must be positive".into(),
            ));
        }
        self.solution_limit = Some(limit);
        Ok(self)
    }

    /// Caps the wall-clock time of the enumeration.
    pub fn with_deadline(mut self, deadline: Duration) -> Result<Self> {
        if deadline.is_zero() {
            return Err(ReginaError::Config("deadline must be positive".into()));
        }
        self.deadline = Some(deadline);
        Ok(self)
    }

    /// Builds a budget from loaded configuration.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let mut budget = Self::unbounded();
        if let Some(limit) = config.solution_limit {
            budget = budget.with_solution_limit(limit)?;
        }
        if let Some(time_limit) = config.time_limit() {
            budget = budget.with_deadline(time_limit)?;
        }
        Ok(budget)
    }

    /// The configured solution cap, if any.
    pub fn solution_limit(&self) -> Option<usize> {
        self.solution_limit
    }

    /// The configured time cap, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Arms the budget for one search run.
    pub(crate) fn start(&self) -> ArmedBudget {
        ArmedBudget {
            solution_limit: self.solution_limit,
            deadline: self.deadline.map(|d| Instant::now() + d),
        }
    }
}

/// A budget bound to a running search's clock.
#[derive(Debug, Clone)]
pub(crate) struct ArmedBudget {
    solution_limit: Option<usize>,
    deadline: Option<Instant>,
}

impl ArmedBudget {
    /// Checked at each row transition of the enumeration.
    pub(crate) fn is_exhausted(&self, solutions_found: usize) -> bool {
        if let Some(limit) = self.solution_limit {
            if solutions_found >= limit {
                return true;
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_never_exhausts() {
        let armed = SearchBudget::unbounded().start();
        assert!(!armed.is_exhausted(0));
        assert!(!armed.is_exhausted(1_000_000));
    }

    #[test]
    fn solution_limit_trips_at_cap() {
        let armed = SearchBudget::unbounded()
            .with_solution_limit(5)
            .unwrap()
            .start();
        assert!(!armed.is_exhausted(4));
        assert!(armed.is_exhausted(5));
        assert!(armed.is_exhausted(6));
    }

    #[test]
    fn zero_caps_are_config_errors() {
        assert!(matches!(
            SearchBudget::unbounded().with_solution_limit(0),
            Err(ReginaError::Config(_))
        ));
        assert!(matches!(
            SearchBudget::unbounded().with_deadline(Duration::ZERO),
            Err(ReginaError::Config(_))
        ));
    }

    #[test]
    fn from_config_carries_both_caps() {
        let config = SearchConfig {
            solution_limit: Some(10),
            time_limit_ms: Some(500),
            benchmark: None,
        };
        let budget = SearchBudget::from_config(&config).unwrap();
        assert_eq!(budget.solution_limit(), Some(10));
        assert_eq!(budget.deadline(), Some(Duration::from_millis(500)));
    }
}
