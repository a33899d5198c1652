//! Filter criteria.
//!
//! A [`Criteria`] value is rebuilt by the caller for every search; the five
//! fields are independent and all optional, so the default value matches
//! every property.

use chrono::NaiveDate;

/// A closed numeric interval `[min, max]`.
///
/// Bounds that are not finite numbers make the interval unusable, which the
/// filter engine treats as "no constraint" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both ends are well-formed numbers.
    pub fn is_usable(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The active filter constraints for one search.
///
/// `kind` uses the sentinel `"all"` to mean "no constraint", mirroring the
/// value the type selector hands over when nothing is picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub kind: Option<String>,
    pub price: Option<Bounds>,
    pub bedrooms: Option<Bounds>,
    /// Threshold instant: only properties added on or after this date pass.
    pub added_since: Option<NaiveDate>,
    pub postcode: Option<String>,
}

impl Criteria {
    /// No field imposes a constraint; filtering with this value is the
    /// identity.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let b = Bounds::new(100.0, 200.0);
        assert!(b.contains(100.0));
        assert!(b.contains(200.0));
        assert!(b.contains(150.0));
        assert!(!b.contains(99.9));
        assert!(!b.contains(200.1));
    }

    #[test]
    fn non_finite_bounds_are_unusable() {
        assert!(!Bounds::new(f64::NAN, 10.0).is_usable());
        assert!(!Bounds::new(0.0, f64::INFINITY).is_usable());
        assert!(Bounds::new(0.0, 10.0).is_usable());
    }

    #[test]
    fn default_criteria_is_unconstrained() {
        assert!(Criteria::default().is_unconstrained());

        let mut c = Criteria::default();
        c.postcode = Some("NW1".to_string());
        assert!(!c.is_unconstrained());
    }
}
