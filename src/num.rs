use ordered_float::NotNan;

/// A non-NaN f64 value in the range [0, 1].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Normalized(NotNan<f64>);

impl Normalized {
    pub fn new(value: f64) -> Option<Self> {
        let value = NotNan::new(value).ok()?;
        if value.is_sign_negative() || *value > 1.0 {
            return None;
        }
        Some(Self(value))
    }

    /// Clamp `value` into [0, 1] before checking it. Only NaN is rejected.
    pub fn clamp(value: f64) -> Option<Self> {
        let value = value.clamp(0.0, 1.0);
        // Fold -0.0 into 0.0.
        Self::new(if value == 0.0 { 0.0 } else { value })
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }
}

impl std::cmp::PartialOrd for Normalized {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for Normalized {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl std::fmt::Debug for Normalized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Normalized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A finite, non-negative, non-NaN f64 value. A weight of zero removes its criterion from the
/// weighted-normalized space.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Weight(NotNan<f64>);

impl Weight {
    pub fn new(value: f64) -> Option<Self> {
        let value = NotNan::new(value).ok()?;
        if value.is_sign_negative() || value.is_infinite() {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }
}

impl std::fmt::Debug for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::{Normalized, Weight};

    #[test]
    fn normalized_limits() {
        let zero = Normalized::new(0.0).unwrap();
        let one = Normalized::new(1.0).unwrap();
        assert_eq!(Normalized::new(-0.0), None);
        assert_eq!(Normalized::new(1.0 + 1e-12), None);
        assert_eq!(Normalized::new(f64::NAN), None);
        assert_eq!(Normalized::clamp(1.0 + 1e-12), Some(one));
        assert_eq!(Normalized::clamp(-0.0), Some(zero));
        assert_eq!(Normalized::clamp(-3.0), Some(zero));
        assert_eq!(Normalized::clamp(f64::NAN), None);
        assert!(zero < one);
    }

    #[test]
    fn weight_limits() {
        assert_eq!(Weight::new(0.0).map(|w| w.as_f64()), Some(0.0));
        assert_eq!(Weight::new(2.5).map(|w| w.as_f64()), Some(2.5));
        assert_eq!(Weight::new(-1.0), None);
        assert_eq!(Weight::new(f64::NAN), None);
        assert_eq!(Weight::new(f64::INFINITY), None);
    }
}
