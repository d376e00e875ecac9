/// Scalar type of every property evaluation.
pub type Real = f64;

/// Acceptance band when comparing evaluated properties with tabulated ones.
///
/// A pair passes when it is within `abs` of each other, or within `rel` of the
/// larger magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Band with no absolute floor, as used against published tables.
    pub fn relative(rel: Real) -> Self {
        Self { abs: 0.0, rel }
    }

    /// Whether `a` and `b` agree. NaN agrees with nothing.
    pub fn accepts(&self, a: Real, b: Real) -> bool {
        let gap = (a - b).abs();
        gap <= self.abs || gap <= self.rel * a.abs().max(b.abs())
    }
}

/// Shorthand for [`Tolerances::accepts`].
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    tol.accepts(a, b)
}
