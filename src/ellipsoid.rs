use crate::{utility::polyval, Error};
use crate::constants::{GRS80_A, GRS80_F};

// ================================
// Krüger Series Constants
// ================================

// Truncation order of the forward Krüger series in the third flattening n
pub(crate) const MAXPOW: usize = 4;

const AROOF_COEFF: [f64; 4] = [
    // a_roof*(1+n)/a, polynomial in n2 of order 2
    1., 16., 64., 64.,
];  // count = 4

const ARC_COEFF: [f64; 10] = [
    // arc[1]/e2^1, polynomial in e2 of order 0
    1., 1.,
    // arc[2]/e2^2, polynomial in e2 of order 1
    -1., 5., 6.,
    // arc[3]/e2^3, polynomial in e2 of order 1
    -45., 104., 120.,
    // arc[4]/e2^4, polynomial in e2 of order 0
    1237., 1260.,
];  // count = 10

#[allow(clippy::unreadable_literal)]
const BETA_COEFF: [f64; 14] = [
    // beta[1]/n^1, polynomial in n of order 3
    164., 225., -480., 360., 720.,
    // beta[2]/n^2, polynomial in n of order 2
    557., -864., 390., 1440.,
    // beta[3]/n^3, polynomial in n of order 1
    -1236., 427., 1680.,
    // beta[4]/n^4, polynomial in n of order 0
    49561., 161280.,
];  // count = 14

/// Reference ellipsoid given by semi-major axis (meters) and flattening.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    pub(crate) a: f64,
    pub(crate) f: f64,
}

impl Ellipsoid {
    /// Internal-only constructor that doesn't check the parameter bounds
    pub(crate) fn new(a: f64, f: f64) -> Ellipsoid {
        Self { a, f }
    }

    /// Tries to create an ellipsoid from a semi-major axis/flattening pair.
    /// First checks if the values are valid:
    /// * Semi-major axis must be positive
    /// * Flattening must be in range (0,1), both ends exclusive
    ///
    /// Non-finite values are rejected by the same checks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEllipsoid`] if either parameter is invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridkruger::Ellipsoid;
    ///
    /// let ellps = Ellipsoid::create(6_378_137.0, 1.0 / 298.257222101);
    /// assert!(ellps.is_ok());
    ///
    /// // A sphere has no defined eccentricity here
    /// let sphere = Ellipsoid::create(6_378_137.0, 0.0);
    /// assert!(sphere.is_err());
    ///
    /// let negative_axis = Ellipsoid::create(-1.0, 1.0 / 298.257222101);
    /// assert!(negative_axis.is_err());
    /// ```
    pub fn create(a: f64, f: f64) -> Result<Ellipsoid, Error> {
        if !(a > 0.0 && a.is_finite()) {
            Err(Error::InvalidEllipsoid(format!("Semi-major axis {a} must be positive and finite.")))
        } else if !(0.0 < f && f < 1.0) {
            Err(Error::InvalidEllipsoid(format!("Flattening {f} outside of valid range (0, 1).")))
        } else {
            Ok(Ellipsoid::new(a, f))
        }
    }

    /// The GRS 1980 reference ellipsoid.
    pub fn grs80() -> Ellipsoid {
        Ellipsoid::new(GRS80_A, GRS80_F)
    }

    /// Returns the semi-major axis in meters.
    ///
    /// # Example
    /// ```
    /// use gridkruger::Ellipsoid;
    ///
    /// let ellps = Ellipsoid::grs80();
    /// assert_eq!(ellps.semimajor_axis(), 6_378_137.0);
    /// ```
    #[inline]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// Returns the flattening.
    ///
    /// # Example
    /// ```
    /// use gridkruger::Ellipsoid;
    ///
    /// let ellps = Ellipsoid::grs80();
    /// assert_eq!(ellps.flattening(), 1.0 / 298.257222101);
    /// ```
    #[inline]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// Derives the Krüger series coefficients for this ellipsoid.
    /// Shorthand for [`SeriesCoefficients::derive`].
    pub fn coefficients(&self) -> SeriesCoefficients {
        SeriesCoefficients::derive(self)
    }
}

/// Projection constants derived from an [`Ellipsoid`]: the conformal-sphere
/// radius, the meridian-arc series coefficients and the forward Krüger
/// series coefficients.
///
/// Derivation is a pure function of the ellipsoid, so coefficients can be
/// computed once and reused across any number of conversions.
///
/// # Usage
///
/// ```
/// use gridkruger::{Ellipsoid, SeriesCoefficients};
///
/// let ellps = Ellipsoid::grs80();
///
/// // Bit-identical on every derivation
/// assert_eq!(SeriesCoefficients::derive(&ellps), SeriesCoefficients::derive(&ellps));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesCoefficients {
    pub(crate) a_roof: f64,
    // Both arrays are 1-based; index 0 is unused
    pub(crate) arc: [f64; MAXPOW + 1],
    pub(crate) beta: [f64; MAXPOW + 1],
}

impl SeriesCoefficients {
    /// Computes the derived series for `ellipsoid`.
    ///
    /// The meridian-arc coefficients are a degree-8 truncation in the
    /// eccentricity-squared `e2`, the Krüger coefficients a degree-4
    /// truncation in the third flattening `n`. The truncation orders fix the
    /// accuracy of the projection and are not tunable.
    pub fn derive(ellipsoid: &Ellipsoid) -> SeriesCoefficients {
        let f = ellipsoid.f;
        let e2 = f * (2. - f);
        let n = f / (2. - f);

        // a_roof is the equivalent radius of the conformal sphere.
        let a_roof = ellipsoid.a * polyval(&AROOF_COEFF[0..=2], n * n)
            / (AROOF_COEFF[3] * (1. + n));

        let e4 = e2 * e2;
        let e6 = e4 * e2;
        let e8 = e6 * e2;

        let mut arc = [0_f64; MAXPOW + 1];
        arc[1] = e2 * ARC_COEFF[0] / ARC_COEFF[1];
        arc[2] = e4 * polyval(&ARC_COEFF[2..=3], e2) / ARC_COEFF[4];
        arc[3] = e6 * polyval(&ARC_COEFF[5..=6], e2) / ARC_COEFF[7];
        arc[4] = e8 * ARC_COEFF[8] / ARC_COEFF[9];

        let mut beta = [0_f64; MAXPOW + 1];

        let mut o = 0;
        let mut d = n;

        for l in 1..=MAXPOW {
            let m = MAXPOW - l;
            beta[l] = d * polyval(&BETA_COEFF[o..=o+m], n) / BETA_COEFF[o + m + 1];
            o += m + 2;
            d *= n;
        }

        Self {
            a_roof,
            arc,
            beta,
        }
    }

    /// Radius of the conformal sphere, in meters.
    #[inline]
    pub fn conformal_radius(&self) -> f64 {
        self.a_roof
    }

    /// Meridian-arc series coefficients A, B, C, D.
    pub fn meridian_arc(&self) -> [f64; MAXPOW] {
        [self.arc[1], self.arc[2], self.arc[3], self.arc[4]]
    }

    /// Forward Krüger series coefficients β1..β4.
    pub fn kruger_beta(&self) -> [f64; MAXPOW] {
        [self.beta[1], self.beta[2], self.beta[3], self.beta[4]]
    }
}

#[cfg(test)]
mod tests {
    use super::{Ellipsoid, SeriesCoefficients};

    #[test]
    fn grs80_derived_constants() {
        let coeffs = SeriesCoefficients::derive(&Ellipsoid::grs80());

        // arc[1] is the eccentricity-squared of GRS80
        assert!((coeffs.meridian_arc()[0] - 0.006_694_380_022_90).abs() < 1e-12);
        // Published value of the conformal-sphere radius for GRS80
        assert!((coeffs.conformal_radius() - 6_367_449.145_8).abs() < 1e-2);
        // Leading Krüger coefficient
        assert!((coeffs.kruger_beta()[0] - 8.377_318_2e-4).abs() < 1e-11);
    }

    #[test]
    fn coefficient_signs() {
        let coeffs = SeriesCoefficients::derive(&Ellipsoid::grs80());

        for c in coeffs.meridian_arc() {
            assert!(c > 0.0);
        }
        for b in coeffs.kruger_beta() {
            assert!(b > 0.0);
        }
        // Terms fall off fast for small flattening
        let beta = coeffs.kruger_beta();
        assert!(beta[0] > beta[1] && beta[1] > beta[2] && beta[2] > beta[3]);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(Ellipsoid::create(6_378_137.0, 0.0).is_err());
        assert!(Ellipsoid::create(6_378_137.0, 1.0).is_err());
        assert!(Ellipsoid::create(0.0, 0.003).is_err());
        assert!(Ellipsoid::create(f64::NAN, 0.003).is_err());
        assert!(Ellipsoid::create(6_378_137.0, f64::INFINITY).is_err());
    }
}
