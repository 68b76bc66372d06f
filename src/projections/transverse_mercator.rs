use crate::{
    constants::{
        SWEREF99_TM_FE, SWEREF99_TM_FN, SWEREF99_TM_K0, SWEREF99_TM_LAT0, SWEREF99_TM_LON0,
    },
    ellipsoid::{Ellipsoid, SeriesCoefficients, MAXPOW},
    grid::GridPoint,
    latlon::LatLon,
    utility::round_mm,
    Error,
};

/// Definition of a Transverse Mercator projected reference system: central
/// meridian and latitude of origin in degrees, central scale factor, false
/// northing/easting in meters.
///
/// The latitude of origin is part of the definition but enters no formula;
/// every system this crate targets puts the origin on the equator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    pub(crate) central_meridian: f64,
    pub(crate) latitude_of_origin: f64,
    pub(crate) scale: f64,
    pub(crate) false_northing: f64,
    pub(crate) false_easting: f64,
}

impl Projection {
    pub(crate) fn new(
        central_meridian: f64,
        latitude_of_origin: f64,
        scale: f64,
        false_northing: f64,
        false_easting: f64,
    ) -> Projection {
        Self {
            central_meridian,
            latitude_of_origin,
            scale,
            false_northing,
            false_easting,
        }
    }

    /// Tries to create a projection definition. First checks if the
    /// values are valid:
    /// * Central meridian must be in range [-180,180]
    /// * Latitude of origin must be in range [-90,90]
    /// * Scale factor must be positive and finite
    /// * False northing/easting must be finite
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProjection`] if any parameter is invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridkruger::Projection;
    ///
    /// let proj = Projection::create(15.0, 0.0, 0.9996, 0.0, 500_000.0);
    /// assert!(proj.is_ok());
    ///
    /// let bad_scale = Projection::create(15.0, 0.0, -1.0, 0.0, 500_000.0);
    /// assert!(bad_scale.is_err());
    /// ```
    pub fn create(
        central_meridian: f64,
        latitude_of_origin: f64,
        scale: f64,
        false_northing: f64,
        false_easting: f64,
    ) -> Result<Projection, Error> {
        if !(-180_f64..=180_f64).contains(&central_meridian) {
            Err(Error::InvalidProjection(
                format!("Central meridian {central_meridian} outside of valid range [-180, 180].")
            ))
        } else if !(-90_f64..=90_f64).contains(&latitude_of_origin) {
            Err(Error::InvalidProjection(
                format!("Latitude of origin {latitude_of_origin} outside of valid range [-90, 90].")
            ))
        } else if !(scale > 0.0 && scale.is_finite()) {
            Err(Error::InvalidProjection(
                format!("Scale factor {scale} must be positive and finite.")
            ))
        } else if !(false_northing.is_finite() && false_easting.is_finite()) {
            Err(Error::InvalidProjection(
                format!("False northing/easting ({false_northing}, {false_easting}) must be finite.")
            ))
        } else {
            Ok(Projection::new(
                central_meridian,
                latitude_of_origin,
                scale,
                false_northing,
                false_easting,
            ))
        }
    }

    /// The SWEREF 99 TM (EPSG:3006) projection definition.
    pub fn sweref99_tm() -> Projection {
        Projection::new(
            SWEREF99_TM_LON0,
            SWEREF99_TM_LAT0,
            SWEREF99_TM_K0,
            SWEREF99_TM_FN,
            SWEREF99_TM_FE,
        )
    }

    /// Returns the central meridian in degrees.
    ///
    /// # Example
    /// ```
    /// use gridkruger::Projection;
    ///
    /// let proj = Projection::sweref99_tm();
    /// assert_eq!(proj.central_meridian(), 15.0);
    /// ```
    #[inline]
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }

    /// Returns the latitude of origin in degrees.
    ///
    /// # Example
    /// ```
    /// use gridkruger::Projection;
    ///
    /// let proj = Projection::sweref99_tm();
    /// assert_eq!(proj.latitude_of_origin(), 0.0);
    /// ```
    #[inline]
    pub fn latitude_of_origin(&self) -> f64 {
        self.latitude_of_origin
    }

    /// Returns the central scale factor.
    ///
    /// # Example
    /// ```
    /// use gridkruger::Projection;
    ///
    /// let proj = Projection::sweref99_tm();
    /// assert_eq!(proj.scale(), 0.9996);
    /// ```
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the false northing in meters.
    ///
    /// # Example
    /// ```
    /// use gridkruger::Projection;
    ///
    /// let proj = Projection::sweref99_tm();
    /// assert_eq!(proj.false_northing(), 0.0);
    /// ```
    #[inline]
    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    /// Returns the false easting in meters.
    ///
    /// # Example
    /// ```
    /// use gridkruger::Projection;
    ///
    /// let proj = Projection::sweref99_tm();
    /// assert_eq!(proj.false_easting(), 500_000.0);
    /// ```
    #[inline]
    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }
}

/// Forward geodetic-to-grid projector using Krüger's conformal series.
///
/// The ellipsoid series is derived once at construction and reused for
/// every conversion, so build the projector once and keep it around when
/// projecting many points.
pub struct TransverseMercator {
    projection: Projection,
    coeffs: SeriesCoefficients,
}

impl TransverseMercator {
    /// Builds a projector for `projection` on `ellipsoid`.
    pub fn new(ellipsoid: &Ellipsoid, projection: Projection) -> TransverseMercator {
        Self {
            projection,
            coeffs: SeriesCoefficients::derive(ellipsoid),
        }
    }

    /// A projector for SWEREF 99 TM on the GRS80 ellipsoid.
    pub fn sweref99_tm() -> TransverseMercator {
        TransverseMercator::new(&Ellipsoid::grs80(), Projection::sweref99_tm())
    }

    /// Returns the projection definition this projector was built with.
    ///
    /// # Example
    /// ```
    /// use gridkruger::TransverseMercator;
    ///
    /// let projector = TransverseMercator::sweref99_tm();
    /// assert_eq!(projector.projection().false_easting(), 500_000.0);
    /// ```
    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Returns the series coefficients derived at construction.
    ///
    /// # Example
    /// ```
    /// use gridkruger::TransverseMercator;
    ///
    /// let projector = TransverseMercator::sweref99_tm();
    /// // Conformal-sphere radius is a little under the semi-major axis
    /// assert!(projector.coefficients().conformal_radius() < 6_378_137.0);
    /// ```
    #[inline]
    pub fn coefficients(&self) -> &SeriesCoefficients {
        &self.coeffs
    }

    /// Projects a geodetic point onto the grid.
    ///
    /// The result is deterministic for identical inputs and rounded to
    /// millimeter resolution, ties away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if the latitude is exactly ±90° (the
    /// conformal latitude tangent and the `atanh` term are singular at the
    /// poles) or if the point is so far from the central meridian that the
    /// mapping blows up.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridkruger::{LatLon, TransverseMercator};
    ///
    /// let projector = TransverseMercator::sweref99_tm();
    ///
    /// let origin = LatLon::create(0.0, 15.0).unwrap();
    /// let grid = projector.project(&origin).unwrap();
    ///
    /// // The projection origin maps to the false origin exactly
    /// assert_eq!(grid.northing(), 0.0);
    /// assert_eq!(grid.easting(), 500_000.0);
    ///
    /// let pole = LatLon::create(90.0, 0.0).unwrap();
    /// assert!(projector.project(&pole).is_err());
    /// ```
    pub fn project(&self, point: &LatLon) -> Result<GridPoint, Error> {
        if point.latitude.abs() == 90.0 {
            return Err(Error::Domain(
                format!("Latitude {} is a projection singularity.", point.latitude)
            ));
        }

        let phi = point.latitude.to_radians();
        let lambda = point.longitude.to_radians();
        let lambda_zero = self.projection.central_meridian.to_radians();

        let arc = &self.coeffs.arc;
        let phi_star = phi - phi.sin() * phi.cos() * (arc[1]
            + arc[2] * phi.sin().powi(2)
            + arc[3] * phi.sin().powi(4)
            + arc[4] * phi.sin().powi(6));

        let delta_lambda = lambda - lambda_zero;
        let xi_prim = (phi_star.tan() / delta_lambda.cos()).atan();
        let eta_prim = (phi_star.cos() * delta_lambda.sin()).atanh();

        let mut northing = xi_prim;
        let mut easting = eta_prim;

        for l in 1..=MAXPOW {
            let arg = 2. * l as f64;
            northing += self.coeffs.beta[l] * (arg * xi_prim).sin() * (arg * eta_prim).cosh();
            easting += self.coeffs.beta[l] * (arg * xi_prim).cos() * (arg * eta_prim).sinh();
        }

        let k = self.projection.scale * self.coeffs.a_roof;
        let northing = k * northing + self.projection.false_northing;
        let easting = k * easting + self.projection.false_easting;

        if !(northing.is_finite() && easting.is_finite()) {
            return Err(Error::Domain(
                format!(
                    "Point ({point}) is too far from the central meridian {} to project.",
                    self.projection.central_meridian,
                )
            ));
        }

        Ok(GridPoint::new(round_mm(northing), round_mm(easting)))
    }
}
