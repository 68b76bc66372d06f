use std::fmt::Display;

use crate::{constants::OFFSET_SPHERE_R, Error};

/// Representation of a geodetic latitude/longitude point. Can be projected
/// onto a grid with [`TransverseMercator::project`](crate::TransverseMercator::project).
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180)
    ///
    /// NaN and infinite values fail the range checks, so a constructed point
    /// always carries finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridkruger::LatLon;
    ///
    /// let coord = LatLon::create(59.325117, 18.071094);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 59.325117);
    /// assert_eq!(coord.longitude(), 18.071094);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-180_f64..180_f64).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    ///
    /// # Example
    /// ```
    /// use gridkruger::LatLon;
    ///
    /// let coord = LatLon::create(59.325117, 18.071094).unwrap();
    /// assert_eq!(coord.latitude(), 59.325117);
    /// ```
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    ///
    /// # Example
    /// ```
    /// use gridkruger::LatLon;
    ///
    /// let coord = LatLon::create(59.325117, 18.071094).unwrap();
    /// assert_eq!(coord.longitude(), 18.071094);
    /// ```
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Shifts the point `north_m` meters northward and `east_m` meters
    /// eastward on a sphere of radius 6 378 137 m (the equatorial radius
    /// reused as a sphere radius). The approximation is only good for small
    /// offsets, tens to a few hundred meters, away from the poles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if the point sits exactly on a pole (the
    /// eastward step divides by `cos(latitude)`), if either distance is
    /// non-finite, or if the shifted point leaves the valid lat/lon ranges.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridkruger::LatLon;
    ///
    /// let coord = LatLon::create(57.0, 11.9).unwrap();
    /// let shifted = coord.offset(100.0, 0.0).unwrap();
    ///
    /// // 100 m north is roughly 0.000898 degrees of latitude
    /// assert!((shifted.latitude() - 57.000898).abs() < 1e-5);
    /// assert_eq!(shifted.longitude(), 11.9);
    ///
    /// let pole = LatLon::create(90.0, 0.0).unwrap();
    /// assert!(pole.offset(10.0, 10.0).is_err());
    /// ```
    pub fn offset(&self, north_m: f64, east_m: f64) -> Result<LatLon, Error> {
        if !(north_m.is_finite() && east_m.is_finite()) {
            return Err(Error::Domain(
                format!("Offset distances ({north_m}, {east_m}) must be finite.")
            ));
        }
        if self.latitude.abs() == 90.0 {
            return Err(Error::Domain(
                format!("Cannot offset eastward at latitude {}.", self.latitude)
            ));
        }

        // Angular offsets in radians; divide by the radius first
        let d_lat = north_m / OFFSET_SPHERE_R;
        let d_lon = east_m / (OFFSET_SPHERE_R * self.latitude.to_radians().cos());

        let lat = self.latitude + d_lat.to_degrees();
        let lon = self.longitude + d_lon.to_degrees();

        LatLon::create(lat, lon).map_err(|_| Error::Domain(
            format!("Offset ({north_m} m, {east_m} m) moves ({self}) outside the valid coordinate range.")
        ))
    }

    /// Returns the two corners of a square bounding box `radius_m` meters
    /// around the point: first the corner offset by `(-radius_m, -radius_m)`,
    /// then the one offset by `(radius_m, radius_m)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if either corner falls outside the valid
    /// coordinate ranges, see [`LatLon::offset`].
    pub fn bbox_corners(&self, radius_m: f64) -> Result<(LatLon, LatLon), Error> {
        let min = self.offset(-radius_m, -radius_m)?;
        let max = self.offset(radius_m, radius_m)?;

        Ok((min, max))
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
