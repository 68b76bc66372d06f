use std::fmt::Display;

/// Planar grid coordinate produced by
/// [`TransverseMercator::project`](crate::TransverseMercator::project).
///
/// Axis naming follows the geodetic convention: the x axis is the
/// `northing` (south-north) and the y axis the `easting` (west-east),
/// which is the reverse of the usual Cartesian reading. Both values are
/// meters, rounded to millimeter resolution with ties away from zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub(crate) northing: f64,
    pub(crate) easting: f64,
}

impl GridPoint {
    pub(crate) fn new(northing: f64, easting: f64) -> GridPoint {
        Self {
            northing,
            easting,
        }
    }

    /// Returns the northing (x) value in meters.
    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Returns the easting (y) value in meters.
    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }
}

impl Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        write!(
            f,
            "{northing} {easting}",
        )
    }
}
