#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use lazy_static::lazy_static;
use thiserror::Error;

pub mod ellipsoid;
pub mod grid;
pub mod latlon;

pub use ellipsoid::{Ellipsoid, SeriesCoefficients};
pub use grid::GridPoint;
pub use latlon::LatLon;

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub use projections::transverse_mercator::{Projection, TransverseMercator};

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Ellipsoid parameters are not valid: {0}")]
    InvalidEllipsoid(String),
    #[error("Projection parameters are not valid: {0}")]
    InvalidProjection(String),
    #[error("Input outside the projection domain: {0}")]
    Domain(String),
}

lazy_static! {
    static ref SWEREF99_TM: TransverseMercator = TransverseMercator::sweref99_tm();
}

/// Projects a point with a process-wide SWEREF 99 TM projector
/// (GRS80 ellipsoid, central meridian 15°E, scale 0.9996, false easting
/// 500 000 m). The projector and its series coefficients are built once on
/// first use and shared by all callers.
///
/// # Errors
///
/// Returns [`Error::Domain`] if the point cannot be projected, see
/// [`TransverseMercator::project`].
///
/// # Usage
///
/// ```
/// use gridkruger::{to_sweref99_tm, LatLon};
///
/// // The equator/central-meridian intersection is the projection origin.
/// let origin = LatLon::create(0.0, 15.0).unwrap();
/// let grid = to_sweref99_tm(&origin).unwrap();
///
/// assert_eq!(grid.northing(), 0.0);
/// assert_eq!(grid.easting(), 500_000.0);
/// ```
pub fn to_sweref99_tm(point: &LatLon) -> Result<GridPoint, Error> {
    SWEREF99_TM.project(point)
}
