// Semi-major axis a
pub(crate) const GRS80_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_F: f64 = 1.0 / 298.257222101;

// SWEREF 99 TM (EPSG:3006) projection definition
pub(crate) const SWEREF99_TM_LON0: f64 = 15.0;
pub(crate) const SWEREF99_TM_LAT0: f64 = 0.0;
pub(crate) const SWEREF99_TM_K0: f64 = 9996.0 / 10_000.;
pub(crate) const SWEREF99_TM_FN: f64 = 0.0;
pub(crate) const SWEREF99_TM_FE: f64 = 500_000.0;

// Spherical radius for small local offsets; the equatorial radius reused
// as a sphere radius, only valid for offsets of up to a few hundred meters
pub(crate) const OFFSET_SPHERE_R: f64 = 6_378_137.0;
