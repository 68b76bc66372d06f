use gridkruger::{
    to_sweref99_tm, Ellipsoid, Error, LatLon, Projection, SeriesCoefficients, TransverseMercator,
};

#[test]
fn derivation_is_deterministic() {
    let ellps = Ellipsoid::create(6_378_137.0, 1.0 / 298.257222101).unwrap();

    let first = SeriesCoefficients::derive(&ellps);
    let second = SeriesCoefficients::derive(&ellps);

    // Pure function of the ellipsoid, so bit-identical every time
    assert_eq!(first, second);
    assert_eq!(first.conformal_radius(), second.conformal_radius());
}

#[test]
fn origin_maps_to_false_origin() {
    let origin = LatLon::create(0.0, 15.0).unwrap();
    let grid = to_sweref99_tm(&origin).unwrap();

    assert_eq!(grid.northing(), 0.0);
    assert_eq!(grid.easting(), 500_000.0);
}

#[test]
fn central_meridian_keeps_false_easting() {
    let projector = TransverseMercator::sweref99_tm();

    for lat in [-35.0, 10.0, 45.0, 59.325117, 67.85, 89.0] {
        let point = LatLon::create(lat, 15.0).unwrap();
        let grid = projector.project(&point).unwrap();

        // No east-west displacement on the central meridian itself
        assert_eq!(grid.easting(), 500_000.0, "latitude {lat}");
        assert_eq!(grid.northing() > 0.0, lat > 0.0, "latitude {lat}");
    }
}

#[test]
fn eastings_mirror_about_central_meridian() {
    let projector = TransverseMercator::sweref99_tm();

    for d in [0.1, 0.5, 1.0, 3.0] {
        let east = LatLon::create(59.0, 15.0 + d).unwrap();
        let west = LatLon::create(59.0, 15.0 - d).unwrap();

        let grid_east = projector.project(&east).unwrap();
        let grid_west = projector.project(&west).unwrap();

        // Same distance from the meridian, mirrored around the false easting;
        // inputs differ before degree conversion so allow the rounding step
        // to move each side by one millimeter
        assert!(
            (grid_east.easting() + grid_west.easting() - 1_000_000.0).abs() <= 2e-3,
            "offset {d}"
        );
        assert!(
            (grid_east.northing() - grid_west.northing()).abs() <= 2e-3,
            "offset {d}"
        );
    }
}

#[test]
fn northing_grows_with_latitude() {
    let projector = TransverseMercator::sweref99_tm();

    let mut previous = f64::MIN;
    for lat in [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 89.0] {
        let point = LatLon::create(lat, 15.0).unwrap();
        let northing = projector.project(&point).unwrap().northing();

        assert!(northing > previous, "latitude {lat}");
        previous = northing;
    }
}

#[test]
fn custom_projection_applies_false_origin() {
    let ellps = Ellipsoid::create(6_378_137.0, 1.0 / 298.257222101).unwrap();
    let proj = Projection::create(15.0, 0.0, 0.9996, 2_000_000.0, 750_000.0).unwrap();
    let projector = TransverseMercator::new(&ellps, proj);

    let origin = LatLon::create(0.0, 15.0).unwrap();
    let grid = projector.project(&origin).unwrap();

    assert_eq!(grid.northing(), 2_000_000.0);
    assert_eq!(grid.easting(), 750_000.0);
}

#[test]
fn definitions_expose_their_parameters() {
    let ellps = Ellipsoid::create(6_378_137.0, 1.0 / 298.257222101).unwrap();
    assert_eq!(ellps.semimajor_axis(), 6_378_137.0);
    assert_eq!(ellps.flattening(), 1.0 / 298.257222101);

    let proj = Projection::create(15.0, 0.0, 0.9996, 0.0, 500_000.0).unwrap();
    assert_eq!(proj.central_meridian(), 15.0);
    assert_eq!(proj.latitude_of_origin(), 0.0);
    assert_eq!(proj.scale(), 0.9996);
    assert_eq!(proj.false_northing(), 0.0);
    assert_eq!(proj.false_easting(), 500_000.0);

    let projector = TransverseMercator::new(&ellps, proj);
    assert_eq!(*projector.projection(), proj);
    assert_eq!(*projector.coefficients(), ellps.coefficients());
}

#[test]
fn offset_round_trip() {
    let point = LatLon::create(59.3293, 18.0686).unwrap();

    let shifted = point.offset(25.0, 40.0).unwrap();
    let back = shifted.offset(-25.0, -40.0).unwrap();

    assert!((back.latitude() - point.latitude()).abs() < 1e-6);
    assert!((back.longitude() - point.longitude()).abs() < 1e-6);
}

#[test]
fn bbox_corners_straddle_the_point() {
    let point = LatLon::create(59.3293, 18.0686).unwrap();
    let (min, max) = point.bbox_corners(50.0).unwrap();

    assert!(min.latitude() < point.latitude() && point.latitude() < max.latitude());
    assert!(min.longitude() < point.longitude() && point.longitude() < max.longitude());

    // Corners project to a well-ordered box
    let grid_min = to_sweref99_tm(&min).unwrap();
    let grid_max = to_sweref99_tm(&max).unwrap();
    assert!(grid_min.northing() < grid_max.northing());
    assert!(grid_min.easting() < grid_max.easting());
}

#[test]
fn rejects_singular_inputs() {
    assert!(matches!(
        Ellipsoid::create(6_378_137.0, 0.0),
        Err(Error::InvalidEllipsoid(_))
    ));

    let projector = TransverseMercator::sweref99_tm();
    let pole = LatLon::create(90.0, 0.0).unwrap();
    assert!(matches!(projector.project(&pole), Err(Error::Domain(_))));

    assert!(matches!(pole.offset(10.0, 10.0), Err(Error::Domain(_))));

    // Pushing past the pole is rejected, not wrapped
    let near_pole = LatLon::create(89.9999, 0.0).unwrap();
    assert!(matches!(
        near_pole.offset(1_000_000.0, 0.0),
        Err(Error::Domain(_))
    ));

    assert!(matches!(
        near_pole.offset(f64::NAN, 0.0),
        Err(Error::Domain(_))
    ));
}

#[test]
fn outputs_are_millimeter_rounded() {
    let projector = TransverseMercator::sweref99_tm();

    for (lat, lon) in [
        (57.705918, 11.968411),
        (59.325117, 18.071094),
        (63.825847, 20.263035),
        (67.855678, 20.225370),
        (-33.8568, 18.4740),
    ] {
        let point = LatLon::create(lat, lon).unwrap();
        let grid = projector.project(&point).unwrap();

        assert_eq!((grid.northing() * 1000.0).round() / 1000.0, grid.northing());
        assert_eq!((grid.easting() * 1000.0).round() / 1000.0, grid.easting());
    }
}
