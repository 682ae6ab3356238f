// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The geodesic module contains functions for solving the direct geodesic
//! problem on the surface of an ellipsoid: given a start point, an azimuth
//! and a distance, find the end point and the azimuth at the end point.
//!
//! A geodesic is mapped onto a great circle on the auxiliary sphere, with:
//! - triangle NEA: the North pole, the Northbound Equator crossing and the
//!   start point;
//! - triangle NEB: the North pole, the Northbound Equator crossing and the
//!   end point.
//!
//! The distance along the great circle, `sigma`, and its longitude, `omega`,
//! are converted to ellipsoidal distance and longitude by the series in
//! `ellipsoid::coefficients`.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::coefficients::{
    evaluate_a1, evaluate_a2, evaluate_coeffs_c1, evaluate_coeffs_c1p, evaluate_coeffs_c2,
    sin_series, SERIES_ORDER,
};
use crate::ellipsoid::calculate_epsilon;
use crate::error::{check_range, Error};
use crate::{Ellipsoid, Metres};
use angle_sc::{Angle, Degrees, Radians};
use unit_sphere::LatLong;

/// The maximum length of a geodesic in metres.
pub const MAX_LENGTH: Metres = Metres(1e11);

/// Latitudes closer to a pole than this ratio are moved to it: 2^-38.
const POLAR_EPSILON: f64 = 1.0 / 274_877_906_944.0;

/// The maximum absolute latitude, in degrees, of a start point.
pub const MAX_LATITUDE: Degrees = Degrees(90.0 * (1.0 - POLAR_EPSILON));

/// A solution of the direct geodesic problem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// The latitude of the start point.
    pub lat1: Degrees,
    /// The longitude of the start point.
    pub lon1: Degrees,
    /// The azimuth at the start point.
    pub azi1: Degrees,
    /// The latitude of the end point.
    pub lat2: Degrees,
    /// The longitude of the end point.
    pub lon2: Degrees,
    /// The azimuth at the end point.
    pub azi2: Degrees,
    /// The length of the geodesic.
    pub s12: Metres,
    /// The length of the great circle arc on the auxiliary sphere.
    pub a12: Degrees,
    /// The reduced length of the geodesic.
    pub m12: Metres,
}

impl Solution {
    /// The start point of the geodesic.
    #[must_use]
    pub fn start(&self) -> LatLong {
        LatLong::new(self.lat1, self.lon1)
    }

    /// The end point of the geodesic.
    #[must_use]
    pub fn finish(&self) -> LatLong {
        LatLong::new(self.lat2, self.lon2)
    }
}

/// The solution of triangle NEA: the great circle through the start point.
#[derive(Clone, Copy, Debug)]
struct StartTriangle {
    /// The azimuth at the Northbound Equator crossing.
    alpha0: Angle,
    /// The arc length from the Equator crossing to the start point.
    sigma1: f64,
    /// The longitude from the Equator crossing to the start point.
    omega1: f64,
}

/// Solve triangle NEA.
/// * `beta1` - the parametric latitude of the start point.
/// * `alpha1` - the azimuth at the start point.
#[must_use]
fn solve_start_triangle(beta1: Angle, alpha1: Angle) -> StartTriangle {
    let (sin_beta1, cos_beta1) = (beta1.sin().0, beta1.cos().0);
    let (sin_alpha1, cos_alpha1) = (alpha1.sin().0, alpha1.cos().0);

    // Clairaut's constant is sin alpha0
    let alpha0 = Angle::from_y_x(
        sin_alpha1 * cos_beta1,
        libm::hypot(cos_alpha1, sin_alpha1 * sin_beta1),
    );
    let sigma1 = libm::atan2(sin_beta1, cos_alpha1 * cos_beta1);
    let (sin_sigma1, cos_sigma1) = libm::sincos(sigma1);
    let omega1 = libm::atan2(alpha0.sin().0 * sin_sigma1, cos_sigma1);

    StartTriangle {
        alpha0,
        sigma1,
        omega1,
    }
}

/// Integrate a series along the great circle from the Equator crossing.
///   `scale * (sigma + sum(coeffs[i] * sin((2*i + 2) * sigma)))`
#[must_use]
fn integrate(scale: f64, coeffs: &[f64], sigma: f64) -> f64 {
    scale * (sigma + sin_series(coeffs, Radians(sigma)).0)
}

/// Calculate the reduced length of a geodesic in units of the Semiminor axis.
/// CFF Karney, Eqs. 38, 40-41.
/// * `eps` - epsilon the integration variable.
/// * `k2` - the square of Karney equation 9.
/// * `sigma1`, `sigma2` - the start and end arc lengths from the Equator crossing.
#[must_use]
fn calculate_reduced_length(eps: f64, k2: f64, sigma1: f64, sigma2: f64) -> f64 {
    let a1 = evaluate_a1(eps);
    let a2 = evaluate_a2(eps);
    let c1 = evaluate_coeffs_c1(eps);
    let c2 = evaluate_coeffs_c2(eps);

    let mut cb = [0.0; SERIES_ORDER];
    for ((b, ca), cc) in cb.iter_mut().zip(c1).zip(c2) {
        *b = a1 * ca - a2 * cc;
    }

    let j12 = (a1 - a2) * (sigma2 - sigma1)
        + (sin_series(&cb, Radians(sigma2)).0 - sin_series(&cb, Radians(sigma1)).0);

    let (sin_sigma1, cos_sigma1) = libm::sincos(sigma1);
    let (sin_sigma2, cos_sigma2) = libm::sincos(sigma2);
    let dn1 = libm::sqrt(1.0 + k2 * sin_sigma1 * sin_sigma1);
    let dn2 = libm::sqrt(1.0 + k2 * sin_sigma2 * sin_sigma2);

    dn2 * (cos_sigma1 * sin_sigma2)
        - dn1 * (sin_sigma1 * cos_sigma2)
        - cos_sigma1 * cos_sigma2 * j12
}

/// Calculate `cos alpha2 * cos beta2`, the non-negative cosine term of the
/// azimuth at latitude beta2, given the start latitude and azimuth.
/// * `beta1`, `beta2` - the parametric latitudes of the start and end points.
/// * `cos_alpha1` - the cosine of the start azimuth.
#[must_use]
fn calculate_end_azimuth_cosine(beta1: Angle, beta2: Angle, cos_alpha1: f64) -> f64 {
    let (sin_beta1, cos_beta1) = (beta1.sin().0, beta1.cos().0);
    let (sin_beta2, cos_beta2) = (beta2.sin().0, beta2.cos().0);

    let temp1 = cos_alpha1 * cos_beta1;
    // cos^2 beta2 - cos^2 beta1, from whichever form loses the least precision
    let temp2 = if libm::fabs(sin_beta1) <= cos_beta1 {
        (cos_beta2 - cos_beta1) * (cos_beta2 + cos_beta1)
    } else {
        (sin_beta1 - sin_beta2) * (sin_beta1 + sin_beta2)
    };
    let temp3 = temp1 * temp1 + temp2;
    if 0.0 < temp3 {
        libm::sqrt(temp3)
    } else {
        0.0
    }
}

/// Replace a negative zero by a positive zero.
#[must_use]
fn normalise_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

/// Solve the direct geodesic problem.
/// * `lat1`, `lon1` - the latitude and longitude of the start point.
/// * `azi1` - the azimuth at the start point.
/// * `s12` - the length of the geodesic.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the `Solution`, or `Error::InvalidArgument` if an argument is out
/// of range.
///
/// # Errors
///
/// If `lat1` is not in [-90, 90], `lon1` or `azi1` are not in [-180, 180] or
/// `s12` is not in [0, 1e11] metres.
pub fn calculate_direct(
    lat1: Degrees,
    lon1: Degrees,
    azi1: Degrees,
    s12: Metres,
    ellipsoid: &Ellipsoid,
) -> Result<Solution, Error> {
    let mut lat1 = check_range("lat1", lat1.0, -90.0, 90.0)?;
    let lon1 = check_range("lon1", lon1.0, -180.0, 180.0)?;
    let azi1 = check_range("azi1", azi1.0, -180.0, 180.0)?;
    let s12 = check_range("s12", s12.0, 0.0, MAX_LENGTH.0)?;

    // move near-polar latitudes away from the pole
    if MAX_LATITUDE.0 < libm::fabs(lat1) {
        tracing::trace!(lat1, "clamping near-polar latitude");
        lat1 = libm::copysign(MAX_LATITUDE.0, lat1);
    }

    let b = ellipsoid.b().0;
    let f = ellipsoid.f();

    // solve triangle NEA
    let beta1 = ellipsoid.calculate_parametric_latitude(Angle::from(Degrees(lat1)));
    let alpha1 = Angle::from(Degrees(azi1));
    let start = solve_start_triangle(beta1, alpha1);
    let (sin_alpha0, cos_alpha0) = (start.alpha0.sin().0, start.alpha0.cos().0);
    let sigma1 = start.sigma1;

    // find sigma2 from the distance along the geodesic
    let eps = calculate_epsilon(cos_alpha0, ellipsoid.ep_2());
    let a1 = evaluate_a1(eps);
    let c1 = evaluate_coeffs_c1(eps);
    let s1 = b * integrate(a1, &c1, sigma1);
    let tau2 = (s1 + s12) / (b * a1);
    let c1p = evaluate_coeffs_c1p(eps);
    let sigma2 = tau2 + sin_series(&c1p, Radians(tau2)).0;
    let (sin_sigma2, cos_sigma2) = libm::sincos(sigma2);

    // solve triangle NEB
    let alpha2 = libm::atan2(sin_alpha0, cos_alpha0 * cos_sigma2);
    let beta2 = Angle::from_y_x(
        cos_alpha0 * sin_sigma2,
        libm::hypot(cos_alpha0 * cos_sigma2, sin_alpha0),
    );
    let omega2 = libm::atan2(sin_alpha0 * sin_sigma2, cos_sigma2);
    let lat2 = Degrees::from(ellipsoid.calculate_geodetic_latitude(beta2));

    // convert the auxiliary sphere longitudes to ellipsoid longitudes
    let a3 = ellipsoid.calculate_a3(eps);
    let c3 = ellipsoid.calculate_c3(eps);
    let lambda1 = start.omega1 - f * sin_alpha0 * integrate(a3, &c3, sigma1);
    let lambda2 = omega2 - f * sin_alpha0 * integrate(a3, &c3, sigma2);
    let lambda12 = libm::remainder((lambda2 - lambda1).to_degrees(), 360.0);

    let mut lon2 = lon1 + lambda12;
    if lon2 < -180.0 {
        lon2 += 360.0;
    }
    if 180.0 < lon2 {
        lon2 -= 360.0;
    }

    let k2 = ellipsoid.ep_2() * cos_alpha0 * cos_alpha0;
    let m12 = b * calculate_reduced_length(eps, k2, sigma1, sigma2);

    Ok(Solution {
        lat1: Degrees(normalise_zero(lat1)),
        lon1: Degrees(normalise_zero(lon1)),
        azi1: Degrees(normalise_zero(azi1)),
        lat2: Degrees(normalise_zero(lat2.0)),
        lon2: Degrees(normalise_zero(lon2)),
        azi2: Degrees(normalise_zero(alpha2.to_degrees())),
        s12: Metres(normalise_zero(s12)),
        a12: Degrees(normalise_zero((sigma2 - sigma1).to_degrees())),
        m12: Metres(normalise_zero(m12)),
    })
}

/// Calculate the azimuth at the end point and the length of a geodesic
/// between two parametric latitudes, given the azimuth at the start point.
///
/// This solves triangle NEB directly from the end point latitude, so it
/// is the building block of an inverse geodesic solver.
/// It takes the end azimuth with a non-negative cosine, i.e. in the range
/// [-90, 90] degrees; the caller handles geodesics that reach `beta2` after
/// passing their vertex.
/// * `beta1`, `beta2` - the parametric latitudes of the start and end points.
/// * `alpha1` - the azimuth at the start point.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the azimuth at the end point and the length of the geodesic.
#[must_use]
pub fn calculate_hybrid(
    beta1: Angle,
    beta2: Angle,
    alpha1: Angle,
    ellipsoid: &Ellipsoid,
) -> (Angle, Metres) {
    // solve triangle NEA
    let start = solve_start_triangle(beta1, alpha1);

    // solve triangle NEB
    let cos_alpha2_cos_beta2 = calculate_end_azimuth_cosine(beta1, beta2, alpha1.cos().0);
    let alpha2 = libm::atan2(start.alpha0.sin().0, cos_alpha2_cos_beta2);
    let sigma2 = libm::atan2(beta2.sin().0, cos_alpha2_cos_beta2);

    // integrate the distance along the geodesic
    let eps = calculate_epsilon(start.alpha0.cos().0, ellipsoid.ep_2());
    let a1 = evaluate_a1(eps);
    let c1 = evaluate_coeffs_c1(eps);
    let s12 = ellipsoid.b().0 * (integrate(a1, &c1, sigma2) - integrate(a1, &c1, start.sigma1));

    (Angle::from(Radians(alpha2)), Metres(s12))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::wgs84;
    use angle_sc::is_within_tolerance;
    use unit_sphere::great_circle;

    /// Calculate the parametric latitude of a geodetic latitude in degrees.
    fn parametric_latitude(lat: f64, ellipsoid: &Ellipsoid) -> Angle {
        ellipsoid.calculate_parametric_latitude(Angle::from(Degrees(lat)))
    }

    fn assert_solution_in_range(result: &Solution) {
        for angle in [result.lat2.0, result.lon2.0, result.azi2.0] {
            assert!(angle.is_finite());
        }
        assert!((-90.0..=90.0).contains(&result.lat2.0));
        assert!((-180.0..=180.0).contains(&result.lon2.0));
        assert!((-180.0..=180.0).contains(&result.azi2.0));
        assert!(result.a12.0.is_finite());
        assert!(result.m12.0.is_finite());
    }

    #[test]
    fn test_calculate_end_azimuth_cosine() {
        let beta = Angle::from(Degrees(30.0));
        let alpha = Angle::from(Degrees(60.0));

        // Same latitude: cos alpha2 == cos alpha1
        let result = calculate_end_azimuth_cosine(beta, beta, alpha.cos().0);
        assert!(is_within_tolerance(
            alpha.cos().0 * beta.cos().0,
            result,
            f64::EPSILON
        ));

        // Beyond the vertex latitude the cosine is zero
        let beta2 = Angle::from(Degrees(80.0));
        assert_eq!(0.0, calculate_end_azimuth_cosine(beta, beta2, alpha.cos().0));

        // High latitude start uses the sine form
        let beta1 = Angle::from(Degrees(-60.0));
        let beta2 = Angle::from(Degrees(-30.0));
        let alpha1 = Angle::from(Degrees(20.0));
        let result = calculate_end_azimuth_cosine(beta1, beta2, alpha1.cos().0);
        let clairaut = alpha1.sin().0 * beta1.cos().0;
        let expected = libm::sqrt(beta2.cos().0 * beta2.cos().0 - clairaut * clairaut);
        assert!(is_within_tolerance(expected, result, 1e-15));
    }

    #[test]
    fn test_normalise_zero() {
        assert!(normalise_zero(-0.0).is_sign_positive());
        assert_eq!(-1.5, normalise_zero(-1.5));
        assert_eq!(1.5, normalise_zero(1.5));
    }

    #[test]
    fn test_direct_invalid_arguments() {
        let geoid = Ellipsoid::wgs84();
        let valid = (Degrees(10.0), Degrees(20.0), Degrees(30.0), Metres(1000.0));

        assert_eq!(
            Err(Error::InvalidArgument {
                name: "lat1",
                value: 90.5
            }),
            calculate_direct(Degrees(90.5), valid.1, valid.2, valid.3, &geoid)
        );
        assert_eq!(
            Err(Error::InvalidArgument {
                name: "lon1",
                value: -180.5
            }),
            calculate_direct(valid.0, Degrees(-180.5), valid.2, valid.3, &geoid)
        );
        assert_eq!(
            Err(Error::InvalidArgument {
                name: "azi1",
                value: 361.0
            }),
            calculate_direct(valid.0, valid.1, Degrees(361.0), valid.3, &geoid)
        );
        assert_eq!(
            Err(Error::InvalidArgument {
                name: "s12",
                value: -1.0
            }),
            calculate_direct(valid.0, valid.1, valid.2, Metres(-1.0), &geoid)
        );
        assert!(calculate_direct(valid.0, valid.1, valid.2, Metres(1.1e11), &geoid).is_err());
        assert!(calculate_direct(Degrees(f64::NAN), valid.1, valid.2, valid.3, &geoid).is_err());

        assert!(calculate_direct(valid.0, valid.1, valid.2, valid.3, &geoid).is_ok());
    }

    #[test]
    fn test_direct_statue_of_liberty() {
        let geoid = Ellipsoid::wgs84();
        let result = calculate_direct(
            Degrees(40.6892),
            Degrees(-74.0445),
            Degrees(45.0),
            Metres(10_000.0),
            &geoid,
        )
        .unwrap();

        assert_eq!(40.6892, result.lat1.0);
        assert_eq!(-74.0445, result.lon1.0);
        assert_eq!(45.0, result.azi1.0);
        assert_eq!(10_000.0, result.s12.0);

        assert!(is_within_tolerance(40.75284513324887, result.lat2.0, 1e-9));
        assert!(is_within_tolerance(-73.96076787728398, result.lon2.0, 1e-9));
        assert!(is_within_tolerance(45.05462488565932, result.azi2.0, 1e-9));
        assert!(is_within_tolerance(0.09000523831987337, result.a12.0, 1e-12));
        assert!(is_within_tolerance(9999.995898905281, result.m12.0, 1e-6));

        let finish = result.finish();
        assert_eq!(result.lat2, finish.lat());
        assert_eq!(result.lon2, finish.lon());
        let start = result.start();
        assert_eq!(result.lat1, start.lat());
    }

    #[test]
    fn test_direct_geodtest_normal() {
        // GeodTest.dat line 2874
        // 5.421025561218 0 84.846843174846
        // 3.027329237478900117 109.666857465735641205 96.826992198613537236
        // 12161089.9991805 109.607910081857488806 5988906.6319258056178 8449589948776.249238
        let geoid = Ellipsoid::wgs84();
        let result = calculate_direct(
            Degrees(5.421025561218),
            Degrees(0.0),
            Degrees(84.846843174846),
            Metres(12161089.9991805),
            &geoid,
        )
        .unwrap();

        assert!(is_within_tolerance(3.027329237478900117, result.lat2.0, 1e-12));
        assert!(is_within_tolerance(109.666857465735641205, result.lon2.0, 1e-12));
        assert!(is_within_tolerance(96.826992198613537236, result.azi2.0, 1e-12));
        assert!(is_within_tolerance(109.607910081857488806, result.a12.0, 1e-12));
        assert!(is_within_tolerance(5988906.6319258056178, result.m12.0, 1e-6));
    }

    #[test]
    fn test_direct_geodtest_nearly_antipodal() {
        // GeodTest.dat line 100001
        // 8.226828747671 0 111.1269645725
        // -8.516119211674268968 178.688979582629224039 68.982798544955243193
        // 19886305.6710041 179.197987814300505446 97496.4436255989712 -29736790544759.340534
        let geoid = Ellipsoid::wgs84();
        let result = calculate_direct(
            Degrees(8.226828747671),
            Degrees(0.0),
            Degrees(111.1269645725),
            Metres(19886305.6710041),
            &geoid,
        )
        .unwrap();

        assert!(is_within_tolerance(-8.516119211674268968, result.lat2.0, 1e-12));
        assert!(is_within_tolerance(178.688979582629224039, result.lon2.0, 1e-12));
        assert!(is_within_tolerance(68.982798544955243193, result.azi2.0, 1e-12));
        assert!(is_within_tolerance(179.197987814300505446, result.a12.0, 1e-12));
        assert!(is_within_tolerance(97496.4436255989712, result.m12.0, 1e-6));
    }

    #[test]
    fn test_direct_zero_distance() {
        let geoid = Ellipsoid::wgs84();
        let result = calculate_direct(
            Degrees(12.5),
            Degrees(-45.25),
            Degrees(33.3),
            Metres(0.0),
            &geoid,
        )
        .unwrap();

        assert!(is_within_tolerance(12.5, result.lat2.0, 1e-12));
        assert!(is_within_tolerance(-45.25, result.lon2.0, 1e-12));
        assert!(is_within_tolerance(33.3, result.azi2.0, 1e-12));
        assert!(is_within_tolerance(0.0, result.a12.0, 1e-12));
        assert!(is_within_tolerance(0.0, result.m12.0, 1e-6));
    }

    #[test]
    fn test_direct_equator_on_a_sphere() {
        let sphere = Ellipsoid::new(Metres(6_371_000.0), 0.0).unwrap();
        let length = 1_000_000.0;
        let result = calculate_direct(
            Degrees(0.0),
            Degrees(10.0),
            Degrees(90.0),
            Metres(length),
            &sphere,
        )
        .unwrap();

        assert!(is_within_tolerance(0.0, result.lat2.0, 1e-12));
        assert!(is_within_tolerance(
            10.0 + (length / sphere.a().0).to_degrees(),
            result.lon2.0,
            1e-12
        ));
        assert!(is_within_tolerance(90.0, result.azi2.0, 1e-12));
    }

    #[test]
    fn test_direct_great_circle_on_a_sphere() {
        let sphere = Ellipsoid::new(Metres(6_371_000.0), 0.0).unwrap();
        let length = 3_000_000.0;
        let result = calculate_direct(
            Degrees(30.0),
            Degrees(20.0),
            Degrees(60.0),
            Metres(length),
            &sphere,
        )
        .unwrap();

        assert!(is_within_tolerance(39.94339295081697, result.lat2.0, 1e-11));
        assert!(is_within_tolerance(50.82789850650109, result.lon2.0, 1e-11));
        assert!(is_within_tolerance(78.02686147336281, result.azi2.0, 1e-11));

        // the great circle between the points has the same length and azimuth
        let lat1 = Angle::from(result.lat1);
        let lat2 = Angle::from(result.lat2);
        let delta_long = Angle::from(result.lon2 - result.lon1);
        let gc_length = great_circle::calculate_gc_distance(lat1, lat2, delta_long);
        assert!(is_within_tolerance(length / sphere.a().0, gc_length.0, 1e-12));
        let gc_azimuth = great_circle::calculate_gc_azimuth(lat1, lat2, delta_long);
        assert!(is_within_tolerance(60.0, Degrees::from(gc_azimuth).0, 1e-9));

        // the arc length is the distance in radians and m12 = a * sin(sigma12)
        assert!(is_within_tolerance(
            (length / sphere.a().0).to_degrees(),
            result.a12.0,
            1e-12
        ));
        assert!(is_within_tolerance(2890356.9263629583, result.m12.0, 1e-6));
    }

    #[test]
    fn test_direct_meridians() {
        let geoid = Ellipsoid::wgs84();

        // Northbound
        let result = calculate_direct(
            Degrees(10.0),
            Degrees(50.0),
            Degrees(0.0),
            Metres(5_000_000.0),
            &geoid,
        )
        .unwrap();
        assert!(is_within_tolerance(55.07747207483576, result.lat2.0, 1e-9));
        assert_eq!(50.0, result.lon2.0);
        assert_eq!(0.0, result.azi2.0);

        // Southbound
        let result = calculate_direct(
            Degrees(10.0),
            Degrees(50.0),
            Degrees(180.0),
            Metres(5_000_000.0),
            &geoid,
        )
        .unwrap();
        assert!(is_within_tolerance(-35.176238320128746, result.lat2.0, 1e-9));
        assert!(is_within_tolerance(50.0, result.lon2.0, 1e-12));
        assert!(is_within_tolerance(180.0, libm::fabs(result.azi2.0), 1e-12));

        // Northbound past the North pole onto the opposite meridian
        let result = calculate_direct(
            Degrees(10.0),
            Degrees(50.0),
            Degrees(0.0),
            Metres(15_000_000.0),
            &geoid,
        )
        .unwrap();
        assert!(is_within_tolerance(35.211674702455284, result.lat2.0, 1e-9));
        assert!(is_within_tolerance(-130.0, result.lon2.0, 1e-12));
        assert!(is_within_tolerance(180.0, libm::fabs(result.azi2.0), 1e-12));
    }

    #[test]
    fn test_direct_near_pole() {
        let geoid = Ellipsoid::wgs84();
        let lat1 = Degrees(90.0 - 1e-12);

        for i in -18..=18 {
            let azi1 = Degrees(f64::from(i) * 10.0);
            let result = calculate_direct(lat1, Degrees(0.0), azi1, Metres(1_000_000.0), &geoid);
            assert!(result.is_ok());
            let result = result.unwrap();
            assert_eq!(MAX_LATITUDE, result.lat1);
            assert_solution_in_range(&result);
            assert!(is_within_tolerance(81.04623281623425, result.lat2.0, 1e-8));
        }

        // The South pole itself
        let result = calculate_direct(
            Degrees(-90.0),
            Degrees(0.0),
            Degrees(0.0),
            Metres(1_000_000.0),
            &geoid,
        )
        .unwrap();
        assert_eq!(-MAX_LATITUDE.0, result.lat1.0);
        assert_solution_in_range(&result);
    }

    #[test]
    fn test_direct_across_the_antimeridian() {
        let geoid = Ellipsoid::wgs84();
        let result = calculate_direct(
            Degrees(0.0),
            Degrees(179.5),
            Degrees(90.0),
            Metres(200_000.0),
            &geoid,
        )
        .unwrap();

        assert!(is_within_tolerance(0.0, result.lat2.0, 1e-12));
        assert!(is_within_tolerance(-178.70336943176096, result.lon2.0, 1e-9));
        assert!(is_within_tolerance(90.0, result.azi2.0, 1e-12));
    }

    #[test]
    fn test_direct_maximum_length() {
        let geoid = Ellipsoid::wgs84();
        let result = calculate_direct(
            Degrees(12.5),
            Degrees(-45.25),
            Degrees(33.3),
            MAX_LENGTH,
            &geoid,
        )
        .unwrap();
        assert_solution_in_range(&result);
    }

    #[test]
    fn test_direct_results_in_range() {
        let geoid = Ellipsoid::wgs84();
        for lat in (-90..=90).step_by(15) {
            for azi in (-180..=180).step_by(30) {
                for length in [0.0, 1.0, 1e5, 1e7, 2e7, 4e7, 1e9] {
                    let result = calculate_direct(
                        Degrees(f64::from(lat)),
                        Degrees(180.0),
                        Degrees(f64::from(azi)),
                        Metres(length),
                        &geoid,
                    )
                    .unwrap();
                    assert_solution_in_range(&result);
                }
            }
        }
    }

    #[test]
    fn test_hybrid_round_trip() {
        let geoid = Ellipsoid::wgs84();

        let cases = [
            (-30.0, 10.0, 40.0, 5_000_000.0),
            (40.6892, -74.0445, 45.0, 10_000.0),
            (-10.0, 0.0, 30.0, 1_000_000.0),
            // start latitude beyond 45 degrees, end latitude nearer the Equator
            (-60.0, 0.0, 20.0, 3_000_000.0),
            (70.0, 0.0, -10.0, 1_000_000.0),
        ];

        for (lat1, lon1, azi1, length) in cases {
            let result = calculate_direct(
                Degrees(lat1),
                Degrees(lon1),
                Degrees(azi1),
                Metres(length),
                &geoid,
            )
            .unwrap();

            let beta1 = parametric_latitude(lat1, &geoid);
            let beta2 = parametric_latitude(result.lat2.0, &geoid);
            let alpha1 = Angle::from(Degrees(azi1));
            let (alpha2, s12) = calculate_hybrid(beta1, beta2, alpha1, &geoid);

            assert!(is_within_tolerance(result.azi2.0, Degrees::from(alpha2).0, 1e-9));
            assert!(is_within_tolerance(length, s12.0, 1e-6));
        }
    }

    #[test]
    fn test_hybrid_on_the_equator() {
        let geoid = Ellipsoid::new(wgs84::A, wgs84::F).unwrap();
        let equator = Angle::default();
        let east = Angle::from(Degrees(90.0));

        let (alpha2, s12) = calculate_hybrid(equator, equator, east, &geoid);
        assert!(is_within_tolerance(90.0, Degrees::from(alpha2).0, 1e-12));
        assert!(is_within_tolerance(0.0, s12.0, 1e-6));
    }
}
