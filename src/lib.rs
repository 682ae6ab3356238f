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

//! spheroid-geodesic
//!
//! A library for solving the direct geodesic problem on an
//! [ellipsoid of revolution](https://en.wikipedia.org/wiki/Spheroid),
//! e.g. the [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid.
//!
//! The shortest path between two points on the surface of an ellipsoid is a
//! [geodesic](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid).
//! It is the equivalent of a straight line segment in planar geometry or a
//! [great circle arc](https://en.wikipedia.org/wiki/Great_circle) on the
//! surface of a sphere.
//!
//! Given a start point, an azimuth and a distance, the library calculates:
//!
//! - the end point of the geodesic and the azimuth at the end point;
//! - the length of the corresponding great circle arc on the auxiliary sphere;
//! - and the reduced length of the geodesic.
//!
//! It also provides the `hybrid` solution used by inverse geodesic solvers:
//! given the latitudes of both points and the azimuth at the start point,
//! it calculates the azimuth at the end point and the length of the geodesic.
//!
//! ## Design
//!
//! The library uses the method of Charles Karney,
//! [Algorithms for geodesics](https://arxiv.org/pdf/1109.4448.pdf),
//! as used by his [GeographicLib](https://geographiclib.sourceforge.io/) library.
//!
//! A geodesic is modelled as a great circle arc on the surface of a unit
//! auxiliary sphere. Distances and longitudes along the great circle are
//! converted to the ellipsoid by Fourier series, carried to eighth order
//! in the small variable `eps` and evaluated by Clenshaw summation.
//!
//! The `Ellipsoid` class represents an ellipsoid of revolution.
//! The static `WGS84_ELLIPSOID` represents the WGS-84 `Ellipsoid`.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod ellipsoid;
pub mod error;
pub mod geodesic;

pub use angle_sc::{Angle, Degrees, Radians};
pub use error::Error;
pub use geodesic::Solution;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use ellipsoid::coefficients::{C3X_LENGTH, SERIES_ORDER};
use lazy_static::lazy_static;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
    /// The third flattening of the ellipsoid.
    n: f64,

    /// The A3 series `coefficients` of the ellipsoid.
    a3: [f64; SERIES_ORDER],
    /// The C3x series `coefficients` of the ellipsoid.
    c3x: [f64; C3X_LENGTH],
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`, in [1, 1e10] metres.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio in [0, 1/150].
    ///
    /// A flattening at or below 2^-26 is treated as zero, i.e. a sphere.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `a` or `f` is out of range.
    ///
    /// # Examples
    /// ```
    /// use spheroid_geodesic::{Ellipsoid, Metres};
    ///
    /// // The GRS 80 ellipsoid
    /// let grs80 = Ellipsoid::new(Metres(6_378_137.0), 1.0 / 298.257_222_101).unwrap();
    /// assert_eq!(Metres(6_378_137.0), grs80.a());
    ///
    /// assert!(Ellipsoid::new(Metres(6_378_137.0), 0.01).is_err());
    /// ```
    pub fn new(a: Metres, f: f64) -> Result<Self, Error> {
        error::check_range("a", a.0, ellipsoid::MIN_A.0, ellipsoid::MAX_A.0)?;
        error::check_range("f", f, 0.0, ellipsoid::MAX_F)?;
        Ok(Self::from_valid_parameters(a, f))
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::from_valid_parameters(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// Construct an `Ellipsoid` from parameters within their valid ranges.
    #[must_use]
    fn from_valid_parameters(a: Metres, f: f64) -> Self {
        let f = if f <= ellipsoid::SPHERICAL_F { 0.0 } else { f };
        let n = ellipsoid::calculate_3rd_flattening(f);
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            one_minus_f: 1.0 - f,
            e_2: ellipsoid::calculate_sq_eccentricity(f),
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
            n,
            a3: ellipsoid::coefficients::evaluate_coeffs_a3(n),
            c3x: ellipsoid::coefficients::evaluate_coeffs_c3x(n),
        }
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The third flattening of the ellipsoid.
    #[must_use]
    pub const fn n(&self) -> f64 {
        self.n
    }

    /// Calculate epsilon, the variable used in series expansions.
    /// Note: epsilon is positive and small.
    /// * `cos_alpha0` - the cosine of the azimuth at the Equator crossing.
    #[must_use]
    pub fn calculate_epsilon(&self, cos_alpha0: f64) -> f64 {
        ellipsoid::calculate_epsilon(cos_alpha0, self.ep_2)
    }

    /// Calculate the scale factor `A3` from the A3 series `coefficients` of
    /// the ellipsoid.
    /// * `eps` - epsilon
    #[must_use]
    pub fn calculate_a3(&self, eps: f64) -> f64 {
        ellipsoid::coefficients::evaluate_a3(&self.a3, eps)
    }

    /// Calculate the coefficients `C3[l]` in the Fourier expansion of `B3`.
    /// * `eps` - epsilon
    #[must_use]
    pub fn calculate_c3(&self, eps: f64) -> [f64; SERIES_ORDER] {
        ellipsoid::coefficients::evaluate_coeffs_c3(&self.c3x, eps)
    }

    /// Convert a geodetic Latitude to a parametric Latitude on the
    /// auxiliary sphere.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn calculate_parametric_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_parametric_latitude(lat, self.one_minus_f)
    }

    /// Convert a parametric Latitude on the auxiliary sphere to a
    /// geodetic Latitude.
    /// * `beta` - the parametric Latitude
    #[must_use]
    pub fn calculate_geodetic_latitude(&self, beta: Angle) -> Angle {
        ellipsoid::calculate_geodetic_latitude(beta, self.one_minus_f)
    }

    /// Solve the direct geodesic problem on the ellipsoid.
    /// * `lat1`, `lon1` - the latitude and longitude of the start point.
    /// * `azi1` - the azimuth at the start point.
    /// * `s12` - the length of the geodesic.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `lat1` is not in [-90, 90], `lon1` or
    /// `azi1` are not in [-180, 180] or `s12` is not in [0, 1e11] metres.
    ///
    /// # Examples
    /// ```
    /// use spheroid_geodesic::*;
    ///
    /// let result = WGS84_ELLIPSOID
    ///     .direct(Degrees(40.6892), Degrees(-74.0445), Degrees(45.0), Metres(10_000.0))
    ///     .unwrap();
    /// assert!(40.0 < result.lat2.0 && result.lat2.0 < 41.0);
    /// ```
    pub fn direct(
        &self,
        lat1: Degrees,
        lon1: Degrees,
        azi1: Degrees,
        s12: Metres,
    ) -> Result<Solution, Error> {
        geodesic::calculate_direct(lat1, lon1, azi1, s12, self)
    }

    /// Calculate the azimuth at the end point and the length of a geodesic
    /// between two parametric latitudes, given the azimuth at the start point.
    /// * `beta1`, `beta2` - the parametric latitudes of the start and end points.
    /// * `alpha1` - the azimuth at the start point.
    ///
    /// returns the azimuth at the end point and the length of the geodesic.
    #[must_use]
    pub fn hybrid(&self, beta1: Angle, beta2: Angle, alpha1: Angle) -> (Angle, Metres) {
        geodesic::calculate_hybrid(beta1, beta2, alpha1, self)
    }
}

lazy_static! {
    /// A static instance of the WGS-84 `Ellipsoid`.
    pub static ref WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();
}
