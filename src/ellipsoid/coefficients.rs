// Copyright (c) 2024-2026 Ken Barker

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

//! This module contains the series used to integrate along a geodesic on
//! the auxiliary sphere.
//!
//! It uses the equations given by CFF Karney in
//! [Algorithms for geodesics](https://arxiv.org/pdf/1109.4448.pdf), with the
//! series carried to eighth order in `eps` as tabulated in
//! [Geodesic series](https://geographiclib.sourceforge.io/html/geodseries30.html).
//!
//! The series are evaluated in nested (Horner) form: odd powers of `eps` are
//! factored out of each Fourier coefficient and the even powers are nested,
//! so the grouping of the operations below is significant.

#![allow(clippy::suboptimal_flops)]
#![allow(clippy::unreadable_literal)]

use angle_sc::Radians;

/// The number of terms in each Fourier series.
pub const SERIES_ORDER: usize = 8;

/// The number of `C3x` coefficients held by an `Ellipsoid`.
pub const C3X_LENGTH: usize = SERIES_ORDER * (SERIES_ORDER + 1) / 2;

/// The A1 series coefficients of `eps^2`, `eps^4`, `eps^6` and `eps^8`.
const COEFFS_A1: [f64; 4] = [1.0 / 4.0, 1.0 / 64.0, 1.0 / 256.0, 25.0 / 16384.0];

/// The A2 series coefficients of `eps^2`, `eps^4`, `eps^6` and `eps^8`.
const COEFFS_A2: [f64; 4] = [3.0 / 4.0, 7.0 / 64.0, 11.0 / 256.0, 375.0 / 16384.0];

/// The C1 series coefficients, `C1[l]` is `eps^l` times a polynomial in `eps^2`.
const COEFFS_C1: [&[f64]; SERIES_ORDER] = [
    &[-1.0 / 2.0, 3.0 / 16.0, -1.0 / 32.0, 19.0 / 2048.0],
    &[-1.0 / 16.0, 1.0 / 32.0, -9.0 / 2048.0, 7.0 / 4096.0],
    &[-1.0 / 48.0, 3.0 / 256.0, -3.0 / 2048.0],
    &[-5.0 / 512.0, 3.0 / 512.0, -11.0 / 16384.0],
    &[-7.0 / 1280.0, 7.0 / 2048.0],
    &[-7.0 / 2048.0, 9.0 / 4096.0],
    &[-33.0 / 14336.0],
    &[-429.0 / 262144.0],
];

/// The C1p series coefficients, `C1p[l]` is `eps^l` times a polynomial in `eps^2`.
const COEFFS_C1P: [&[f64]; SERIES_ORDER] = [
    &[1.0 / 2.0, -9.0 / 32.0, 205.0 / 1536.0, -4879.0 / 73728.0],
    &[5.0 / 16.0, -37.0 / 96.0, 1335.0 / 4096.0, -86171.0 / 368640.0],
    &[29.0 / 96.0, -75.0 / 128.0, 2901.0 / 4096.0],
    &[539.0 / 1536.0, -2391.0 / 2560.0, 1082857.0 / 737280.0],
    &[3467.0 / 7680.0, -28223.0 / 18432.0],
    &[38081.0 / 61440.0, -733437.0 / 286720.0],
    &[459485.0 / 516096.0],
    &[109167851.0 / 82575360.0],
];

/// The C2 series coefficients, `C2[l]` is `eps^l` times a polynomial in `eps^2`.
const COEFFS_C2: [&[f64]; SERIES_ORDER] = [
    &[1.0 / 2.0, 1.0 / 16.0, 1.0 / 32.0, 41.0 / 2048.0],
    &[3.0 / 16.0, 1.0 / 32.0, 35.0 / 2048.0, 47.0 / 4096.0],
    &[5.0 / 48.0, 5.0 / 256.0, 23.0 / 2048.0],
    &[35.0 / 512.0, 7.0 / 512.0, 133.0 / 16384.0],
    &[63.0 / 1280.0, 21.0 / 2048.0],
    &[77.0 / 2048.0, 33.0 / 4096.0],
    &[429.0 / 14336.0],
    &[6435.0 / 262144.0],
];

/// The A3 series coefficients: the coefficient of `eps^j`, `j = 1..=8`, as
/// a polynomial in the third flattening `n`.
const COEFFS_A3: [&[f64]; 8] = [
    // eps^1
    &[1.0 / 2.0, -1.0 / 2.0],
    // eps^2
    &[1.0 / 4.0, 1.0 / 8.0, -3.0 / 8.0],
    // eps^3
    &[1.0 / 16.0, 3.0 / 16.0, 1.0 / 16.0, -5.0 / 16.0],
    // eps^4
    &[3.0 / 64.0, 1.0 / 32.0, 5.0 / 32.0, 5.0 / 128.0, -35.0 / 128.0],
    // eps^5
    &[3.0 / 128.0, 5.0 / 128.0, 5.0 / 256.0, 35.0 / 256.0, 7.0 / 256.0],
    // eps^6
    &[5.0 / 256.0, 15.0 / 1024.0, 35.0 / 1024.0, 7.0 / 512.0, 63.0 / 512.0],
    // eps^7
    &[25.0 / 2048.0, 35.0 / 2048.0, 21.0 / 2048.0, 63.0 / 2048.0, 21.0 / 2048.0],
    // eps^8
    &[175.0 / 16384.0, 35.0 / 4096.0, 63.0 / 4096.0, 63.0 / 8192.0, 231.0 / 8192.0],
];
/// The C3 series coefficients: for `C3[l]`, `l = 1..=8`, the coefficient of
/// `eps^j`, `j = l..=8`, as a polynomial in the third flattening `n`.
const COEFFS_C3: [&[f64]; 36] = [
    // C3[1], eps^1
    &[1.0 / 4.0, -1.0 / 4.0],
    // C3[1], eps^2
    &[1.0 / 8.0, 0.0, -1.0 / 8.0],
    // C3[1], eps^3
    &[3.0 / 64.0, 3.0 / 64.0, -1.0 / 64.0, -5.0 / 64.0],
    // C3[1], eps^4
    &[5.0 / 128.0, 1.0 / 64.0, 1.0 / 64.0, -1.0 / 64.0, -7.0 / 128.0],
    // C3[1], eps^5
    &[3.0 / 128.0, 11.0 / 512.0, 3.0 / 512.0, 1.0 / 256.0, -7.0 / 512.0],
    // C3[1], eps^6
    &[21.0 / 1024.0, 5.0 / 512.0, 13.0 / 1024.0, 1.0 / 512.0, -1.0 / 1024.0],
    // C3[1], eps^7
    &[243.0 / 16384.0, 189.0 / 16384.0, 83.0 / 16384.0, 127.0 / 16384.0, 3.0 / 16384.0],
    // C3[1], eps^8
    &[435.0 / 32768.0, 109.0 / 16384.0, 1.0 / 128.0, 45.0 / 16384.0, 39.0 / 8192.0],
    // C3[2], eps^2
    &[1.0 / 16.0, -3.0 / 32.0, 1.0 / 32.0],
    // C3[2], eps^3
    &[3.0 / 64.0, -1.0 / 32.0, -3.0 / 64.0, 1.0 / 32.0],
    // C3[2], eps^4
    &[3.0 / 128.0, 1.0 / 128.0, -9.0 / 256.0, -3.0 / 128.0, 7.0 / 256.0],
    // C3[2], eps^5
    &[5.0 / 256.0, 1.0 / 256.0, -1.0 / 128.0, -7.0 / 256.0, -3.0 / 256.0],
    // C3[2], eps^6
    &[27.0 / 2048.0, 69.0 / 8192.0, -39.0 / 8192.0, -47.0 / 4096.0, -41.0 / 2048.0],
    // C3[2], eps^7
    &[187.0 / 16384.0, 39.0 / 8192.0, 31.0 / 16384.0, -63.0 / 8192.0, -185.0 / 16384.0],
    // C3[2], eps^8
    &[287.0 / 32768.0, 47.0 / 8192.0, 31.0 / 65536.0, -3.0 / 2048.0, -537.0 / 65536.0],
    // C3[3], eps^3
    &[5.0 / 192.0, -3.0 / 64.0, 5.0 / 192.0, -1.0 / 192.0],
    // C3[3], eps^4
    &[3.0 / 128.0, -5.0 / 192.0, -1.0 / 64.0, 5.0 / 192.0, -1.0 / 128.0],
    // C3[3], eps^5
    &[7.0 / 512.0, -1.0 / 384.0, -77.0 / 3072.0, 5.0 / 3072.0, 65.0 / 3072.0],
    // C3[3], eps^6
    &[3.0 / 256.0, -1.0 / 1024.0, -71.0 / 6144.0, -47.0 / 3072.0, 9.0 / 1024.0],
    // C3[3], eps^7
    &[139.0 / 16384.0, 143.0 / 49152.0, -383.0 / 49152.0, -179.0 / 16384.0, -121.0 / 16384.0],
    // C3[3], eps^8
    &[243.0 / 32768.0, 95.0 / 49152.0, -41.0 / 16384.0, -147.0 / 16384.0, -389.0 / 49152.0],
    // C3[4], eps^4
    &[7.0 / 512.0, -7.0 / 256.0, 5.0 / 256.0, -7.0 / 1024.0, 1.0 / 1024.0],
    // C3[4], eps^5
    &[7.0 / 512.0, -5.0 / 256.0, -7.0 / 2048.0, 9.0 / 512.0, -21.0 / 2048.0],
    // C3[4], eps^6
    &[9.0 / 1024.0, -43.0 / 8192.0, -129.0 / 8192.0, 39.0 / 4096.0, 91.0 / 8192.0],
    // C3[4], eps^7
    &[127.0 / 16384.0, -23.0 / 8192.0, -165.0 / 16384.0, -47.0 / 8192.0, 213.0 / 16384.0],
    // C3[4], eps^8
    &[193.0 / 32768.0, 3.0 / 8192.0, -505.0 / 65536.0, -227.0 / 32768.0, 75.0 / 65536.0],
    // C3[5], eps^5
    &[21.0 / 2560.0, -9.0 / 512.0, 15.0 / 1024.0, -7.0 / 1024.0, 9.0 / 5120.0],
    // C3[5], eps^6
    &[9.0 / 1024.0, -15.0 / 1024.0, 3.0 / 2048.0, 57.0 / 5120.0, -5.0 / 512.0],
    // C3[5], eps^7
    &[99.0 / 16384.0, -91.0 / 16384.0, -781.0 / 81920.0, 883.0 / 81920.0, 319.0 / 81920.0],
    // C3[5], eps^8
    &[179.0 / 32768.0, -55.0 / 16384.0, -79.0 / 10240.0, -27.0 / 81920.0, 461.0 / 40960.0],
    // C3[6], eps^6
    &[11.0 / 2048.0, -99.0 / 8192.0, 275.0 / 24576.0, -77.0 / 12288.0, 9.0 / 4096.0],
    // C3[6], eps^7
    &[99.0 / 16384.0, -275.0 / 24576.0, 55.0 / 16384.0, 167.0 / 24576.0, -407.0 / 49152.0],
    // C3[6], eps^8
    &[143.0 / 32768.0, -253.0 / 49152.0, -1105.0 / 196608.0, 481.0 / 49152.0, -73.0 / 196608.0],
    // C3[7], eps^7
    &[429.0 / 114688.0, -143.0 / 16384.0, 143.0 / 16384.0, -91.0 / 16384.0, 39.0 / 16384.0],
    // C3[7], eps^8
    &[143.0 / 32768.0, -143.0 / 16384.0, 65.0 / 16384.0, 65.0 / 16384.0, -109.0 / 16384.0],
    // C3[8], eps^8
    &[715.0 / 262144.0, -429.0 / 65536.0, 455.0 / 65536.0, -637.0 / 131072.0, 315.0 / 131072.0],
];

/// Evaluate the polynomial in x using
/// [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method).
/// * `coeffs` - the polynomial coefficients, lowest power first.
/// * `x` - the variable.
///
/// returns zero if `coeffs` is empty.
#[must_use]
pub fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .iter()
        .rev()
        .fold(0.0, |result, element| result * x + element)
}

/// Evaluate a set of Fourier coefficients where coefficient `l` is
/// `eps^(l+1)` times a polynomial in `eps^2`.
#[must_use]
fn evaluate_fourier_coeffs(coeffs: &[&[f64]; SERIES_ORDER], eps: f64) -> [f64; SERIES_ORDER] {
    let eps2 = eps * eps;
    let mut eps_l = eps;
    let mut result = [0.0; SERIES_ORDER];
    for (value, polynomial) in result.iter_mut().zip(coeffs) {
        *value = eps_l * evaluate_polynomial(polynomial, eps2);
        eps_l *= eps;
    }
    result
}

/// The scale factor `A1`.
/// CFF Karney, Eq. 17.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
/// # Examples
/// ```
/// use spheroid_geodesic::ellipsoid::coefficients::evaluate_a1;
///
/// assert_eq!(1.0, evaluate_a1(0.0));
/// ```
#[must_use]
pub fn evaluate_a1(eps: f64) -> f64 {
    let eps2 = eps * eps;
    (1.0 + eps2 * evaluate_polynomial(&COEFFS_A1, eps2)) / (1.0 - eps)
}

/// The scale factor `A2`.
/// CFF Karney, Eq. 42.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
/// # Examples
/// ```
/// use spheroid_geodesic::ellipsoid::coefficients::evaluate_a2;
///
/// assert_eq!(1.0, evaluate_a2(0.0));
/// ```
#[must_use]
pub fn evaluate_a2(eps: f64) -> f64 {
    let eps2 = eps * eps;
    (1.0 - eps2 * evaluate_polynomial(&COEFFS_A2, eps2)) / (1.0 + eps)
}

/// The coefficients `A3x`: the A3 series coefficients of `eps^1` to `eps^8`
/// evaluated for an ellipsoid.
/// CFF Karney, Eq. 24.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_a3(n: f64) -> [f64; SERIES_ORDER] {
    COEFFS_A3.map(|polynomial| evaluate_polynomial(polynomial, n))
}

/// The scale factor `A3`.
/// CFF Karney, Eq. 24.
/// * `coeffs` - the coefficients from `evaluate_coeffs_a3`.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_a3(coeffs: &[f64; SERIES_ORDER], eps: f64) -> f64 {
    1.0 - eps * evaluate_polynomial(coeffs, eps)
}

/// The coefficients `C1[l]` in the Fourier expansion of `B1`.
/// CFF Karney, Eq. 18.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_coeffs_c1(eps: f64) -> [f64; SERIES_ORDER] {
    evaluate_fourier_coeffs(&COEFFS_C1, eps)
}

/// The coefficients `C1p[l]` in the Fourier expansion of `B1p`, the
/// inverse of the `B1` series.
/// CFF Karney, Eq. 21.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_coeffs_c1p(eps: f64) -> [f64; SERIES_ORDER] {
    evaluate_fourier_coeffs(&COEFFS_C1P, eps)
}

/// The coefficients `C2[l]` in the Fourier expansion of `B2`.
/// CFF Karney, Eq. 43.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_coeffs_c2(eps: f64) -> [f64; SERIES_ORDER] {
    evaluate_fourier_coeffs(&COEFFS_C2, eps)
}

/// The coefficients `C3x`: the C3 series coefficients evaluated for an
/// ellipsoid, ordered by `l` then by the power of `eps`.
/// CFF Karney, Eq. 25.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_c3x(n: f64) -> [f64; C3X_LENGTH] {
    COEFFS_C3.map(|polynomial| evaluate_polynomial(polynomial, n))
}

/// The coefficients `C3[l]` in the Fourier expansion of `B3`.
/// CFF Karney, Eq. 25.
/// * `coeffs` - the coefficients from `evaluate_coeffs_c3x`.
/// * `eps` - epsilon the integration variable derived from Clairaut's constant.
#[must_use]
pub fn evaluate_coeffs_c3(coeffs: &[f64; C3X_LENGTH], eps: f64) -> [f64; SERIES_ORDER] {
    let mut result = [0.0; SERIES_ORDER];
    let mut eps_l = eps;
    let mut start = 0;
    for (l, value) in result.iter_mut().enumerate() {
        let end = start + SERIES_ORDER - l;
        *value = eps_l * evaluate_polynomial(&coeffs[start..end], eps);
        eps_l *= eps;
        start = end;
    }
    result
}

/// Evaluate the following:
///   `y = sum(c[i] * sin((2*i + 2) * sigma), i, 0, n - 1)`
/// using [Clenshaw summation](https://en.wikipedia.org/wiki/Clenshaw_algorithm).
/// * `coeffs` - the Fourier coefficients.
/// * `sigma` - the angle.
#[must_use]
pub fn sin_series(coeffs: &[f64], sigma: Radians) -> Radians {
    let (sin_2x, cos_2x) = libm::sincos(2.0 * sigma.0);
    // the Clenshaw ak(theta) parameter, beta(k) = -1
    let ar = 2.0 * cos_2x;
    let (b1, _) = coeffs
        .iter()
        .rev()
        .fold((0.0, 0.0), |(b1, b2), coeff| (ar * b1 - b2 + coeff, b1));
    Radians(sin_2x * b1)
}
