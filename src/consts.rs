//! This file provides the matrices used for converting between linear RGB spaces and CIE XYZ, along
//! with the D65 reference white. Keeping them as matrices instead of writing out each multiplication
//! by hand makes it easy to check the constants against their sources and to compose them: the Adobe
//! RGB matrices are built here by chaining through XYZ instead of being copied in as separate,
//! slightly inconsistent constants.

use rulinalg::matrix::Matrix;

/// The D65 white point, normalized so that Y is 100.
pub(crate) const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

lazy_static! {
    /// Linear sRGB to CIE XYZ, with the 4-digit coefficients of the sRGB standard.
    pub(crate) static ref SRGB_TO_XYZ: Matrix<f64> = matrix![
        0.4124, 0.3576, 0.1805;
        0.2126, 0.7152, 0.0722;
        0.0193, 0.1192, 0.9505
    ];

    /// CIE XYZ to linear sRGB. This is the standard's own inverse, which only agrees with
    /// `SRGB_TO_XYZ` to about four digits: plenty for 8-bit channels.
    pub(crate) static ref XYZ_TO_SRGB: Matrix<f64> = matrix![
        3.2406, -1.5372, -0.4986;
        -0.9689, 1.8758, 0.0415;
        0.0557, -0.2040, 1.0570
    ];

    /// Linear Adobe RGB (1998) to CIE XYZ, D65.
    static ref ADOBE_RGB_TO_XYZ: Matrix<f64> = matrix![
        0.5767309, 0.1855540, 0.1881852;
        0.2973769, 0.6273491, 0.0752741;
        0.0270343, 0.0706872, 0.9911085
    ];

    /// CIE XYZ, D65 to linear Adobe RGB (1998).
    static ref XYZ_TO_ADOBE_RGB: Matrix<f64> = matrix![
        2.0413690, -0.5649464, -0.3446944;
        -0.9692660, 1.8760108, 0.0415560;
        0.0134474, -0.1183897, 1.0154096
    ];

    /// Linear sRGB to linear Adobe RGB. Both spaces share the D65 white, so this maps white to
    /// white and only moves the primaries.
    pub(crate) static ref SRGB_TO_ADOBE_RGB: Matrix<f64> = &*XYZ_TO_ADOBE_RGB * &*SRGB_TO_XYZ;

    /// Linear Adobe RGB to linear sRGB.
    pub(crate) static ref ADOBE_RGB_TO_SRGB: Matrix<f64> = &*XYZ_TO_SRGB * &*ADOBE_RGB_TO_XYZ;
}

/// Multiplies a constant matrix by a 3-vector.
pub(crate) fn transform(mat: &Matrix<f64>, v: [f64; 3]) -> [f64; 3] {
    let out = mat * vector![v[0], v[1], v[2]];
    [out[0], out[1], out[2]]
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_srgb_matrices_are_inverses() {
        for v in &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.2, 0.5, 0.9]] {
            let back = transform(&XYZ_TO_SRGB, transform(&SRGB_TO_XYZ, *v));
            for i in 0..3 {
                assert!((back[i] - v[i]).abs() <= 1e-3, "{:?} -> {:?}", v, back);
            }
        }
    }

    #[test]
    fn test_adobe_rgb_keeps_white() {
        let white = transform(&SRGB_TO_ADOBE_RGB, [1.0, 1.0, 1.0]);
        for c in &white {
            assert!((c - 1.0).abs() <= 1e-3, "{:?}", white);
        }
        let white = transform(&ADOBE_RGB_TO_SRGB, [1.0, 1.0, 1.0]);
        for c in &white {
            assert!((c - 1.0).abs() <= 1e-3, "{:?}", white);
        }
    }

    #[test]
    fn test_adobe_rgb_primaries() {
        // sRGB green is well inside Adobe RGB's green primary: it needs some red to get there
        let green = transform(&SRGB_TO_ADOBE_RGB, [0.0, 1.0, 0.0]);
        assert!((green[0] - 0.2849).abs() <= 1e-3);
        assert!((green[1] - 1.0).abs() <= 1e-3);
        assert!((green[2] - 0.0412).abs() <= 1e-3);
    }

    #[test]
    fn test_d65_white_matches_matrix() {
        let white = transform(&SRGB_TO_XYZ, [100.0, 100.0, 100.0]);
        for i in 0..3 {
            assert!((white[i] - D65_WHITE[i]).abs() <= 0.05, "{:?}", white);
        }
    }
}
