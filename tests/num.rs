use ctfft::num::{Complex32, Complex64, Float};
use std::f64::consts::PI;

/// Acceptable tolerance for floating-point comparisons in tests.
const EPSILON: f64 = 1e-12;

#[test]
fn arithmetic_matches_definitions() {
    let a = Complex64::new(3.0, -1.5);
    let b = Complex64::new(-0.5, 2.0);
    assert_eq!(a.add(b), Complex64::new(2.5, 0.5));
    assert_eq!(a.sub(b), Complex64::new(3.5, -3.5));
    assert_eq!(a.mul(b), Complex64::new(3.0 * -0.5 - -1.5 * 2.0, 3.0 * 2.0 + -1.5 * -0.5));
    assert_eq!(a.scale(2.0), Complex64::new(6.0, -3.0));
    assert_eq!(a.conj(), Complex64::new(3.0, 1.5));
    assert_eq!(-a, Complex64::new(-3.0, 1.5));
}

#[test]
fn operators_agree_with_methods() {
    let a = Complex64::new(1.25, 4.0);
    let b = Complex64::new(-2.0, 0.5);
    assert_eq!(a + b, a.add(b));
    assert_eq!(a - b, a.sub(b));
    assert_eq!(a * b, a.mul(b));
    assert_eq!(a * 3.0, a.scale(3.0));
    assert_eq!(a / b, a.div(b));
}

#[test]
fn division_undoes_multiplication() {
    let a = Complex64::new(2.0, -7.0);
    let b = Complex64::new(0.3, 1.1);
    assert!(a.mul(b).div(b).approx_eq(a, EPSILON));
    assert!(a.checked_div(b).unwrap().approx_eq(a.div(b), 0.0));
}

#[test]
fn reciprocal_is_multiplicative_inverse() {
    for a in [
        Complex64::new(1.0, 0.0),
        Complex64::new(0.0, -3.0),
        Complex64::new(1e-150, 2e-150),
        Complex64::new(-4.5, 0.125),
    ] {
        assert!(a.mul(a.reciprocal()).approx_eq(Complex64::one(), EPSILON), "{a}");
    }
}

#[test]
fn reciprocal_of_zero_is_not_finite() {
    let r = Complex64::zero().reciprocal();
    assert!(!r.re.is_finite());
    assert_eq!(Complex64::zero().checked_reciprocal(), None);
}

#[test]
fn abs_uses_hypot_without_overflow() {
    let a = Complex64::new(3.0, -4.0);
    assert!((a.abs() - 5.0).abs() < EPSILON);
    let big = Complex64::new(1e200, 1e200);
    assert!(big.abs().is_finite());
    assert!((big.abs() / 1e200 - 2f64.sqrt()).abs() < EPSILON);
    let tiny = Complex64::new(3e-200, 4e-200);
    assert!((tiny.abs() / 1e-200 - 5.0).abs() < EPSILON);
}

#[test]
fn phase_range() {
    assert_eq!(Complex64::new(1.0, 0.0).phase(), 0.0);
    assert!((Complex64::new(0.0, 1.0).phase() - PI / 2.0).abs() < EPSILON);
    assert_eq!(Complex64::new(-1.0, 0.0).phase(), PI);
    let flipped = Complex64::new(-1.0, 0.0).conj();
    assert!(flipped.im.is_sign_negative());
    assert_eq!(flipped.phase(), PI);
    assert_eq!(Complex64::new(-3.5, -0.0).phase(), PI);
    assert!((Complex64::new(-1.0, -1e-300).phase() + PI).abs() < EPSILON);
    assert!((Complex64::new(1.0, -1.0).phase() + PI / 4.0).abs() < EPSILON);
}

#[test]
fn exp_of_imaginary_is_unit_phasor() {
    let theta = 0.7;
    let e = Complex64::new(0.0, theta).exp();
    assert!(e.approx_eq(Complex64::expi(theta), EPSILON));
    assert!((e.abs() - 1.0).abs() < EPSILON);
    let euler = Complex64::new(0.0, PI).exp();
    assert!(euler.approx_eq(Complex64::new(-1.0, 0.0), EPSILON));
    let scaled = Complex64::new(2.0, 0.0).exp();
    assert!((scaled.re - 2f64.exp()).abs() < EPSILON);
}

#[test]
fn trig_identities() {
    let z = Complex64::new(0.4, -1.3);
    let s = z.sin();
    let c = z.cos();
    // sin² + cos² = 1 holds over the complex field
    let sum = s.mul(s).add(c.mul(c));
    assert!(sum.approx_eq(Complex64::one(), 1e-12), "{sum}");
    assert!(z.tan().approx_eq(s.div(c), 0.0));

    // real arguments reduce to the real functions
    let r = Complex64::new(0.9, 0.0);
    assert!((r.sin().re - 0.9f64.sin()).abs() < EPSILON);
    assert!((r.cos().re - 0.9f64.cos()).abs() < EPSILON);
    assert!((r.tan().re - 0.9f64.tan()).abs() < EPSILON);
    assert_eq!(r.sin().im, 0.0);
}

#[test]
fn display_forms() {
    assert_eq!(Complex64::new(2.5, 0.0).to_string(), "2.5");
    assert_eq!(Complex64::new(0.0, 3.0).to_string(), "3i");
    assert_eq!(Complex64::new(1.0, -2.0).to_string(), "1 - 2i");
    assert_eq!(Complex64::new(-1.0, 2.0).to_string(), "-1 + 2i");
    assert_eq!(Complex64::zero().to_string(), "0");
}

#[test]
fn float_helpers_for_f32() {
    assert_eq!(<f32 as Float>::from_f64(0.5), 0.5f32);
    let c = Complex32::new(3.0, 4.0);
    assert!((c.abs() - 5.0).abs() < 1e-6);
    assert!((Complex32::expi(std::f32::consts::PI).re + 1.0).abs() < 1e-6);
}

#[test]
fn complex_repr_c_layout() {
    use core::mem::{align_of, size_of};
    assert_eq!(size_of::<Complex32>(), size_of::<[f32; 2]>());
    assert_eq!(align_of::<Complex64>(), align_of::<[f64; 2]>());
}
