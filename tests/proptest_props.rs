use ctfft::fft::{FftError, FftImpl, FftStrategy, Radix2Fft};
use ctfft::{forward_transform, inverse_transform, Complex64};
use proptest::prelude::*;

fn signal(max_log2: u32) -> impl Strategy<Value = Vec<Complex64>> {
    (0..=max_log2).prop_flat_map(|log2| {
        proptest::collection::vec(
            (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(re, im)| Complex64::new(re, im)),
            1usize << log2,
        )
    })
}

proptest! {
    #[test]
    fn prop_roundtrip(x in signal(9)) {
        let z = inverse_transform(&forward_transform(&x).unwrap()).unwrap();
        for (a, b) in z.iter().zip(x.iter()) {
            prop_assert!(a.approx_eq(*b, 1e-8), "{} vs {}", a, b);
        }
    }

    #[test]
    fn prop_strategies_agree(x in signal(8)) {
        let rec = Radix2Fft::<f64>::new(FftStrategy::Recursive).fft_vec(&x).unwrap();
        let it = Radix2Fft::<f64>::new(FftStrategy::Iterative).fft_vec(&x).unwrap();
        for (a, b) in rec.iter().zip(it.iter()) {
            prop_assert!(a.approx_eq(*b, 1e-7), "{} vs {}", a, b);
        }
    }

    #[test]
    fn prop_dc_bin_is_sum(x in signal(8)) {
        let y = forward_transform(&x).unwrap();
        let sum = x.iter().fold(Complex64::zero(), |acc, &c| acc + c);
        prop_assert!(y[0].approx_eq(sum, 1e-7));
    }

    #[test]
    fn prop_rejects_non_power_of_two(n in 0usize..600) {
        prop_assume!(!n.is_power_of_two());
        let x = vec![Complex64::one(); n];
        prop_assert_eq!(forward_transform(&x), Err(FftError::InvalidSize { len: n }));
        prop_assert_eq!(inverse_transform(&x), Err(FftError::InvalidSize { len: n }));
    }

    #[test]
    fn prop_reciprocal_inverts(re in -1e6f64..1e6, im in -1e6f64..1e6) {
        let a = Complex64::new(re, im);
        prop_assume!(a.abs() > 1e-6);
        prop_assert!(a.mul(a.reciprocal()).approx_eq(Complex64::one(), 1e-9));
        for p in [a.phase(), a.conj().phase()] {
            prop_assert!(p > -std::f64::consts::PI && p <= std::f64::consts::PI);
        }
        prop_assert!((a.abs() - re.hypot(im)).abs() <= 1e-9 * a.abs());
    }
}
