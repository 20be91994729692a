// tests/sampling_tests.rs
//
// Witness sampling guarantees: distinct QR picks, one QNR, bounded termination.

use num::BigInt;
use qr_database::core::{classify, sample, sample_from, Modulus, StaticRandom};

#[cfg(test)]
mod sampling_tests {
    use super::*;
    use std::collections::HashSet;
    use std::time::{Duration, Instant};

    #[test]
    fn test_scenario_p_11_n_4() {
        let classes = classify(&Modulus::new(BigInt::from(11)).unwrap()).unwrap();
        let mut rng = StaticRandom::from_seed(11);

        let selection = sample(&classes, 4, &mut rng).unwrap();
        let picked: HashSet<&BigInt> = selection.selected_qrs().iter().collect();

        assert_eq!(selection.selected_qrs().len(), 3);
        assert_eq!(picked.len(), 3, "no repeats");
        assert!(selection.selected_qrs().iter().all(|v| classes.qr().contains(v)));
        assert!(classes.qnr().contains(selection.selected_qnr()));
    }

    #[test]
    fn test_every_valid_n_for_p_1009() {
        let classes = classify(&Modulus::new(BigInt::from(1009)).unwrap()).unwrap();
        let qr: HashSet<&BigInt> = classes.qr().iter().collect();
        let qnr: HashSet<&BigInt> = classes.qnr().iter().collect();
        let mut rng = StaticRandom::from_seed(1009);

        for n in 2..=classes.qr().len() + 1 {
            let selection = sample(&classes, n, &mut rng).unwrap();
            let picked: HashSet<&BigInt> = selection.selected_qrs().iter().collect();

            assert_eq!(selection.selected_qrs().len(), n - 1);
            assert_eq!(picked.len(), n - 1);
            assert!(picked.is_subset(&qr));
            assert!(qnr.contains(selection.selected_qnr()));
        }
    }

    #[test]
    fn test_boundary_takes_whole_qr_set() {
        let classes = classify(&Modulus::new(BigInt::from(23)).unwrap()).unwrap();
        let mut rng = StaticRandom::from_seed(23);
        let n = classes.qr().len() + 1;

        let start = Instant::now();
        let selection = sample(&classes, n, &mut rng).unwrap();
        assert!(start.elapsed() < Duration::from_secs(5), "Should not spin on the last pick");

        let mut picked = selection.selected_qrs().to_vec();
        picked.sort();
        assert_eq!(picked, classes.qr());
        assert!(classes.qnr().contains(selection.selected_qnr()));
    }

    #[test]
    fn test_oversized_request_is_rejected() {
        // REGRESSION: n - 1 > |QR| must fail fast instead of looping forever
        let classes = classify(&Modulus::new(BigInt::from(11)).unwrap()).unwrap();
        let mut rng = StaticRandom::from_seed(1);

        let err = sample(&classes, 7, &mut rng).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_qr_picks_cover_the_set_over_many_runs() {
        let qr: Vec<BigInt> = [1, 3, 4, 5, 9].iter().map(|&v| BigInt::from(v)).collect();
        let qnr: Vec<BigInt> = [2, 6, 7, 8, 10].iter().map(|&v| BigInt::from(v)).collect();
        let mut rng = StaticRandom::from_seed(77);

        let mut counts = [0usize; 5];
        for _ in 0..5000 {
            let selection = sample_from(&qr, &qnr, 2, &mut rng).unwrap();
            let idx = qr.iter().position(|v| v == &selection.selected_qrs()[0]).unwrap();
            counts[idx] += 1;
        }

        // Expected 1000 each; a biased picker would drift far outside this band
        for (i, &c) in counts.iter().enumerate() {
            assert!((800..=1200).contains(&c), "index {} drawn {} times", i, c);
        }
    }
}
