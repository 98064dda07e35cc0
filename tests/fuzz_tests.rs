use probesort::prelude::*;
use probesort::scan::{scan_inward, scan_outward};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_sorted(rng: &mut impl Rng, max_len: usize, max_value: i64) -> Vec<i64> {
    let len = rng.random_range(0..max_len);
    let mut data: Vec<i64> = (0..len).map(|_| rng.random_range(0..max_value)).collect();
    data.sort();
    data
}

#[test]
fn test_fuzz_search_present_and_absent() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..2_000 {
        let data = random_sorted(&mut rng, 64, 40);

        for v in -2..42 {
            let present = data.contains(&v);
            for search in Search::ALL {
                match search.run(&data, v) {
                    Some(i) => assert_eq!(data[i], v, "{} on {:?}", search.name(), data),
                    None => assert!(!present, "{} missed {} in {:?}", search.name(), v, data),
                }
            }
        }
    }
}

#[test]
fn test_fuzz_search_floats() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let len = rng.random_range(1..200);
        let mut data: Vec<f64> = (0..len).map(|_| rng.random::<f64>() * 1_000.0).collect();
        data.sort_by(|a, b| a.total_cmp(b));

        for (i, &v) in data.iter().enumerate() {
            for search in Search::ALL {
                let found = search.run(&data, v);
                assert!(found.is_some(), "{} missed index {}", search.name(), i);
                assert_eq!(data[found.unwrap()], v);
            }
        }

        for search in Search::ALL {
            assert_eq!(search.run(&data, -1.0), None, "{}", search.name());
            assert_eq!(search.run(&data, 1_000.5), None, "{}", search.name());
        }
    }
}

#[test]
fn test_fuzz_bounded_searches() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..2_000 {
        let data = random_sorted(&mut rng, 48, 30);
        if data.is_empty() {
            continue;
        }

        let lo = rng.random_range(0..data.len());
        let hi = rng.random_range(lo..data.len());
        let v = rng.random_range(-1..31);
        let present = data[lo..=hi].contains(&v);

        for result in [
            binary_search_within(&data, v, lo, hi),
            binary_search_alt_within(&data, v, lo, hi),
            interpolation_search_within(&data, v, lo, hi),
        ] {
            match result.expect("bounds fit") {
                Some(i) => {
                    assert!((lo..=hi).contains(&i));
                    assert_eq!(data[i], v);
                }
                None => assert!(!present, "missed {} in {:?}[{}..={}]", v, data, lo, hi),
            }
        }
    }
}

#[test]
fn test_fuzz_jump_block_sizes() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..1_000 {
        let data = random_sorted(&mut rng, 80, 50);
        let block = rng.random_range(1..100);
        let v = rng.random_range(-1..51);

        match jump_search_with_step(&data, v, block).expect("block is non-zero") {
            Some(i) => assert_eq!(data[i], v),
            None => assert!(!data.contains(&v)),
        }
    }
}

#[test]
fn test_fuzz_sorts_match_std() {
    let mut rng = rand::rng();

    for _ in 0..2_000 {
        let len = rng.random_range(0..120);
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();

        let mut expected = input.clone();
        expected.sort();

        for sort in Sort::ALL {
            let mut actual = input.clone();
            sort.run(&mut actual);
            assert_eq!(actual, expected, "{} on {:?}", sort.name(), input);
        }
    }
}

#[test]
fn test_fuzz_sorts_floats() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let len = rng.random_range(0..200);
        let input: Vec<f32> = (0..len).map(|_| rng.random::<f32>() - 0.5).collect();

        let mut expected = input.clone();
        expected.sort_by(|a, b| a.total_cmp(b));

        for sort in Sort::ALL {
            let mut actual = input.clone();
            sort.run(&mut actual);
            assert!(actual.windows(2).all(|w| w[0] <= w[1]), "{}", sort.name());
            assert_eq!(actual, expected, "{}", sort.name());
        }
    }
}

#[test]
fn test_fuzz_quicksort_within() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..1_000 {
        let len = rng.random_range(1..60);
        let input: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        let lo = rng.random_range(0..len);
        let hi = rng.random_range(lo..len);

        let mut expected = input.clone();
        expected[lo..=hi].sort();

        let mut actual = input.clone();
        quicksort_within(&mut actual, lo, hi).expect("bounds fit");
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_fuzz_two_pointer_single_occurrence() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..2_000 {
        let len = rng.random_range(1..40);
        let mut chars: Vec<char> = (0..len)
            .map(|_| if rng.random_bool(0.5) { 'a' } else { 'b' })
            .collect();
        let at = rng.random_range(0..len);
        chars[at] = 'X';
        let s: String = chars.iter().collect();

        assert_eq!(two_pointer_out(&s, 'X'), Some(at), "{}", s);
        assert_eq!(two_pointer_in(&s, 'X'), Some(at), "{}", s);
    }
}

#[test]
fn test_fuzz_scans_find_some_occurrence() {
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..2_000 {
        let len = rng.random_range(1..30);
        let items: Vec<u8> = (0..len).map(|_| rng.random_range(0..4)).collect();
        let target = rng.random_range(0..5);
        let left = rng.random_range(0..len);
        let right = rng.random_range(left..len);

        match scan_outward(&items, &target, left, right) {
            Some(i) => assert_eq!(items[i], target),
            None => assert!(!items.contains(&target)),
        }

        match scan_inward(&items, &target, left, right) {
            Some(i) => {
                assert!((left..=right).contains(&i));
                assert_eq!(items[i], target);
            }
            None => assert!(!items[left..=right].contains(&target)),
        }
    }
}
