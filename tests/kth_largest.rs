use pretty_assertions::assert_eq;
use proptest::prelude::*;
use kth_largest::{Error, Kth, KthLargest};

/// The number of insertions to perform in each proptest case.
const TEST_SIZE: usize = 1_000;

/// Generates values in a narrow range so that duplicates are common.
fn value_strategy() -> impl Strategy<Value = i64> {
    -500i64..500i64
}

fn k_strategy() -> impl Strategy<Value = usize> {
    1usize..64
}

// ─── Reference model ─────────────────────────────────────────────────────────

/// Keeps every value ever inserted, sorted ascending, and answers by index.
///
/// O(n) per insertion and unbounded memory; only fit for checking answers.
#[derive(Debug)]
struct SortedKthLargest {
    k: usize,
    values: Vec<i64>,
}

impl SortedKthLargest {
    fn new(k: usize, initial: &[i64]) -> Self {
        let mut values = initial.to_vec();
        values.sort_unstable();
        Self {
            k,
            values,
        }
    }

    /// Returns the k-th largest, or the minimum while fewer than `k` values are held.
    fn add(&mut self, value: i64) -> i64 {
        let index = self.values.partition_point(|v| *v < value);
        self.values.insert(index, value);
        self.values[self.values.len().saturating_sub(self.k)]
    }
}

fn kth_largest_of(values: &[i64], k: usize) -> i64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted[k - 1]
}

fn tracker(k: usize, initial: &[i64]) -> KthLargest<i64> {
    KthLargest::try_new(k, initial.iter().copied()).unwrap()
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn stream_scenario() {
    let mut kl = tracker(3, &[4, 5, 8, 2]);
    let results: Vec<i64> = [3, 5, 10, 9, 4].into_iter().map(|v| *kl.insert(v)).collect();
    assert_eq!(results, vec![4, 5, 5, 8, 8]);
}

#[test]
fn stream_scenario_with_duplicates() {
    let mut kl = tracker(3, &[1, 2, 3, 3]);
    let results: Vec<i64> = [3, 5, 6, 7, 8].into_iter().map(|v| *kl.insert(v)).collect();
    assert_eq!(results, vec![3, 3, 3, 5, 6]);
}

#[test]
fn equal_values_count_individually() {
    let mut kl = KthLargest::new(Kth::new(3).unwrap());
    kl.insert(3);
    kl.insert(3);
    assert_eq!(*kl.insert(3), 3);
    assert_eq!(kl.len(), 3);
    assert_eq!(kl.into_sorted_vec(), vec![3, 3, 3]);
}

#[test]
fn construction_matches_sequential_inserts() {
    let initial = [9, -4, 12, 0, 12, 7];
    let built = tracker(4, &initial);

    let mut manual = KthLargest::new(Kth::new(4).unwrap());
    for value in initial {
        manual.insert(value);
    }

    assert_eq!(built.kth(), manual.kth());
    assert_eq!(built.inserted(), manual.inserted());
    assert_eq!(built.into_sorted_vec(), manual.into_sorted_vec());
}

#[test]
fn zero_k_is_rejected() {
    let error = KthLargest::<i64>::try_new(0, []).unwrap_err();
    assert_eq!(error, Error::InvalidK { k: 0 });
    assert_eq!(error.to_string(), "k must be at least 1, got 0");
}

#[test]
fn empty_initial_values() {
    let mut kl = tracker(2, &[]);
    assert_eq!(kl.kth(), None);
    assert_eq!(*kl.insert(-7), -7);
    assert_eq!(*kl.insert(-9), -9);
    assert_eq!(*kl.insert(100), -7);
}

#[test]
fn extremes_of_the_value_range() {
    let mut kl = tracker(2, &[i64::MIN, i64::MAX]);
    assert_eq!(kl.kth(), Some(&i64::MIN));
    assert_eq!(*kl.insert(0), 0);
    assert_eq!(*kl.insert(i64::MAX), i64::MAX);
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays a random stream into the tracker and the sorted reference and asserts
    /// identical answers after every insertion.
    #[test]
    fn matches_sorted_reference(
        k in k_strategy(),
        initial in proptest::collection::vec(value_strategy(), 0..32),
        stream in proptest::collection::vec(value_strategy(), 1..TEST_SIZE),
    ) {
        let mut kl = tracker(k, &initial);
        let mut reference = SortedKthLargest::new(k, &initial);

        for value in &stream {
            let expected = reference.add(*value);
            let actual = *kl.insert(*value);
            prop_assert_eq!(actual, expected, "insert({}) with k = {}", value, k);
        }
    }

    /// After `n >= k` insertions the answer is element `k - 1` of the values sorted descending.
    #[test]
    fn answer_is_kth_largest(
        k in k_strategy(),
        values in proptest::collection::vec(value_strategy(), 64..TEST_SIZE),
    ) {
        let mut kl = KthLargest::new(Kth::new(k).unwrap());
        let mut last = None;
        for value in &values {
            last = Some(*kl.insert(*value));
        }
        prop_assert_eq!(last, Some(kth_largest_of(&values, k)));
        prop_assert!(kl.is_saturated());
    }

    /// The number of retained values is `min(k, inserted)` after every insertion.
    #[test]
    fn retained_count_is_min_of_k_and_inserted(
        k in k_strategy(),
        values in proptest::collection::vec(value_strategy(), 0..256),
    ) {
        let mut kl = KthLargest::new(Kth::new(k).unwrap());
        for (n, value) in values.iter().enumerate() {
            kl.insert(*value);
            prop_assert_eq!(kl.len(), k.min(n + 1));
            prop_assert_eq!(kl.iter().count(), kl.len());
            prop_assert_eq!(kl.inserted(), (n + 1) as u64);
        }
    }

    /// Replaying a stream into a fresh tracker yields the same answers.
    #[test]
    fn replay_is_deterministic(
        k in k_strategy(),
        values in proptest::collection::vec(value_strategy(), 0..512),
    ) {
        let run = |values: &[i64]| {
            let mut kl = KthLargest::new(Kth::new(k).unwrap());
            values.iter().map(|v| *kl.insert(*v)).collect::<Vec<_>>()
        };
        prop_assert_eq!(run(values.as_slice()), run(values.as_slice()));
    }

    /// With `k = 1` the tracker is a running maximum.
    #[test]
    fn k_of_one_is_running_maximum(values in proptest::collection::vec(any::<i64>(), 1..512)) {
        let mut kl = KthLargest::new(Kth::LARGEST);
        let mut max = i64::MIN;
        for value in values {
            max = max.max(value);
            prop_assert_eq!(*kl.insert(value), max);
        }
    }

    /// The retained values are exactly the `k` largest values seen.
    #[test]
    fn retains_the_k_largest(
        k in k_strategy(),
        values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE),
    ) {
        let kl = KthLargest::with_values(Kth::new(k).unwrap(), values.iter().copied());

        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(k);

        prop_assert_eq!(kl.into_sorted_vec(), expected);
    }
}
