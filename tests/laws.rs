use nonempty_seq::typeclass::{
    comparing, Applicative, Chain, Comonad, Extend, Identity, IdentityKind, Natural, OptionKind,
};
use nonempty_seq::{group_by, prepend, NonEmptyVec, NonEmptyVecKind};
use proptest::prelude::*;

fn non_empty() -> impl Strategy<Value = NonEmptyVec<i32>> {
    prop::collection::vec(-50i32..50, 1..40).prop_map(|items| {
        NonEmptyVec::from_vec(items).expect("strategy yields at least one element")
    })
}

const STEPS: [fn(i32) -> i32; 4] = [
    |n| n.wrapping_add(1),
    |n| n.wrapping_mul(2),
    |n| n.wrapping_sub(7),
    |n| n / 3,
];

fn functions() -> impl Strategy<Value = NonEmptyVec<fn(i32) -> i32>> {
    prop::collection::vec(0..STEPS.len(), 1..4).prop_map(|picks| {
        NonEmptyVec::from_vec(picks.into_iter().map(|i| STEPS[i]).collect())
            .expect("strategy yields at least one function")
    })
}

fn spread(n: i32) -> NonEmptyVec<i32> {
    NonEmptyVec::from_parts(n, vec![n.wrapping_add(1), n.wrapping_mul(3)])
}

fn halve_or_keep(n: i32) -> NonEmptyVec<i32> {
    if n % 2 == 0 {
        NonEmptyVec::new(n / 2)
    } else {
        NonEmptyVec::from_parts(n, vec![n])
    }
}

proptest! {
    #[test]
    fn from_vec_accepts_exactly_non_empty(items in prop::collection::vec(any::<i32>(), 0..20)) {
        let built = NonEmptyVec::from_vec(items.clone());
        prop_assert_eq!(built.is_some(), !items.is_empty());
        if let Some(built) = built {
            prop_assert_eq!(built.into_vec(), items);
        }
    }

    #[test]
    fn prepend_then_split(value: i32, rest in prop::collection::vec(any::<i32>(), 0..20)) {
        let xs = prepend(value, rest.clone());
        prop_assert_eq!(xs.head(), &value);
        prop_assert_eq!(xs.tail(), rest.as_slice());
    }

    #[test]
    fn reverse_is_an_involution(xs in non_empty()) {
        prop_assert_eq!(xs.clone().reverse().reverse(), xs);
    }

    #[test]
    fn functor_identity(xs in non_empty()) {
        prop_assert_eq!(xs.clone().map(|n| n), xs);
    }

    #[test]
    fn functor_composition(xs in non_empty()) {
        let f = |n: i32| n.wrapping_mul(7);
        let g = |n: i32| n.wrapping_sub(3);
        prop_assert_eq!(xs.clone().map(f).map(g), xs.map(|n| g(f(n))));
    }

    #[test]
    fn applicative_identity(xs in non_empty()) {
        let id = NonEmptyVecKind::of(|n: i32| n);
        prop_assert_eq!(id.ap(&xs), xs);
    }

    #[test]
    fn applicative_homomorphism(a: i32) {
        let f = |n: i32| n.wrapping_add(11);
        let applied = NonEmptyVecKind::of(f).ap(&NonEmptyVecKind::of(a));
        prop_assert_eq!(applied, NonEmptyVec::new(f(a)));
    }

    #[test]
    fn apply_composition(fs in functions(), gs in functions(), xs in non_empty()) {
        let composed = fs
            .clone()
            .map(|f| move |g: fn(i32) -> i32| move |x: i32| f(g(x)))
            .ap(&gs)
            .ap(&xs);
        prop_assert_eq!(composed, fs.ap(&gs.ap(&xs)));
    }

    #[test]
    fn applicative_interchange(fs in functions(), y: i32) {
        let applied = fs.clone().ap(&NonEmptyVecKind::of(y));
        let flipped = NonEmptyVecKind::of(move |f: fn(i32) -> i32| f(y)).ap(&fs);
        prop_assert_eq!(applied, flipped);
    }

    #[test]
    fn monad_left_identity(a in -50i32..50) {
        prop_assert_eq!(NonEmptyVecKind::chain(NonEmptyVecKind::of(a), spread), spread(a));
    }

    #[test]
    fn monad_right_identity(xs in non_empty()) {
        prop_assert_eq!(xs.clone().chain(NonEmptyVec::new), xs);
    }

    #[test]
    fn monad_associativity(xs in non_empty()) {
        let nested = xs.clone().chain(spread).chain(halve_or_keep);
        let inner = xs.chain(|n| spread(n).chain(halve_or_keep));
        prop_assert_eq!(nested, inner);
    }

    #[test]
    fn comonad_extract_of_extend(xs in non_empty()) {
        let total = |w: &NonEmptyVec<i32>| w.iter().sum::<i32>();
        let extended = NonEmptyVecKind::extend(xs.clone(), total);
        prop_assert_eq!(NonEmptyVecKind::extract(extended), total(&xs));
    }

    #[test]
    fn comonad_extend_extract(xs in non_empty()) {
        prop_assert_eq!(xs.clone().extend(|w| *w.head()), xs);
    }

    #[test]
    fn extend_associativity(xs in non_empty()) {
        let total = |w: &NonEmptyVec<i32>| w.iter().fold(0i32, |acc, n| acc.wrapping_add(*n));
        let weighted = |w: &NonEmptyVec<i32>| w.head().wrapping_mul(w.len() as i32);
        let nested = xs.clone().extend(total).extend(weighted);
        let inner = xs.extend(|w| weighted(&w.clone().extend(total)));
        prop_assert_eq!(nested, inner);
    }

    #[test]
    fn fold_map_matches_left_to_right_concatenation(xs in non_empty()) {
        let concat = |x: String, y: String| x + &y;
        let expected: String = xs.iter().map(|n| format!("{n};")).collect();
        prop_assert_eq!(xs.fold_map(&concat, |n| format!("{n};")), expected);
    }

    #[test]
    fn traverse_with_pure_is_pure(xs in non_empty()) {
        prop_assert_eq!(xs.clone().traverse::<OptionKind, _, _>(Some), Some(xs.clone()));
        let mapped = xs.clone().traverse::<IdentityKind, _, _>(|n| Identity(n.wrapping_add(1)));
        prop_assert_eq!(mapped, Identity(xs.map(|n| n.wrapping_add(1))));
    }

    #[test]
    fn traverse_fails_iff_any_fails(xs in non_empty()) {
        let out = xs.clone().traverse::<OptionKind, _, _>(|n| (n >= 0).then_some(n));
        prop_assert_eq!(out.is_none(), xs.iter().any(|n| *n < 0));
    }

    #[test]
    fn sort_orders_and_keeps_elements(xs in non_empty()) {
        let sorted = xs.clone().sort(&Natural).into_vec();
        let mut expected = xs.into_vec();
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn sort_is_stable(xs in non_empty()) {
        let tagged = xs.map_with_index(|i, n| (n.rem_euclid(5), i));
        let sorted = tagged.sort(&comparing(|pair: &(i32, usize)| pair.0)).into_vec();
        for window in sorted.windows(2) {
            let (before, after) = (window[0], window[1]);
            prop_assert!(before.0 < after.0 || (before.0 == after.0 && before.1 < after.1));
        }
    }

    #[test]
    fn group_runs_rebuild_the_input(xs in non_empty()) {
        let runs = xs.clone().group(&Natural);
        for run in runs.iter() {
            prop_assert!(run.iter().all(|n| n == run.head()));
        }
        for pair in runs.to_vec().windows(2) {
            prop_assert_ne!(pair[0].head(), pair[1].head());
        }
        prop_assert_eq!(runs.flatten(), xs);
    }

    #[test]
    fn group_sort_yields_sorted_classes(xs in non_empty()) {
        let class = |n: &i32| n.rem_euclid(7);
        let runs = xs.clone().group_sort(&comparing(class));
        for run in runs.iter() {
            prop_assert!(run.iter().all(|n| class(n) == class(run.head())));
        }
        for pair in runs.to_vec().windows(2) {
            prop_assert!(class(pair[0].head()) < class(pair[1].head()));
        }
        let mut regrouped = runs.flatten().into_vec();
        regrouped.sort();
        let mut expected = xs.into_vec();
        expected.sort();
        prop_assert_eq!(regrouped, expected);
    }

    #[test]
    fn group_by_partitions_in_input_order(xs in non_empty()) {
        let buckets = group_by(xs.clone(), |n: &i32| n.rem_euclid(5));

        let mut first_seen = Vec::new();
        for key in xs.iter().map(|n| n.rem_euclid(5)) {
            if !first_seen.contains(&key) {
                first_seen.push(key);
            }
        }
        prop_assert_eq!(buckets.keys().copied().collect::<Vec<_>>(), first_seen);

        for (key, bucket) in &buckets {
            let expected: Vec<i32> = xs
                .iter()
                .copied()
                .filter(|n| n.rem_euclid(5) == *key)
                .collect();
            prop_assert_eq!(bucket.to_vec(), expected);
        }

        let mut gathered: Vec<i32> = buckets
            .values()
            .flat_map(|bucket| bucket.iter().copied())
            .collect();
        gathered.sort();
        let mut expected = xs.into_vec();
        expected.sort();
        prop_assert_eq!(gathered, expected);
    }

    #[test]
    fn chunks_rebuild_the_input(xs in non_empty(), n in 1usize..8) {
        let chunks = xs.clone().chunks_of(n);
        let (init, last) = chunks.clone().unappend();
        prop_assert!(init.iter().all(|chunk| chunk.len() == n));
        prop_assert!(last.len() <= n);
        prop_assert_eq!(chunks.flatten(), xs);
    }

    #[test]
    fn modify_at_rejects_out_of_range(xs in non_empty(), extra in 0usize..10) {
        let len = xs.len();
        prop_assert_eq!(xs.modify_at(len + extra, |n| n + 1), None);
        prop_assert_eq!(xs.modify_at(extra % len, |n| *n), Some(xs.clone()));
    }

    #[test]
    fn intersperse_length(xs in non_empty()) {
        let len = xs.len();
        prop_assert_eq!(xs.clone().intersperse(0).len(), 2 * len - 1);
        prop_assert_eq!(xs.prepend_all(0).len(), 2 * len);
    }

    #[test]
    fn zip_then_unzip(xs in non_empty(), ys in non_empty()) {
        let shortest = xs.len().min(ys.len());
        let (left, right) = xs.clone().zip(ys.clone()).unzip();
        prop_assert_eq!(left.len(), shortest);
        prop_assert_eq!(left.into_vec(), xs.into_vec()[..shortest].to_vec());
        prop_assert_eq!(right.into_vec(), ys.into_vec()[..shortest].to_vec());
    }

    #[test]
    fn min_and_max_match_iterators(xs in non_empty()) {
        prop_assert_eq!(Some(xs.clone().min(&Natural)), xs.iter().copied().min());
        prop_assert_eq!(Some(xs.clone().max(&Natural)), xs.iter().copied().max());
    }

    #[test]
    fn rotate_round_trip(xs in non_empty(), n in -20isize..20) {
        prop_assert_eq!(xs.clone().rotate(n).rotate(-n), xs);
    }
}
