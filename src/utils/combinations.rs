/// Returns every `k`-element combination of `items` as an independent
/// vector, each exactly once, in lexicographic order with respect to the
/// positions in `items`. Combinations preserve the relative order of the
/// source sequence. `k = 0` yields the single empty combination; `k`
/// larger than the input yields nothing.
///
/// Generation is recursive choose-or-skip over an increasing start index,
/// collecting whenever the running selection reaches size `k`.
///
/// # Example
/// ```
/// use tsp_exact::utils::combinations::combinations;
/// assert_eq!(
///     combinations(&[1, 2, 3], 2),
///     vec![vec![1, 2], vec![1, 3], vec![2, 3]]
/// );
/// ```
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(k);
    collect(items, k, 0, &mut current, &mut result);
    result
}

fn collect<T: Copy>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    result: &mut Vec<Vec<T>>,
) {
    if current.len() == k {
        result.push(current.clone());
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        collect(items, k, i + 1, current, result);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;

    #[test]
    fn choose_zero_is_empty_selection() {
        assert_eq!(combinations(&[1, 2, 3], 0), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn choose_more_than_len_is_empty() {
        assert!(combinations(&[1, 2, 3], 4).is_empty());
    }

    #[test]
    fn four_choose_two() {
        let combos = combinations(&[0u32, 1, 2, 3], 2);
        assert_eq!(combos.len(), 6);

        // six distinct unordered pairs, none repeated
        let distinct: FxHashSet<_> = combos
            .iter()
            .map(|c| (c[0].min(c[1]), c[0].max(c[1])))
            .collect();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn lexicographic_order() {
        assert_eq!(
            combinations(&[4u32, 2, 7], 2),
            vec![vec![4, 2], vec![4, 7], vec![2, 7]]
        );
    }

    #[test]
    fn matches_itertools_on_larger_input() {
        for k in 0..=6 {
            let ours = combinations(&[0u32, 1, 2, 3, 4, 5], k);
            let reference = (0u32..6).combinations(k).collect_vec();
            assert_eq!(ours, reference);
        }
    }
}
