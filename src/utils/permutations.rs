/// Calls `visit` once for every permutation of `items`, using `items`
/// itself as the working buffer. The slice passed to `visit` is only valid
/// for the duration of the call; callers that retain a permutation must
/// copy it. After returning, `items` is restored to its original order.
///
/// Generation is the classic fix-and-swap backtracking scheme: position
/// `start` is fixed by swapping every later candidate into it, recursing
/// on `start + 1`, and undoing the swap. Each of the n! arrangements is
/// emitted exactly once; the emission order carries no meaning. An empty
/// slice emits nothing.
///
/// # Example
/// ```
/// use tsp_exact::utils::permutations::for_each_permutation;
/// let mut count = 0;
/// for_each_permutation(&mut [1, 2, 3], |_| count += 1);
/// assert_eq!(count, 6);
/// ```
pub fn for_each_permutation<T, F>(items: &mut [T], mut visit: F)
where
    F: FnMut(&[T]),
{
    if items.is_empty() {
        return;
    }
    permute(items, 0, &mut visit);
}

fn permute<T, F>(items: &mut [T], start: usize, visit: &mut F)
where
    F: FnMut(&[T]),
{
    if start == items.len() - 1 {
        visit(items);
        return;
    }

    for i in start..items.len() {
        items.swap(start, i);
        permute(items, start + 1, visit);
        items.swap(start, i); // backtrack
    }
}

/// Materializes all permutations of `items` as independent vectors.
/// Requires O(n!·n) memory; prefer [`for_each_permutation`] when the
/// permutations only need to be consumed one at a time.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    let mut buffer = items.to_vec();
    for_each_permutation(&mut buffer, |perm| result.push(perm.to_vec()));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;

    #[test]
    fn empty_input_emits_nothing() {
        assert!(permutations::<u32>(&[]).is_empty());
    }

    #[test]
    fn single_element() {
        assert_eq!(permutations(&[7]), vec![vec![7]]);
    }

    #[test]
    fn three_elements_all_distinct() {
        let perms = permutations(&[0u32, 1, 2]);
        assert_eq!(perms.len(), 6);

        let distinct: FxHashSet<_> = perms.iter().cloned().collect();
        assert_eq!(distinct.len(), 6);

        // same set as itertools' generator
        let expected: FxHashSet<Vec<u32>> = [0u32, 1, 2].into_iter().permutations(3).collect();
        assert_eq!(distinct, expected);
    }

    #[test]
    fn buffer_is_restored() {
        let mut items = [3u32, 1, 4, 1, 5];
        for_each_permutation(&mut items, |_| {});
        assert_eq!(items, [3, 1, 4, 1, 5]);
    }

    #[test]
    fn matches_factorial_up_to_six() {
        let mut factorial = 1usize;
        for n in 1..=6usize {
            factorial *= n;
            let mut count = 0usize;
            let mut items = (0..n as u32).collect_vec();
            for_each_permutation(&mut items, |_| count += 1);
            assert_eq!(count, factorial);
        }
    }
}
