/// Index of the key nearest `target`, ties broken toward the higher index.
///
/// `keys` must be non-empty and sorted ascending (duplicates allowed); the
/// dataset guarantees both. Binary search narrows to the smallest index whose
/// key is `>= target` (short-circuiting on an exact hit), then the lower
/// neighbor wins only when it is strictly closer.
pub fn find_nearest(keys: &[f64], target: f64) -> usize {
    assert!(!keys.is_empty(), "find_nearest requires a non-empty key sequence");

    let mut low = 0;
    let mut high = keys.len() - 1;

    while low < high {
        let mid = (low + high) / 2;
        if keys[mid] == target {
            return mid;
        }
        if keys[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    if low > 0 && (keys[low - 1] - target).abs() < (keys[low] - target).abs() {
        return low - 1;
    }
    low
}
