//! Normalized indel similarity between two strings.

/// Returns the similarity of `a` and `b` as a score in `0..=100`.
///
/// The score is `2 * lcs / (len(a) + len(b))` scaled to 100 and rounded,
/// where `lcs` is the length of the longest common subsequence and
/// lengths are counted in chars. Comparison is case-sensitive; callers
/// lowercase both sides first when they want otherwise.
///
/// # Examples
///
/// ```
/// use ratenote::search::ratio;
///
/// assert_eq!(ratio("rust", "rust"), 100);
/// assert_eq!(ratio("abc", "xyz"), 0);
/// assert_eq!(ratio("intro rust", "intro to rust"), 87);
/// ```
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();

    if total == 0 {
        return 100;
    }

    let lcs = lcs_len(&a, &b);
    let score = (200.0 * lcs as f64 / total as f64).round();
    score as u8
}

/// Length of the longest common subsequence, keeping one DP row.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    // iterate over the shorter string in the inner loop
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; inner.len() + 1];
    for &oc in outer {
        let mut diag = 0;
        for (j, &ic) in inner.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if oc == ic {
                diag + 1
            } else {
                up.max(row[j])
            };
            diag = up;
        }
    }
    row[inner.len()]
}
