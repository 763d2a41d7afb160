//! Longest-common-subsequence overlap.

/// Length of the longest common subsequence of `a` and `b`.
///
/// Runs in O(n·m) time with two rolling rows sized by the shorter input.
pub fn lcs_length(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev = vec![0usize; short.len() + 1];
    let mut cur = vec![0usize; short.len() + 1];

    for &x in long {
        for (j, &y) in short.iter().enumerate() {
            cur[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[short.len()]
}

/// LCS overlap similarity: `2 · lcs / (len(a) + len(b))`.
///
/// Symmetric by construction.
///
/// # Examples
///
/// ```
/// use pkgq_similarity::lcs_similarity;
///
/// let a: Vec<char> = "abcde".chars().collect();
/// let b: Vec<char> = "ace".chars().collect();
/// assert_eq!(lcs_similarity(&a, &b), 0.75);
/// assert_eq!(lcs_similarity(&a, &b), lcs_similarity(&b, &a));
/// ```
pub fn lcs_similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * lcs_length(a, b) as f64 / total as f64
}

/// A longest common subsequence together with where it occurs in each input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LcsMatch {
    /// The matched characters, in order.
    pub subsequence: String,
    /// `(index in a, index in b)` char positions of every matched character.
    pub positions: Vec<(usize, usize)>,
}

impl LcsMatch {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Char positions of the match within the first input.
    pub fn positions_in_a(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().map(|&(i, _)| i)
    }

    /// Char positions of the match within the second input.
    pub fn positions_in_b(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().map(|&(_, j)| j)
    }
}

/// Recovers one longest common subsequence of `a` and `b`.
///
/// Keeps the full O(n·m) table to walk it back. Positions are char indices
/// into the inputs exactly as given; callers that want them to line up with
/// displayed text should pass the text they display. When several
/// subsequences share the maximum length the walk prefers advancing through
/// `a`, so the result is deterministic.
///
/// # Examples
///
/// ```
/// use pkgq_similarity::lcs_traceback;
///
/// let m = lcs_traceback("zen-theme", "zen theme");
/// assert_eq!(m.subsequence, "zentheme");
/// assert_eq!(m.positions[3], (4, 4));
/// ```
pub fn lcs_traceback(a: &str, b: &str) -> LcsMatch {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let width = b.len() + 1;

    // table[i * width + j]: LCS length of a[..i] and b[..j]
    let mut table = vec![0usize; (a.len() + 1) * width];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i * width + j] = if a[i - 1] == b[j - 1] {
                table[(i - 1) * width + j - 1] + 1
            } else {
                table[(i - 1) * width + j].max(table[i * width + j - 1])
            };
        }
    }

    let mut positions = Vec::with_capacity(table[a.len() * width + b.len()]);
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            positions.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table[(i - 1) * width + j] >= table[i * width + j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    positions.reverse();

    LcsMatch {
        subsequence: positions.iter().map(|&(i, _)| a[i]).collect(),
        positions,
    }
}
