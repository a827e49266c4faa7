//! Kasai's linear-time LCP construction.

/// Compute the LCP array for `sa` over `text`.
///
/// `sa` carries one entry per text position plus the terminal sentinel, so
/// `sa.len() == text.len() + 1`. `lcp[i]` is the length of the longest common
/// prefix of the suffixes at `sa[i - 1]` and `sa[i]`; `lcp[0]` is `0`.
/// Comparisons are bounded by the text itself, which is equivalent to
/// comparing against the conceptual sentinel: the sentinel matches nothing.
///
/// Runs in O(n): the match length `h` drops by at most one per outer step, so
/// the total number of byte comparisons is at most `2n`.
pub fn lcp_array(text: &[u8], sa: &[usize]) -> Vec<usize> {
    let n = sa.len();
    let mut lcp = vec![0usize; n];
    if n == 0 {
        return lcp;
    }

    // rank[pos] = index of the suffix starting at pos within sa.
    let mut rank = vec![0usize; n];
    for (i, &pos) in sa.iter().enumerate() {
        if pos < n {
            rank[pos] = i;
        }
    }

    let mut h = 0usize;
    for i in 0..n {
        if rank[i] > 0 {
            let j = sa[rank[i] - 1];
            while i + h < text.len() && j + h < text.len() && text[i + h] == text[j + h] {
                h += 1;
            }
            lcp[rank[i]] = h;
            h = h.saturating_sub(1);
        } else {
            lcp[rank[i]] = 0;
        }
    }
    lcp
}
