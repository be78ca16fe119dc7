use thiserror::Error;

/// The matching core's only failure mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// The dynamic-programming table could not be allocated.
    #[error("could not allocate a {cells}-cell distance table")]
    TableAlloc { cells: usize },
}

/// Levenshtein distance between `a` and `b`: the minimum number of
/// single-character insertions, deletions, and substitutions transforming
/// one into the other. Unit cost per operation, case-sensitive, byte-exact.
///
/// The full (|b|+1) x (|a|+1) table is kept as one flat buffer indexed by
/// row stride; allocation failure surfaces as a recoverable
/// [`DistanceError::TableAlloc`] instead of aborting the process.
pub fn distance(a: &str, b: &str) -> Result<u32, DistanceError> {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let width = a.len() + 1;
    let height = b.len() + 1;
    let cells = width
        .checked_mul(height)
        .ok_or(DistanceError::TableAlloc { cells: usize::MAX })?;

    let mut table: Vec<u32> = Vec::new();
    table
        .try_reserve_exact(cells)
        .map_err(|_| DistanceError::TableAlloc { cells })?;
    table.resize(cells, 0);

    // Base cases: transforming to/from the empty string costs the length.
    for (j, cell) in table[..width].iter_mut().enumerate() {
        *cell = j as u32;
    }
    for i in 1..height {
        table[i * width] = i as u32;
    }

    for i in 1..height {
        for j in 1..width {
            let deletion = table[(i - 1) * width + j] + 1;
            let insertion = table[i * width + j - 1] + 1;
            let substitution =
                table[(i - 1) * width + j - 1] + u32::from(a[j - 1] != b[i - 1]);
            table[i * width + j] = deletion.min(insertion).min(substitution);
        }
    }

    Ok(table[cells - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(a: &str, b: &str) -> u32 {
        distance(a, b).unwrap()
    }

    #[test]
    fn identical_strings_are_zero() {
        assert_eq!(d("", ""), 0);
        assert_eq!(d("htop", "htop"), 0);
    }

    #[test]
    fn empty_string_costs_the_other_length() {
        assert_eq!(d("", "vim"), 3);
        assert_eq!(d("emacs", ""), 5);
    }

    #[test]
    fn single_edits() {
        // substitution
        assert_eq!(d("cat", "bat"), 1);
        // insertion
        assert_eq!(d("sh", "ssh"), 1);
        // deletion
        assert_eq!(d("gitt", "git"), 1);
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(d("kitten", "sitting"), 3);
        assert_eq!(d("flaw", "lawn"), 2);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(d("Vim", "vim"), 1);
    }
}
