// Frequency prediction over the human's recent inputs

/// Most frequent value in `history`, scanning faces 1..=6 in ascending order
/// so that ties go to the lowest value.
///
/// Returns None for an empty history. Values outside 1..=6 are ignored.
pub fn most_frequent(history: &[u8]) -> Option<u8> {
    let mut counts = [0usize; 6];
    for &value in history {
        if (1..=6).contains(&value) {
            counts[value as usize - 1] += 1;
        }
    }

    let mut best: Option<(u8, usize)> = None;
    for (index, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        // Strictly greater keeps the first (lowest) face on ties
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((index as u8 + 1, count));
        }
    }

    best.map(|(face, _)| face)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode() {
        assert_eq!(most_frequent(&[4, 4, 4]), Some(4));
        assert_eq!(most_frequent(&[1, 6, 6, 2, 6, 3]), Some(6));
    }

    #[test]
    fn test_tie_goes_to_lowest_value() {
        assert_eq!(most_frequent(&[5, 2, 5, 2]), Some(2));
        assert_eq!(most_frequent(&[6, 5, 4, 3, 2, 1]), Some(1));
        // order of arrival does not matter
        assert_eq!(most_frequent(&[3, 3, 1, 1]), Some(1));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(most_frequent(&[]), None);
    }
}
