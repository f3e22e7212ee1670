//! Shift-combine-shift over a single row or column.
//!
//! Every step works toward index 0. Moves toward the high end reverse the
//! working copy first and reverse it back afterwards.

use alloc::vec::Vec;

use crate::Tile;

/// Owned copy of one row or column.
pub type Line = Vec<Tile>;

/// Compacts non-zero tiles to the front, keeping their order.
///
/// Returns whether any position changed.
pub fn shift_toward_front(tiles: &mut [Tile]) -> bool {
    let mut changed = false;
    let mut write = 0;
    for read in 0..tiles.len() {
        let tile = tiles[read];
        if tile == 0 {
            continue;
        }
        if read != write {
            tiles[write] = tile;
            tiles[read] = 0;
            changed = true;
        }
        write += 1;
    }
    changed
}

/// Merges adjacent equal non-zero pairs in one left-to-right pass.
///
/// The left tile of a pair doubles, the right one empties and the scan resumes
/// after the pair, so a freshly merged tile never merges again. A pair whose
/// sum would not fit in a [`Tile`] stays as it is.
pub fn combine_toward_front(tiles: &mut [Tile]) -> bool {
    let mut changed = false;
    let mut index = 0;
    while index + 1 < tiles.len() {
        let tile = tiles[index];
        let merged = match tile.checked_mul(2) {
            Some(merged) if tile != 0 && tile == tiles[index + 1] => merged,
            _ => {
                index += 1;
                continue;
            }
        };
        tiles[index] = merged;
        tiles[index + 1] = 0;
        changed = true;
        index += 2;
    }
    changed
}

/// Slides `line` toward index 0 (or toward the end when `toward_low_index` is
/// false), merging equal neighbours once.
///
/// The input is left untouched. The flag is the element-wise comparison of the
/// result against the input, and callers write the result back only when it
/// is set.
pub fn shift_combine_shift(line: &[Tile], toward_low_index: bool) -> (Line, bool) {
    let mut working = line.to_vec();
    if !toward_low_index {
        working.reverse();
    }

    shift_toward_front(&mut working);
    combine_toward_front(&mut working);
    shift_toward_front(&mut working);

    if !toward_low_index {
        working.reverse();
    }

    let changed = working.as_slice() != line;
    (working, changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const SAMPLE: [Tile; 11] = [0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3];

    /// Every line of `len` tiles drawn from `alphabet`.
    fn all_lines(alphabet: &[Tile], len: usize) -> Vec<Line> {
        let mut lines = vec![Vec::new()];
        for _ in 0..len {
            lines = lines
                .into_iter()
                .flat_map(|prefix| {
                    alphabet.iter().map(move |&tile| {
                        let mut line = prefix.clone();
                        line.push(tile);
                        line
                    })
                })
                .collect();
        }
        lines
    }

    fn reversed(line: &[Tile]) -> Line {
        line.iter().rev().copied().collect()
    }

    #[test]
    fn shift_compacts_and_reports_effect() {
        let mut tiles = [0, 2, 0, 4];
        assert!(shift_toward_front(&mut tiles));
        assert_eq!(tiles, [2, 4, 0, 0]);

        assert!(!shift_toward_front(&mut tiles));
        assert_eq!(tiles, [2, 4, 0, 0]);
    }

    #[test]
    fn combine_merges_pairs_in_place() {
        let mut tiles = SAMPLE;
        assert!(combine_toward_front(&mut tiles));
        assert_eq!(tiles, [0, 4, 0, 8, 0, 0, 0, 16, 0, 5, 3]);
    }

    #[test]
    fn combine_ignores_empty_pairs() {
        let mut tiles = [2, 4, 0, 0];
        assert!(!combine_toward_front(&mut tiles));
    }

    #[test]
    fn overflowing_pair_does_not_merge() {
        let huge = crate::MAX_TILE;
        assert_eq!(shift_combine_shift(&[huge, huge], true), (vec![huge, huge], false));
        assert_eq!(
            shift_combine_shift(&[0, huge, huge, 2], false),
            (vec![0, huge, huge, 2], false)
        );
    }

    #[test]
    fn second_largest_tiles_still_merge() {
        let half = crate::MAX_TILE >> 1;
        assert_eq!(
            shift_combine_shift(&[half, half], true),
            (vec![crate::MAX_TILE, 0], true)
        );
    }

    #[test]
    fn sample_line_toward_low_index() {
        let (line, changed) = shift_combine_shift(&SAMPLE, true);
        assert!(changed);
        assert_eq!(line, vec![4, 8, 16, 5, 3, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn sample_line_toward_high_index() {
        let (line, changed) = shift_combine_shift(&SAMPLE, false);
        assert!(changed);
        assert_eq!(line, vec![0, 0, 0, 0, 0, 0, 4, 8, 16, 5, 3]);
    }

    #[test]
    fn four_equal_tiles_merge_in_two_pairs() {
        assert_eq!(shift_combine_shift(&[2, 2, 2, 2], true), (vec![4, 4, 0, 0], true));
    }

    #[test]
    fn gapped_pair_merges() {
        assert_eq!(shift_combine_shift(&[2, 0, 2, 0], true), (vec![4, 0, 0, 0], true));
    }

    #[test]
    fn three_equal_tiles_merge_only_leading_pair() {
        assert_eq!(shift_combine_shift(&[2, 2, 2], true), (vec![4, 2, 0], true));
        assert_eq!(shift_combine_shift(&[2, 2, 2], false), (vec![0, 2, 4], true));
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        assert_eq!(shift_combine_shift(&[4, 2, 2, 0], true), (vec![4, 4, 0, 0], true));
    }

    #[test]
    fn blocked_line_reports_no_change() {
        assert_eq!(
            shift_combine_shift(&[2, 4, 8, 16], true),
            (vec![2, 4, 8, 16], false)
        );
        assert_eq!(shift_combine_shift(&[0, 0, 0, 0], false), (vec![0, 0, 0, 0], false));
    }

    #[test]
    fn compaction_alone_counts_as_change() {
        assert_eq!(shift_combine_shift(&[0, 2, 4, 8], true), (vec![2, 4, 8, 0], true));
    }

    #[test]
    fn output_is_compact_and_preserves_sum() {
        for line in all_lines(&[0, 2, 4, 8], 4) {
            let (once, _) = shift_combine_shift(&line, true);

            let mut compact = once.clone();
            assert!(!shift_toward_front(&mut compact), "{line:?} -> {once:?}");
            assert!(once.iter().all(|&tile| crate::is_valid_tile(tile)));
            assert_eq!(once.iter().sum::<Tile>(), line.iter().sum::<Tile>());

            // A second pass can only merge, never slide.
            let (twice, changed) = shift_combine_shift(&once, true);
            let mut merged = once.clone();
            assert_eq!(changed, combine_toward_front(&mut merged));
            shift_toward_front(&mut merged);
            assert_eq!(twice, merged);
        }
    }

    #[test]
    fn lines_without_equal_neighbours_settle_in_one_pass() {
        for line in all_lines(&[0, 2, 4, 8], 4) {
            let (once, _) = shift_combine_shift(&line, true);
            if once.windows(2).all(|pair| pair[0] == 0 || pair[0] != pair[1]) {
                assert_eq!(shift_combine_shift(&once, true), (once.clone(), false));
            }
        }
    }

    #[test]
    fn directions_mirror_each_other() {
        for line in all_lines(&[0, 2, 4, 8], 4) {
            let (front, front_changed) = shift_combine_shift(&line, true);
            let (back, back_changed) = shift_combine_shift(&reversed(&line), false);
            assert_eq!(front, reversed(&back), "{line:?}");
            assert_eq!(front_changed, back_changed);
        }
    }

    #[test]
    fn changed_flag_matches_inequality() {
        for line in all_lines(&[0, 2, 4], 5) {
            for toward_low_index in [true, false] {
                let (result, changed) = shift_combine_shift(&line, toward_low_index);
                assert_eq!(changed, result != line);
            }
        }
    }
}
