use crate::*;

/// Slides every row or column of `grid` toward `direction`.
///
/// Only lines whose contents actually changed are written back. Returns
/// whether any line changed, which is what decides if a tile spawns.
pub fn apply_move(direction: Direction, grid: &mut Grid) -> bool {
    let kind = direction.line_kind();
    let toward_low_index = direction.toward_low_index();

    let mut changed = false;
    for index in 0..grid.size() {
        let (line, line_changed) =
            shift_combine_shift(&grid.get_line(kind, index), toward_low_index);
        if line_changed {
            grid.set_line(kind, index, &line);
            changed = true;
        }
    }

    log::trace!("Move {:?} changed: {}", direction, changed);
    changed
}
