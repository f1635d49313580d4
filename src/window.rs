use crate::dimensions::DimensionSet;
use crate::math::clamp;
use crate::types::{Approach, Context, Dimensions, Padding, Position};

/// Maps a pixel offset to an index along one axis, clamped into `[0, len]`.
pub(crate) fn index_at(offset: f64, cell_size: f64, len: usize, approach: Approach) -> usize {
    let raw = match approach {
        Approach::First => (offset / cell_size).floor(),
        Approach::Last => (offset / cell_size).ceil(),
    };
    clamp(raw, 0.0, len as f64) as usize
}

/// Converts the padded visible rectangle into the half-open index window,
/// plus the approximate rendered box recorded for instrumentation.
///
/// The `+1` on both `last` bounds over-includes one trailing index instead of
/// doing exact edge math on the ceiling bound; the trailing `min` restores
/// `last <= len` at the end of the grid. The rendered box under-counts the
/// true covered box by less than one cell and must never drive correctness
/// decisions.
pub(crate) fn compute(
    position: Position,
    padding: Padding,
    dimensions: &DimensionSet,
    row_len: usize,
    column_len: usize,
) -> (Context, Dimensions) {
    let viewport = dimensions.viewport;

    let y_min = position.y - padding.top as f64;
    let y_max = position.y + viewport.height + padding.bottom as f64;

    let x_min = position.x - padding.left as f64;
    let x_max = position.x + viewport.width + padding.right as f64;

    let row_height = dimensions.row.height;
    let column_width = dimensions.column.width;

    let context = Context {
        row_first: index_at(y_min, row_height, row_len, Approach::First),
        row_last: (index_at(y_max, row_height, row_len, Approach::Last) + 1).min(row_len),
        column_first: index_at(x_min, column_width, column_len, Approach::First),
        column_last: (index_at(x_max, column_width, column_len, Approach::Last) + 1)
            .min(column_len),
    };

    let rendered = Dimensions::new(x_max - x_min, y_max - y_min);

    (context, rendered)
}
