use crate::options::GridOptions;
use crate::types::{Dimensions, Position};

/// Every box size the engine derives from one measurement pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionSet {
    /// Measured client box of the scroll container.
    pub root: Dimensions,
    /// Root minus pinned chrome.
    // TODO: subtract pinned rows/columns once they exist
    pub viewport: Dimensions,
    /// Full virtual extent: count × cell size per virtualized axis.
    pub content: Dimensions,
    pub row: Dimensions,
    pub column: Dimensions,
    /// Approximate covered box, updated per render pass. Under-counts the
    /// true rendered box by less than one cell; diagnostics only.
    pub rendered: Dimensions,
}

impl DimensionSet {
    pub const EMPTY: Self = Self {
        root: Dimensions::EMPTY,
        viewport: Dimensions::EMPTY,
        content: Dimensions::EMPTY,
        row: Dimensions::EMPTY,
        column: Dimensions::EMPTY,
        rendered: Dimensions::EMPTY,
    };
}

/// Derives all dimensions from a measured root box and the configured grid
/// shape. A zero-sized root degrades to zero-sized derived boxes; it never
/// fails.
pub(crate) fn compute<H>(root: Dimensions, options: &GridOptions<H>) -> DimensionSet {
    let layout = options.layout;

    let content = Dimensions::new(
        if layout.has_columns {
            options.column_len as f64 * options.column_size
        } else {
            root.width
        },
        if layout.has_rows {
            options.row_len as f64 * options.row_size
        } else {
            root.height
        },
    );

    let row = Dimensions::new(
        if layout.has_columns {
            root.width / options.column_len as f64
        } else {
            root.width
        },
        options.row_size,
    );

    let column = Dimensions::new(
        options.column_size,
        if layout.has_rows {
            options.row_size
        } else {
            root.height
        },
    );

    DimensionSet {
        root,
        viewport: root,
        content,
        row,
        column,
        rendered: Dimensions::EMPTY,
    }
}

/// Maximum scroll offset per axis: `content − root`. Negative when the
/// content fits inside the container, meaning no scroll is possible on that
/// axis; consumers clamp against it with the minimum winning.
pub(crate) fn max_scroll_position(dimensions: &DimensionSet) -> Position {
    Position::new(
        dimensions.content.width - dimensions.root.width,
        dimensions.content.height - dimensions.root.height,
    )
}

/// The extent the surface's filler must be sized to so native scrollbars
/// track the virtual content: `max(content, root)` per axis.
pub(crate) fn filler_extent(dimensions: &DimensionSet) -> Dimensions {
    Dimensions::new(
        dimensions.content.width.max(dimensions.root.width),
        dimensions.content.height.max(dimensions.root.height),
    )
}
