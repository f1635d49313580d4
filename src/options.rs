use std::sync::Arc;

use crate::types::{Layout, WheelBehavior};

/// Fills content into a freshly windowed cell: `(row, column, handle)`.
///
/// Called exactly once per index while that index stays continuously inside
/// the window; handles are reused, not re-rendered, across passes.
pub type RenderNodeCallback<H> = Arc<dyn Fn(usize, usize, &H) + Send + Sync>;

/// Notifies the caller that a cell left the window: `(row, column, handle)`.
///
/// The handle is already detached when this fires; callers must not retain it.
pub type RemoveNodeCallback<H> = Arc<dyn Fn(usize, usize, &H) + Send + Sync>;

/// Fires once per completed render pass, after both the creation and the
/// deferred removal phase, so callers can batch a downstream UI commit.
pub type FinishRenderCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::VirtualGrid`].
///
/// Cheap to clone: the callbacks live in `Arc`s. `H` is the surface's handle
/// type.
pub struct GridOptions<H> {
    /// Number of virtual rows (≥ 0).
    pub row_len: usize,
    /// Number of virtual columns (≥ 0).
    pub column_len: usize,
    /// Height of one row, in surface units.
    pub row_size: f64,
    /// Width of one column, in surface units.
    pub column_size: f64,
    pub layout: Layout,
    pub wheel_behavior: WheelBehavior,
    /// One-sided lookahead applied in the direction of travel, in surface
    /// units.
    pub scroll_padding: u32,
    /// Right-to-left layout: horizontal prefetch sides are swapped.
    pub rtl: bool,
    pub render_node: RenderNodeCallback<H>,
    pub remove_node: Option<RemoveNodeCallback<H>>,
    pub finish_render: Option<FinishRenderCallback>,
}

impl<H> GridOptions<H> {
    /// Creates options for a `row_len × column_len` grid of fixed-size cells.
    ///
    /// `render_node` receives every newly windowed cell (or row container,
    /// when column layout is disabled) and must populate it synchronously.
    pub fn new(
        row_len: usize,
        column_len: usize,
        row_size: f64,
        column_size: f64,
        render_node: impl Fn(usize, usize, &H) + Send + Sync + 'static,
    ) -> Self {
        Self {
            row_len,
            column_len,
            row_size,
            column_size,
            layout: Layout::default(),
            wheel_behavior: WheelBehavior::Native,
            scroll_padding: 800,
            rtl: false,
            render_node: Arc::new(render_node),
            remove_node: None,
            finish_render: None,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_wheel_behavior(mut self, wheel_behavior: WheelBehavior) -> Self {
        self.wheel_behavior = wheel_behavior;
        self
    }

    pub fn with_scroll_padding(mut self, scroll_padding: u32) -> Self {
        self.scroll_padding = scroll_padding;
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn with_remove_node(
        mut self,
        remove_node: Option<impl Fn(usize, usize, &H) + Send + Sync + 'static>,
    ) -> Self {
        self.remove_node = remove_node.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_finish_render(
        mut self,
        finish_render: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.finish_render = finish_render.map(|f| Arc::new(f) as _);
        self
    }
}

impl<H> Clone for GridOptions<H> {
    fn clone(&self) -> Self {
        Self {
            row_len: self.row_len,
            column_len: self.column_len,
            row_size: self.row_size,
            column_size: self.column_size,
            layout: self.layout,
            wheel_behavior: self.wheel_behavior,
            scroll_padding: self.scroll_padding,
            rtl: self.rtl,
            render_node: Arc::clone(&self.render_node),
            remove_node: self.remove_node.clone(),
            finish_render: self.finish_render.clone(),
        }
    }
}

impl<H> core::fmt::Debug for GridOptions<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOptions")
            .field("row_len", &self.row_len)
            .field("column_len", &self.column_len)
            .field("row_size", &self.row_size)
            .field("column_size", &self.column_size)
            .field("layout", &self.layout)
            .field("wheel_behavior", &self.wheel_behavior)
            .field("scroll_padding", &self.scroll_padding)
            .field("rtl", &self.rtl)
            .finish_non_exhaustive()
    }
}
