use std::collections::BTreeMap;

/// One pooled row: its container handle plus the cells attached under it,
/// keyed by column index.
pub(crate) struct RowEntry<H> {
    pub(crate) handle: H,
    pub(crate) cells: BTreeMap<usize, H>,
}

impl<H> RowEntry<H> {
    pub(crate) fn has_cell(&self, column: usize) -> bool {
        self.cells.contains_key(&column)
    }

    pub(crate) fn insert_cell(&mut self, column: usize, handle: H) {
        let previous = self.cells.insert(column, handle);
        debug_assert!(
            previous.is_none(),
            "cell {column} created while already pooled"
        );
    }
}

/// Row and cell handles currently materialized, keyed by grid index.
///
/// An entry exists iff its index was inside some window snapshot that has not
/// been superseded by a removal pass yet. Ordered keys keep eviction walks
/// deterministic.
pub(crate) struct HandlePool<H> {
    rows: BTreeMap<usize, RowEntry<H>>,
}

impl<H> HandlePool<H> {
    pub(crate) fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn contains_row(&self, row: usize) -> bool {
        self.rows.contains_key(&row)
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> Option<&mut RowEntry<H>> {
        self.rows.get_mut(&row)
    }

    pub(crate) fn insert_row(&mut self, row: usize, handle: H) -> &mut RowEntry<H> {
        debug_assert!(
            !self.rows.contains_key(&row),
            "row {row} created while already pooled"
        );
        self.rows.entry(row).or_insert_with(|| RowEntry {
            handle,
            cells: BTreeMap::new(),
        })
    }

    pub(crate) fn row_indexes(&self) -> Vec<usize> {
        self.rows.keys().copied().collect()
    }

    /// Removes and returns every row whose index falls outside
    /// `[first, last)`. Evicting nothing is a no-op.
    pub(crate) fn take_rows_outside(&mut self, first: usize, last: usize) -> Vec<(usize, RowEntry<H>)> {
        let stale: Vec<usize> = self
            .rows
            .keys()
            .copied()
            .filter(|row| !(first..last).contains(row))
            .collect();
        stale
            .into_iter()
            .filter_map(|row| self.rows.remove(&row).map(|entry| (row, entry)))
            .collect()
    }

    /// Removes and returns the cells of `row` whose column index falls
    /// outside `[first, last)`. Unknown rows and absent cells are no-ops.
    pub(crate) fn take_cells_outside(
        &mut self,
        row: usize,
        first: usize,
        last: usize,
    ) -> Vec<(usize, H)> {
        let Some(entry) = self.rows.get_mut(&row) else {
            return Vec::new();
        };
        let stale: Vec<usize> = entry
            .cells
            .keys()
            .copied()
            .filter(|column| !(first..last).contains(column))
            .collect();
        stale
            .into_iter()
            .filter_map(|column| entry.cells.remove(&column).map(|handle| (column, handle)))
            .collect()
    }

    /// Drops every pooled entry. Handle destruction is the surface's business;
    /// this only forgets them.
    pub(crate) fn clear(&mut self) {
        self.rows.clear();
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&usize, &RowEntry<H>)> {
        self.rows.iter()
    }
}
