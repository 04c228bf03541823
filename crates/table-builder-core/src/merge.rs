//! Merge areas
//!
//! A merge area is a rectangle of cells shown as one. The table keeps each
//! area once in an arena; every spanned cell refers to it by [`MergeAreaId`].
//! Areas never overlap.

use ahash::AHashSet;

use crate::cell::{CellAddress, CellRange};
use crate::cells_set::Axis;
use crate::error::{Error, Result};
use crate::table::Table;

/// Handle of a merge area inside its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MergeAreaId(pub(crate) usize);

impl MergeAreaId {
    /// Position of the area in registration order
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Table {
    /// Distinct merge areas in registration order
    pub fn merge_areas(&self) -> impl Iterator<Item = (MergeAreaId, CellRange)> + '_ {
        self.merge_areas
            .iter()
            .enumerate()
            .map(|(i, range)| (MergeAreaId(i), *range))
    }

    /// Number of distinct merge areas
    pub fn merge_area_count(&self) -> usize {
        self.merge_areas.len()
    }

    /// Rectangle of a merge area
    pub fn merge_area(&self, id: MergeAreaId) -> Option<CellRange> {
        self.merge_areas.get(id.0).copied()
    }

    /// Check if the cell is the top-left cell of its merge area
    ///
    /// Unmerged cells count as their own origin.
    pub fn is_merge_origin(&self, addr: CellAddress) -> bool {
        match self.cell_at(addr.row, addr.column).and_then(|c| c.merge_area) {
            Some(id) => self
                .merge_area(id)
                .map_or(false, |range| range.start() == addr),
            None => true,
        }
    }

    /// Merge `count` consecutive cells along `axis`, starting at `start`
    ///
    /// `count` includes the start cell and must be at least 2.
    pub(crate) fn merge_run(
        &mut self,
        start: CellAddress,
        count: usize,
        axis: Axis,
    ) -> Result<MergeAreaId> {
        if count < 2 {
            return Err(Error::invalid_argument(
                "count",
                format!(
                    "a merge along a {} spans at least 2 cells, got {}",
                    axis.name(),
                    count
                ),
            ));
        }

        match axis {
            Axis::Row => self.merge_span(start, 1, count),
            Axis::Column => self.merge_span(start, count, 1),
        }
    }

    /// Merge the `rows` x `columns` rectangle whose top-left cell is `start`
    pub(crate) fn merge_span(
        &mut self,
        start: CellAddress,
        rows: usize,
        columns: usize,
    ) -> Result<MergeAreaId> {
        let end = rows
            .checked_sub(1)
            .and_then(|r| start.row.checked_add(r))
            .zip(columns.checked_sub(1).and_then(|c| start.column.checked_add(c)));

        match end {
            Some((row, column)) => {
                self.merge_range(CellRange::new(start, CellAddress::new(row, column)))
            }
            None => Err(Error::invalid_range(
                format!("{} ({}x{})", start, rows, columns),
                format!(
                    "exceeds the table bounds ({} rows x {} columns)",
                    self.row_count(),
                    self.column_count()
                ),
            )),
        }
    }

    /// Register a rectangular merge area
    ///
    /// Nothing is changed when the range is rejected.
    pub(crate) fn merge_range(&mut self, range: CellRange) -> Result<MergeAreaId> {
        if range.start() == range.end() {
            return Err(Error::invalid_argument(
                "range",
                format!("a merge spans at least 2 cells, got {}", range),
            ));
        }

        if range.bottom_row >= self.row_count() || range.right_column >= self.column_count() {
            return Err(Error::invalid_range(
                range,
                format!(
                    "exceeds the table bounds ({} rows x {} columns)",
                    self.row_count(),
                    self.column_count()
                ),
            ));
        }

        if let Some(existing) = self.merge_areas.iter().find(|area| area.overlaps(&range)) {
            return Err(Error::invalid_range(
                range,
                format!("overlaps merge area {}", existing),
            ));
        }

        let id = MergeAreaId(self.merge_areas.len());
        self.merge_areas.push(range);
        for addr in range.cells() {
            self.cell_mut(addr)?.merge_area = Some(id);
        }

        log::debug!("registered merge area {} as #{}", range, id.0);
        Ok(id)
    }

    /// Keep merge areas attached to their cells after a line was inserted at `index`
    ///
    /// Areas after the new line move; areas straddling it grow over it.
    pub(crate) fn shift_merge_areas(&mut self, axis: Axis, index: usize) {
        let mut grown = Vec::new();

        for (i, area) in self.merge_areas.iter_mut().enumerate() {
            let (first, last) = match axis {
                Axis::Row => (&mut area.top_row, &mut area.bottom_row),
                Axis::Column => (&mut area.left_column, &mut area.right_column),
            };

            if *first >= index {
                *first += 1;
                *last += 1;
            } else if *last >= index {
                *last += 1;
                grown.push((MergeAreaId(i), *area));
            }
        }

        for (id, area) in grown {
            let new_cells: Vec<CellAddress> = match axis {
                Axis::Row => (area.left_column..=area.right_column)
                    .map(|column| CellAddress::new(index, column))
                    .collect(),
                Axis::Column => (area.top_row..=area.bottom_row)
                    .map(|row| CellAddress::new(row, index))
                    .collect(),
            };
            for addr in new_cells {
                if let Some(cell) = self
                    .cells
                    .get_mut(addr.row)
                    .and_then(|cells| cells.get_mut(addr.column))
                {
                    cell.merge_area = Some(id);
                }
            }
        }
    }
}

/// Tracks which merge areas a renderer has already emitted
///
/// Renderers walk every cell and see the same area once per spanned cell;
/// [`first_visit`](Self::first_visit) returns `true` only the first time.
#[derive(Debug, Default)]
pub struct EmittedMerges {
    seen: AHashSet<MergeAreaId>,
}

impl EmittedMerges {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id`, returning `true` if it had not been seen before
    pub fn first_visit(&mut self, id: MergeAreaId) -> bool {
        self.seen.insert(id)
    }

    /// Number of distinct areas seen
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if nothing was seen yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_merge_run_along_row() {
        let mut table = Table::with_size(2, 3);
        let id = table.merge_run(CellAddress::new(0, 0), 2, Axis::Row).unwrap();

        assert_eq!(table.merge_area(id), Some(CellRange::from_indices(0, 0, 0, 1)));
        assert_eq!(table.cell_at(0, 0).unwrap().merge_area(), Some(id));
        assert_eq!(table.cell_at(0, 1).unwrap().merge_area(), Some(id));
        assert_eq!(table.cell_at(0, 2).unwrap().merge_area(), None);
        assert!(table.is_merge_origin(CellAddress::new(0, 0)));
        assert!(!table.is_merge_origin(CellAddress::new(0, 1)));
        assert!(table.is_merge_origin(CellAddress::new(1, 1)));
    }

    #[test]
    fn test_merge_run_along_column() {
        let mut table = Table::with_size(3, 1);
        let id = table
            .merge_run(CellAddress::new(0, 0), 3, Axis::Column)
            .unwrap();

        assert_eq!(table.merge_area(id), Some(CellRange::from_indices(0, 0, 2, 0)));
        assert!(table.cells().all(|c| c.merge_area() == Some(id)));
    }

    #[test]
    fn test_merge_rejects_short_span() {
        let mut table = Table::with_size(2, 2);
        assert!(matches!(
            table.merge_run(CellAddress::new(0, 0), 1, Axis::Row),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            table.merge_run(CellAddress::new(0, 0), 0, Axis::Column),
            Err(Error::InvalidArgument { .. })
        ));

        let message = table
            .merge_run(CellAddress::new(0, 0), 1, Axis::Column)
            .unwrap_err()
            .to_string();
        assert!(message.contains("along a column"), "{}", message);
    }

    #[test]
    fn test_merge_rejects_out_of_bounds() {
        let mut table = Table::with_size(2, 2);
        let result = table.merge_run(CellAddress::new(0, 1), 2, Axis::Row);

        assert!(matches!(result, Err(Error::InvalidRange { .. })));
        assert_eq!(table.merge_area_count(), 0);
        assert!(table.cells().all(|c| !c.is_merged()));
    }

    #[test]
    fn test_merge_rejects_overlap_and_keeps_first() {
        let mut table = Table::with_size(1, 4);
        let first = table.merge_run(CellAddress::new(0, 0), 3, Axis::Row).unwrap();

        let overlapping = table.merge_run(CellAddress::new(0, 1), 3, Axis::Row);
        assert!(matches!(overlapping, Err(Error::InvalidRange { .. })));

        let same = table.merge_range(CellRange::from_indices(0, 0, 0, 2));
        assert!(matches!(same, Err(Error::InvalidRange { .. })));

        assert_eq!(table.merge_area_count(), 1);
        assert_eq!(table.merge_area(first), Some(CellRange::from_indices(0, 0, 0, 2)));
        assert_eq!(table.cell_at(0, 3).unwrap().merge_area(), None);
    }

    #[test]
    fn test_insert_row_shifts_and_grows_areas() {
        let mut table = Table::with_size(4, 2);
        let below = table.merge_run(CellAddress::new(2, 0), 2, Axis::Row).unwrap();
        let straddling = table
            .merge_run(CellAddress::new(0, 1), 2, Axis::Column)
            .unwrap();

        table.insert_row(1).unwrap();

        assert_eq!(table.merge_area(below), Some(CellRange::from_indices(3, 0, 3, 1)));
        assert_eq!(
            table.merge_area(straddling),
            Some(CellRange::from_indices(0, 1, 2, 1))
        );
        assert_eq!(table.cell_at(1, 1).unwrap().merge_area(), Some(straddling));
        assert_eq!(table.cell_at(1, 0).unwrap().merge_area(), None);
        assert_eq!(table.cell_at(3, 0).unwrap().merge_area(), Some(below));
        assert_eq!(table.cell_at(2, 0).unwrap().merge_area(), None);
    }

    #[test]
    fn test_insert_column_shifts_areas() {
        let mut table = Table::with_size(1, 3);
        let id = table.merge_run(CellAddress::new(0, 1), 2, Axis::Row).unwrap();

        table.insert_column(0).unwrap();

        assert_eq!(table.merge_area(id), Some(CellRange::from_indices(0, 2, 0, 3)));
        assert_eq!(table.cell_at(0, 1).unwrap().merge_area(), None);
        assert_eq!(table.cell_at(0, 3).unwrap().merge_area(), Some(id));
    }

    #[test]
    fn test_emitted_merges() {
        let mut emitted = EmittedMerges::new();
        assert!(emitted.first_visit(MergeAreaId(0)));
        assert!(!emitted.first_visit(MergeAreaId(0)));
        assert!(emitted.first_visit(MergeAreaId(1)));
        assert_eq!(emitted.len(), 2);
    }

    fn span_strategy() -> impl Strategy<Value = usize> {
        prop_oneof![0usize..6, Just(usize::MAX - 1), Just(usize::MAX)]
    }

    proptest! {
        #[test]
        fn merge_requests_never_overlap_or_panic(
            requests in proptest::collection::vec(
                (0usize..4, 0usize..4, span_strategy(), span_strategy()),
                0..12,
            )
        ) {
            let mut table = Table::with_size(4, 4);

            for (row, column, rows, columns) in requests {
                let before = table.merge_area_count();
                match table.merge_span(CellAddress::new(row, column), rows, columns) {
                    Ok(_) => prop_assert_eq!(table.merge_area_count(), before + 1),
                    Err(_) => prop_assert_eq!(table.merge_area_count(), before),
                }
            }

            let areas: Vec<CellRange> = table.merge_areas().map(|(_, r)| r).collect();
            for (i, a) in areas.iter().enumerate() {
                for b in &areas[i + 1..] {
                    prop_assert!(!a.overlaps(b), "{} overlaps {}", a, b);
                }
            }
            let merged = table.cells().filter(|c| c.is_merged()).count();
            prop_assert_eq!(merged, areas.iter().map(CellRange::cell_count).sum::<usize>());
        }
    }
}
