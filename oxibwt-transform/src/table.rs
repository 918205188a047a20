//! Diagnostic views of the conceptual rotation matrix.
//!
//! Neither table is needed to transform or invert a sequence. They exist so
//! callers can show how a result was obtained, and they build rows lazily so
//! nothing of size O(n²) exists unless a caller walks every row.

use oxibwt_core::symbol_rank;

/// The rotation matrix behind a forward transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationTable {
    extended: Vec<u8>,
    order: Vec<usize>,
    sentinel: u8,
}

/// One row of a [`RotationTable`]: the rotation at `offset` side by side
/// with the rotation at the same row of the sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationRow {
    /// Row index (also the offset of the unsorted rotation).
    pub offset: usize,
    /// Extended sequence rotated left by `offset`.
    pub rotation: Vec<u8>,
    /// The `offset`-th rotation in sorted order.
    pub sorted: Vec<u8>,
}

impl RotationTable {
    pub(crate) fn new(extended: Vec<u8>, order: Vec<usize>, sentinel: u8) -> Self {
        debug_assert_eq!(extended.len(), order.len());
        Self {
            extended,
            order,
            sentinel,
        }
    }

    /// Number of rows (input length plus the sentinel).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// A table always holds at least the sentinel rotation.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The input with the sentinel appended.
    pub fn extended(&self) -> &[u8] {
        &self.extended
    }

    /// The sentinel used to build the table.
    pub fn sentinel(&self) -> u8 {
        self.sentinel
    }

    /// Rotation start offsets in sorted order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Row of the sorted order that holds the extended sequence itself.
    pub fn primary_index(&self) -> usize {
        self.order.iter().position(|&i| i == 0).unwrap_or(0)
    }

    /// The extended sequence rotated left by `offset`.
    pub fn rotation(&self, offset: usize) -> Vec<u8> {
        let (head, tail) = self.extended.split_at(offset % self.extended.len().max(1));
        [tail, head].concat()
    }

    /// The rotation at `row` of the sorted order.
    pub fn sorted(&self, row: usize) -> Vec<u8> {
        self.rotation(self.order[row])
    }

    /// First symbol of every sorted rotation.
    pub fn first_column(&self) -> Vec<u8> {
        self.order.iter().map(|&i| self.extended[i]).collect()
    }

    /// Last symbol of every sorted rotation, i.e. the transformed sequence.
    pub fn last_column(&self) -> Vec<u8> {
        crate::forward::last_column(&self.extended, &self.order)
    }

    /// Iterate over the rows, building each on demand.
    pub fn rows(&self) -> impl Iterator<Item = RotationRow> + '_ {
        (0..self.len()).map(move |offset| RotationRow {
            offset,
            rotation: self.rotation(offset),
            sorted: self.sorted(offset),
        })
    }
}

/// The first and last columns of the sorted matrix recovered by the inverse
/// transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstColumnTable {
    first: Vec<u8>,
    last: Vec<u8>,
}

impl FirstColumnTable {
    /// Derive the first column from a last column by stable sorting it.
    pub(crate) fn from_last(last: &[u8], sentinel: u8) -> Self {
        let mut first = last.to_vec();
        first.sort_by_key(|&b| symbol_rank(b, sentinel));
        Self {
            first,
            last: last.to_vec(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// The first column (sorted symbols).
    pub fn first(&self) -> &[u8] {
        &self.first
    }

    /// The last column (the transformed sequence that was inverted).
    pub fn last(&self) -> &[u8] {
        &self.last
    }

    /// Iterate over `(first, last)` pairs row by row.
    pub fn rows(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.first.iter().copied().zip(self.last.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::forward::transform_with_table;
    use oxibwt_core::BwtConfig;

    #[test]
    fn test_rotation_table_rows() {
        let (transformed, table) = transform_with_table(b"GATTACA", &BwtConfig::DEFAULT).unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(table.extended(), b"GATTACA$");
        assert_eq!(table.last_column(), transformed);

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].rotation, b"GATTACA$");
        assert_eq!(rows[1].rotation, b"ATTACA$G");
        assert_eq!(rows[0].sorted, b"$GATTACA");
        assert_eq!(rows[7].sorted, b"TTACA$GA");
        assert_eq!(table.first_column(), b"$AAACGTT");
    }

    #[test]
    fn test_rotation_table_primary_index() {
        let (_, table) = transform_with_table(b"GATTACA", &BwtConfig::DEFAULT).unwrap();
        let primary = table.primary_index();
        assert_eq!(table.sorted(primary), b"GATTACA$");
        assert_eq!(table.last_column()[primary], b'$');
    }

    #[test]
    fn test_rotation_table_empty_input() {
        let (transformed, table) = transform_with_table(b"", &BwtConfig::DEFAULT).unwrap();
        assert_eq!(transformed, b"$");
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rotation, b"$");
        assert_eq!(rows[0].sorted, b"$");
    }

    #[test]
    fn test_rows_are_lazy_views() {
        let (_, table) = transform_with_table(b"banana", &BwtConfig::DEFAULT).unwrap();
        let third = table.rows().nth(2).unwrap();
        assert_eq!(third.offset, 2);
        assert_eq!(third.rotation, table.rotation(2));
        assert_eq!(third.sorted, table.sorted(2));
    }
}
