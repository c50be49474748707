//! Storage backends for the DP cache.

/// Storage for computed values, keyed by index.
pub trait Backend<I, K> {
    /// The cached value for `index`, if it has been computed.
    fn get(&self, index: &I) -> Option<&K>;

    /// Store the value for `index`. Indices outside a fixed-size backend's
    /// bounds panic.
    fn insert(&mut self, index: I, value: K);
}

/// A Vec-based backend for dense `usize` indices starting at 0.
///
/// The Vec grows on insert to fit the index.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn insert(&mut self, index: usize, value: K) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index] = Some(value);
    }
}

/// A row-major 2D backend for `(row, col)` indices with fixed dimensions.
#[derive(Debug)]
pub struct Vec2DBackend<K> {
    rows: usize,
    cols: usize,
    data: Vec<Option<K>>,
}

impl<K> Vec2DBackend<K> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: (0..rows * cols).map(|_| None).collect(),
        }
    }

    fn offset(&self, (row, col): (usize, usize)) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }
}

impl<K> Backend<(usize, usize), K> for Vec2DBackend<K> {
    fn get(&self, index: &(usize, usize)) -> Option<&K> {
        self.data.get(self.offset(*index)?)?.as_ref()
    }

    fn insert(&mut self, index: (usize, usize), value: K) {
        let offset = self.offset(index).unwrap_or_else(|| {
            panic!(
                "index {:?} outside {}x{} backend",
                index, self.rows, self.cols
            )
        });
        self.data[offset] = Some(value);
    }
}
