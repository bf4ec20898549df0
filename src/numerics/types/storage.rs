// src/numerics/types/storage.rs
// Backing buffer for FixedMatrix: a fixed inline block for small shapes, a
// boxed slice for everything larger. The value size never depends on R x C.

/// Largest element count kept inline; 4x4 is the biggest transform shape.
pub const INLINE_CAPACITY: usize = 4 * 4;

/// Row-major element buffer of an `R x C` matrix.
///
/// Both variants hand out the same `R * C` element slice, so callers never
/// need to know which one they hold.
#[derive(Clone, Debug)]
pub enum Storage<const R: usize, const C: usize> {
    /// First `R * C` slots are live; the rest stay zero.
    Inline([f64; INLINE_CAPACITY]),
    Heap(Box<[f64]>),
}

impl<const R: usize, const C: usize> Storage<R, C> {
    /// Number of elements.
    pub const LEN: usize = R * C;

    /// Instantiation-time storage decision for this shape.
    pub const ON_HEAP: bool = Self::LEN > INLINE_CAPACITY;

    /// Zero-filled buffer of the variant selected by [`Self::ON_HEAP`].
    pub fn zeroed() -> Self {
        if Self::ON_HEAP {
            Storage::Heap(vec![0.0; Self::LEN].into_boxed_slice())
        } else {
            Storage::Inline([0.0; INLINE_CAPACITY])
        }
    }

    pub fn is_heap(&self) -> bool {
        matches!(self, Storage::Heap(_))
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            Storage::Inline(block) => &block[..Self::LEN],
            Storage::Heap(buf) => buf,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        match self {
            Storage::Inline(block) => &mut block[..Self::LEN],
            Storage::Heap(buf) => buf,
        }
    }
}
