//! Fixed-size pagination over a filtered sequence.

/// Bounds of one page within a filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// 1-based page number after clamping.
    pub page: usize,
    /// ceil(len / size); zero when the sequence is empty.
    pub total_pages: usize,
    /// Half-open slice range into the sequence.
    pub start: usize,
    pub end: usize,
}

/// Compute the bounds for `requested` (1-based) over a sequence of `len`
/// items split into pages of `size`. Out-of-range requests clamp to
/// `[1, total_pages]`; they never wrap and never panic. An empty sequence
/// has zero pages and an empty slice at page 1.
pub fn page_bounds(len: usize, size: usize, requested: usize) -> PageBounds {
    let total_pages = len.div_ceil(size);
    let page = requested.clamp(1, total_pages.max(1));
    let start = ((page - 1) * size).min(len);
    let end = (start + size).min(len);
    PageBounds {
        page,
        total_pages,
        start,
        end,
    }
}
