//! # Allocation Counter
//!
//! The standard library keeps no allocation statistics, so the `METRICS` output of
//! the timing helper reads them from [`CountingAllocator`]. A binary opts in by
//! registering it as its global allocator:
//!
//! ```rust,ignore
//! #[global_allocator]
//! static ALLOC: boillog::alloc::CountingAllocator = boillog::alloc::CountingAllocator;
//! ```
//!
//! Without that registration [`total_allocated`] stays at zero and memory deltas
//! report `0`.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    sync::atomic::{AtomicU64, Ordering},
};

static TOTAL_ALLOCATED: AtomicU64 = AtomicU64::new(0);

/// `System` allocator that tallies every byte it hands out. The tally only grows.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            TOTAL_ALLOCATED.fetch_add(layout.size() as u64, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            TOTAL_ALLOCATED.fetch_add(layout.size() as u64, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        // Growth counts as fresh allocation; shrinking is free.
        if !new_ptr.is_null() && new_size > layout.size() {
            TOTAL_ALLOCATED.fetch_add((new_size - layout.size()) as u64, Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Cumulative bytes allocated through [`CountingAllocator`] since process start.
pub fn total_allocated() -> u64 {
    TOTAL_ALLOCATED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_allocation_is_counted() {
        let layout = Layout::from_size_align(4096, 8).unwrap();
        let before = total_allocated();
        unsafe {
            let ptr = CountingAllocator.alloc(layout);
            assert!(!ptr.is_null());
            CountingAllocator.dealloc(ptr, layout);
        }
        assert!(total_allocated() - before >= 4096);
    }

    #[test]
    fn test_realloc_counts_growth_only() {
        let layout = Layout::from_size_align(64, 8).unwrap();
        unsafe {
            let ptr = CountingAllocator.alloc(layout);
            let before = total_allocated();
            let grown = CountingAllocator.realloc(ptr, layout, 256);
            assert!(!grown.is_null());
            assert!(total_allocated() - before >= 192);

            let grown_layout = Layout::from_size_align(256, 8).unwrap();
            let shrunk = CountingAllocator.realloc(grown, grown_layout, 32);
            assert!(!shrunk.is_null());
            CountingAllocator.dealloc(shrunk, Layout::from_size_align(32, 8).unwrap());
        }
    }
}
