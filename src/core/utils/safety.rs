//! Zero-Cost Safety Macros
//!
//! The grids are indexed once per crossed cell per particle per tick, so the
//! cell lookup is the hottest load in the engine.
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use erosim_engine::fast;
//!
//! let idx = 2;
//!
//! let masses = vec![5i32, 5, 0, -1, 5];
//! // Read: fast!(slice, [index])
//! let val = *fast!(masses, [idx]);
//! assert_eq!(val, 0);
//!
//! let mut counts = vec![0u32; 5];
//! // Write: fast!(slice, [index] = value)
//! fast!(counts, [idx] = 7);
//! assert_eq!(counts[idx], 7);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
///
/// Callers must guarantee the index is in range in release builds; inside the
/// engine every use sits behind an `is_on_grid` check.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fast_read() {
        let arr = vec![1, 2, 3, 4, 5];
        let val = *fast!(arr, [2]);
        assert_eq!(val, 3);
    }

    #[test]
    fn test_fast_write() {
        let mut arr = vec![1, 2, 3, 4, 5];
        fast!(arr, [2] = 100);
        assert_eq!(arr[2], 100);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_fast_bounds_check_debug() {
        let arr = vec![1, 2, 3];
        let _ = *fast!(arr, [10]); // Should panic in debug
    }
}
