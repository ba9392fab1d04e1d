// Console tracing switches. Flip a flag to get the matching trace in the
// browser console; everything else stays silent.

pub const DEBUG_ROUTING: bool = false; // Route changes and page switches
pub const DEBUG_FILTERS: bool = false; // Filter recomputation on the list screens
pub const DEBUG_CONTACT: bool = false; // Contact form transitions

macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            zoon::println!($($arg)*);
        }
    };
}
