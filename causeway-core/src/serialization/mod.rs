//! Wire serialization primitives shared across the workspace.

mod compact_size;

pub use compact_size::{
    read_compact_size, read_var_bytes, write_compact_size, write_var_bytes, write_var_str,
    MAX_VEC_SIZE,
};
