//! Small, independent utility modules: case conversion, local-time
//! formatting, hex digests, random nonces, float rounding, key-ordered map
//! views, and a do-once guarded map.

pub mod case;
pub mod datetime;
pub mod digest;
pub mod nonce;
pub mod once_map;
pub mod round;
pub mod sort;

pub use once_map::OnceMap;
