//! # Bitspack Core
//!
//! A decoder for BITS transmissions: hexadecimal-encoded, self-describing
//! binary messages carrying one nested expression packet.
//!
//! ## Modules
//!
//! - `constants`: Packet format field widths and limits
//! - `bits`: Cursor-advancing big-endian bit reads over the expanded input
//! - `types`: Core types (Packet, PacketBody, Op, Analysis)
//! - `parser`: Recursive-descent packet parsing
//! - `eval`: Version summation and expression evaluation

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bits;
pub mod constants;
pub mod error;
pub mod eval;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use bits::BitReader;
pub use error::DecodeError;
pub use eval::{evaluate, version_sum};
pub use parser::{analyze_transmission, decode_transmission, parse_packet};
pub use types::{Analysis, Op, Packet, PacketBody};

/// Result type alias for Bitspack operations
pub type Result<T> = core::result::Result<T, DecodeError>;
