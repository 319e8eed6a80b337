//! Error types for BITS transmission decoding

use crate::types::Op;

/// Errors that can occur while decoding or evaluating a transmission
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input character outside the hexadecimal alphabet
    #[cfg_attr(feature = "std", error("Invalid hex digit {ch:?} at input offset {offset}"))]
    BadHexDigit {
        /// The offending character.
        ch: char,
        /// Its character offset in the trimmed input.
        offset: usize,
    },

    /// A read was requested past the end of the bit stream
    #[cfg_attr(
        feature = "std",
        error("Out of bits: read of {requested} bits with only {remaining} remaining")
    )]
    OutOfBits {
        /// The number of bits requested.
        requested: usize,
        /// The number of bits actually remaining.
        remaining: usize,
    },

    /// A single read wider than the 64-bit accumulator
    #[cfg_attr(feature = "std", error("Read of {0} bits exceeds the 64-bit accumulator"))]
    ReadTooWide(u32),

    /// Literal value spans more groups than fit in 64 bits
    #[cfg_attr(
        feature = "std",
        error("Literal value of {groups} groups exceeds the 64-bit accumulator")
    )]
    LiteralTooLong {
        /// The number of 5-bit groups encountered so far.
        groups: usize,
    },

    /// Type ID outside the 3-bit packet format
    #[cfg_attr(feature = "std", error("Unknown packet type ID: {0}"))]
    UnknownTypeId(u8),

    /// Sub-packets consumed more bits than their declared region
    #[cfg_attr(
        feature = "std",
        error("Sub-packets consumed {consumed} bits of a {declared}-bit region")
    )]
    SubpacketOverrun {
        /// The declared total sub-packet bit length.
        declared: usize,
        /// The bits actually consumed by the parsed sub-packets.
        consumed: usize,
    },

    /// Comparison operator with an operand count other than two
    #[cfg_attr(
        feature = "std",
        error("Operator {op} requires exactly 2 operands, got {actual}")
    )]
    BadOperandCount {
        /// The comparison operator.
        op: Op,
        /// The operand count actually present.
        actual: usize,
    },

    /// Operator that needs at least one operand has none
    #[cfg_attr(feature = "std", error("Operator {0} has no operands"))]
    NoOperands(Op),

    /// Expression value does not fit in 64 bits
    #[cfg_attr(feature = "std", error("Expression value exceeds the 64-bit range"))]
    ValueOverflow,
}
