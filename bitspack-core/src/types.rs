//! Core types for decoded BITS packets

use crate::constants::LITERAL_TYPE_ID;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Combination rule of an operator packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// Sum of all operands (type ID 0)
    Sum,
    /// Product of all operands (type ID 1)
    Product,
    /// Minimum of all operands (type ID 2)
    Minimum,
    /// Maximum of all operands (type ID 3)
    Maximum,
    /// 1 if the first operand is greater than the second (type ID 5)
    GreaterThan,
    /// 1 if the first operand is less than the second (type ID 6)
    LessThan,
    /// 1 if both operands are equal (type ID 7)
    EqualTo,
}

impl Op {
    /// Map a wire type ID to an operator
    ///
    /// Returns `None` for the literal discriminant (4) and for values
    /// outside the 3-bit range.
    pub const fn from_type_id(type_id: u8) -> Option<Self> {
        match type_id {
            0 => Some(Op::Sum),
            1 => Some(Op::Product),
            2 => Some(Op::Minimum),
            3 => Some(Op::Maximum),
            5 => Some(Op::GreaterThan),
            6 => Some(Op::LessThan),
            7 => Some(Op::EqualTo),
            _ => None,
        }
    }

    /// The wire type ID of this operator
    pub const fn type_id(&self) -> u8 {
        match self {
            Op::Sum => 0,
            Op::Product => 1,
            Op::Minimum => 2,
            Op::Maximum => 3,
            Op::GreaterThan => 5,
            Op::LessThan => 6,
            Op::EqualTo => 7,
        }
    }

    /// Check if this operator compares exactly two operands
    pub const fn is_comparison(&self) -> bool {
        matches!(self, Op::GreaterThan | Op::LessThan | Op::EqualTo)
    }

    /// Short lowercase name, used in display output and error messages
    pub const fn name(&self) -> &'static str {
        match self {
            Op::Sum => "sum",
            Op::Product => "product",
            Op::Minimum => "minimum",
            Op::Maximum => "maximum",
            Op::GreaterThan => "greater-than",
            Op::LessThan => "less-than",
            Op::EqualTo => "equal-to",
        }
    }
}

impl core::fmt::Display for Op {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One node of a decoded transmission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Packet version (3 bits on the wire)
    pub version: u8,

    /// Literal value or operator body
    pub body: PacketBody,
}

/// The two packet shapes, discriminated by the wire type ID
///
/// A literal carries its decoded value and no children; an operator
/// carries its combination rule and the ordered sub-packets. The split
/// is structural so neither shape can hold the other's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PacketBody {
    /// Literal value packet (type ID 4)
    Literal(u64),

    /// Operator packet over one or more sub-packets
    Operator {
        /// The combination rule.
        op: Op,
        /// The ordered sub-packets, exclusively owned by this node.
        children: Vec<Packet>,
    },
}

impl Packet {
    /// The wire type ID of this packet
    pub fn type_id(&self) -> u8 {
        match &self.body {
            PacketBody::Literal(_) => LITERAL_TYPE_ID,
            PacketBody::Operator { op, .. } => op.type_id(),
        }
    }

    /// Check if this packet is a literal value
    pub fn is_literal(&self) -> bool {
        matches!(self.body, PacketBody::Literal(_))
    }

    /// The literal value, if this packet is a literal
    pub fn literal_value(&self) -> Option<u64> {
        match &self.body {
            PacketBody::Literal(value) => Some(*value),
            PacketBody::Operator { .. } => None,
        }
    }

    /// The sub-packets of this packet; empty for literals
    pub fn children(&self) -> &[Packet] {
        match &self.body {
            PacketBody::Literal(_) => &[],
            PacketBody::Operator { children, .. } => children,
        }
    }

    /// Total number of packets in this tree, including this one
    pub fn packet_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Packet::packet_count)
            .sum::<usize>()
    }

    /// Depth of this tree; 1 for a packet with no children
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Packet::depth)
            .max()
            .unwrap_or(0)
    }
}

/// The two results computed over one decoded transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Sum of the version field over every packet in the tree
    pub version_sum: u64,

    /// Value of the evaluated expression tree
    pub value: u64,
}
