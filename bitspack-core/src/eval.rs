//! Tree walks over decoded packets
//!
//! Both walks take the tree by reference and leave it untouched; the
//! two results of a transmission are computed independently over the
//! same immutable tree.

use crate::error::DecodeError;
use crate::types::{Op, Packet, PacketBody};

/// Sum the version field over every packet in the tree
///
/// The traversal order is irrelevant to the result; every node is
/// counted exactly once.
pub fn version_sum(packet: &Packet) -> u64 {
    let mut sum = u64::from(packet.version);
    for child in packet.children() {
        sum += version_sum(child);
    }
    sum
}

/// Evaluate the expression tree to a single value
///
/// Children are evaluated before their parent combines them. Fails
/// with [`DecodeError::BadOperandCount`] for a comparison operator
/// without exactly two operands, [`DecodeError::NoOperands`] for a
/// minimum or maximum over nothing, and [`DecodeError::ValueOverflow`]
/// when a sum or product leaves the 64-bit range.
pub fn evaluate(packet: &Packet) -> Result<u64, DecodeError> {
    match &packet.body {
        PacketBody::Literal(value) => Ok(*value),
        PacketBody::Operator { op, children } => apply(*op, children),
    }
}

fn apply(op: Op, children: &[Packet]) -> Result<u64, DecodeError> {
    match op {
        Op::Sum => fold_checked(children, 0, u64::checked_add),
        Op::Product => fold_checked(children, 1, u64::checked_mul),
        Op::Minimum => extremum(op, children, u64::min),
        Op::Maximum => extremum(op, children, u64::max),
        Op::GreaterThan => comparison(op, children, |lhs, rhs| lhs > rhs),
        Op::LessThan => comparison(op, children, |lhs, rhs| lhs < rhs),
        Op::EqualTo => comparison(op, children, |lhs, rhs| lhs == rhs),
    }
}

fn fold_checked(
    children: &[Packet],
    identity: u64,
    combine: fn(u64, u64) -> Option<u64>,
) -> Result<u64, DecodeError> {
    children.iter().try_fold(identity, |acc, child| {
        combine(acc, evaluate(child)?).ok_or(DecodeError::ValueOverflow)
    })
}

fn extremum(
    op: Op,
    children: &[Packet],
    pick: fn(u64, u64) -> u64,
) -> Result<u64, DecodeError> {
    let mut best = None;
    for child in children {
        let value = evaluate(child)?;
        best = Some(match best {
            Some(current) => pick(current, value),
            None => value,
        });
    }
    best.ok_or(DecodeError::NoOperands(op))
}

fn comparison(
    op: Op,
    children: &[Packet],
    holds: fn(u64, u64) -> bool,
) -> Result<u64, DecodeError> {
    match children {
        [lhs, rhs] => Ok(u64::from(holds(evaluate(lhs)?, evaluate(rhs)?))),
        _ => Err(DecodeError::BadOperandCount {
            op,
            actual: children.len(),
        }),
    }
}
