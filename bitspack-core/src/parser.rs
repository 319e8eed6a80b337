//! Recursive-descent parsing of BITS transmissions
//!
//! A transmission holds a single packet at its outermost layer. Every
//! packet starts with a 3-bit version and a 3-bit type ID; type ID 4
//! carries a literal value in continuation-prefixed 4-bit groups, every
//! other type ID carries an operator over recursively parsed
//! sub-packets. The reader is passed by mutable reference into each
//! recursive call, so parsing is re-entrant and holds no global state.

use crate::bits::BitReader;
use crate::constants::{
    LengthMode, LENGTH_TYPE_BITS, LITERAL_GROUP_BITS, LITERAL_TYPE_ID, MAX_LITERAL_GROUPS,
    TYPE_ID_BITS, VERSION_BITS,
};
use crate::error::DecodeError;
use crate::eval::{evaluate, version_sum};
use crate::types::{Analysis, Op, Packet, PacketBody};
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// Decode the single outermost packet of a hexadecimal transmission
///
/// Trailing padding bits introduced by the hex expansion are left
/// unread; they are not part of the transmission and are not validated.
pub fn decode_transmission(hex: &str) -> Result<Packet, DecodeError> {
    let mut reader = BitReader::from_hex(hex)?;

    #[cfg(feature = "logging")]
    debug!("Decoding transmission of {} bits", reader.len());

    let packet = parse_packet(&mut reader)?;

    #[cfg(feature = "logging")]
    debug!(
        "Outermost packet consumed {} of {} bits",
        reader.position(),
        reader.len()
    );

    Ok(packet)
}

/// Decode a transmission and compute both results over the tree
///
/// The tree is parsed once; the version sum and the evaluated value are
/// then two independent walks over it.
pub fn analyze_transmission(hex: &str) -> Result<Analysis, DecodeError> {
    let packet = decode_transmission(hex)?;
    Ok(Analysis {
        version_sum: version_sum(&packet),
        value: evaluate(&packet)?,
    })
}

/// Parse exactly one packet, header and body, from the reader
///
/// The cursor is left immediately after the packet, so the sub-packets
/// of a bounded region can be parsed back to back.
pub fn parse_packet(reader: &mut BitReader) -> Result<Packet, DecodeError> {
    let version = reader.read(VERSION_BITS)? as u8;
    let type_id = reader.read(TYPE_ID_BITS)? as u8;

    #[cfg(feature = "logging")]
    trace!(
        "Packet header at bit {}: version={}, type_id={}",
        reader.position(),
        version,
        type_id
    );

    let body = if type_id == LITERAL_TYPE_ID {
        PacketBody::Literal(parse_literal(reader)?)
    } else {
        let op = Op::from_type_id(type_id).ok_or(DecodeError::UnknownTypeId(type_id))?;
        let children = parse_children(reader)?;
        PacketBody::Operator { op, children }
    };

    Ok(Packet { version, body })
}

/// Accumulate the continuation-prefixed groups of a literal value
///
/// Groups arrive most significant first; the flag bit of the final
/// group is 0.
fn parse_literal(reader: &mut BitReader) -> Result<u64, DecodeError> {
    let mut value = 0u64;
    let mut groups = 0usize;

    loop {
        let more = reader.read(1)? == 1;
        let group = reader.read(LITERAL_GROUP_BITS)?;

        groups += 1;
        if groups > MAX_LITERAL_GROUPS {
            return Err(DecodeError::LiteralTooLong { groups });
        }
        value = value << LITERAL_GROUP_BITS | group;

        if !more {
            break;
        }
    }

    Ok(value)
}

/// Parse an operator body: length framing, then the sub-packets
fn parse_children(reader: &mut BitReader) -> Result<Vec<Packet>, DecodeError> {
    let mode = LengthMode::from_bit(reader.read(LENGTH_TYPE_BITS)?);
    let length = reader.read(mode.field_width())? as usize;

    #[cfg(feature = "logging")]
    trace!("Operator framing {:?}: {}", mode, length);

    match mode {
        LengthMode::TotalBits => {
            let start = reader.position();
            let mut children = Vec::new();
            while reader.position() - start < length {
                children.push(parse_packet(reader)?);
            }
            // The loop can only stop at or past the boundary; landing
            // past it means a child straddled the declared region.
            let consumed = reader.position() - start;
            if consumed != length {
                return Err(DecodeError::SubpacketOverrun {
                    declared: length,
                    consumed,
                });
            }
            Ok(children)
        }
        LengthMode::PacketCount => {
            let mut children = Vec::with_capacity(length);
            for _ in 0..length {
                children.push(parse_packet(reader)?);
            }
            Ok(children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    /// Pack a string of '0'/'1' characters into hex, zero-padded on the
    /// right to a whole number of digits.
    fn hex_from_bits(bits: &str) -> String {
        let mut padded = String::from(bits);
        while padded.len() % 4 != 0 {
            padded.push('0');
        }
        padded
            .as_bytes()
            .chunks(4)
            .map(|chunk| {
                let nibble = chunk.iter().fold(0u32, |acc, b| acc << 1 | u32::from(b - b'0'));
                char::from_digit(nibble, 16).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_literal_packet() {
        let packet = decode_transmission("D2FE28").unwrap();
        assert_eq!(packet.version, 6);
        assert_eq!(packet.type_id(), 4);
        assert_eq!(packet.literal_value(), Some(2021));
        assert!(packet.children().is_empty());
    }

    #[test]
    fn test_cursor_stops_after_packet() {
        let mut reader = BitReader::from_hex("D2FE28").unwrap();
        let packet = parse_packet(&mut reader).unwrap();
        assert!(packet.is_literal());
        // 6 header bits + three 5-bit groups; the 3 padding bits stay unread
        assert_eq!(reader.position(), 21);
        assert_eq!(reader.remaining(), 3);
    }

    #[test]
    fn test_bit_framed_operator() {
        let packet = decode_transmission("38006F45291200").unwrap();
        assert_eq!(packet.version, 1);
        assert_eq!(packet.type_id(), 6);

        let children = packet.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].literal_value(), Some(10));
        assert_eq!(children[1].literal_value(), Some(20));
    }

    #[test]
    fn test_count_framed_operator() {
        let packet = decode_transmission("EE00D40C823060").unwrap();
        assert_eq!(packet.version, 7);
        assert_eq!(packet.type_id(), 3);

        let children = packet.children();
        assert_eq!(children.len(), 3);
        for (child, expected) in children.iter().zip([1, 2, 3]) {
            assert_eq!(child.literal_value(), Some(expected));
        }
    }

    #[test]
    fn test_subpacket_overrun() {
        // Sum operator declaring a 10-bit region whose single literal
        // child occupies 11 bits.
        let hex = hex_from_bits(concat!(
            "000", "000",          // version, type
            "0",                   // length type 0
            "000000000001010",     // 10 bits of sub-packets
            "000", "100", "00001", // literal child, 11 bits
        ));
        assert_eq!(
            decode_transmission(&hex).unwrap_err(),
            DecodeError::SubpacketOverrun {
                declared: 10,
                consumed: 11
            }
        );
    }

    #[test]
    fn test_truncated_transmission() {
        // Literal cut off in the middle of its groups
        let err = decode_transmission("D2FE").unwrap_err();
        assert_eq!(
            err,
            DecodeError::OutOfBits {
                requested: 1,
                remaining: 0
            }
        );
    }

    #[test]
    fn test_empty_transmission() {
        assert_eq!(
            decode_transmission("").unwrap_err(),
            DecodeError::OutOfBits {
                requested: 3,
                remaining: 0
            }
        );
    }

    #[test]
    fn test_literal_group_limits() {
        let mut bits = String::from("000100");
        for _ in 0..15 {
            bits.push_str("10000");
        }
        bits.push_str("00001");
        // 16 groups fill the accumulator exactly
        let packet = decode_transmission(&hex_from_bits(&bits)).unwrap();
        assert_eq!(packet.literal_value(), Some(1));

        let mut bits = String::from("000100");
        for _ in 0..16 {
            bits.push_str("10000");
        }
        bits.push_str("00000");
        assert_eq!(
            decode_transmission(&hex_from_bits(&bits)).unwrap_err(),
            DecodeError::LiteralTooLong { groups: 17 }
        );
    }

    #[test]
    fn test_analyze_runs_both_walks() {
        let analysis = analyze_transmission("C200B40A82").unwrap();
        assert_eq!(analysis.value, 3);
        assert_eq!(analysis.version_sum, 14);
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let first = decode_transmission("9C0141080250320F1802104A08").unwrap();
        let second = decode_transmission("9C0141080250320F1802104A08").unwrap();
        assert_eq!(first, second);
        assert_eq!(evaluate(&first).unwrap(), evaluate(&second).unwrap());
    }
}
