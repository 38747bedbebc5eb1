#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the address model, mask arithmetic, and formatter
//! Covers boundary prefixes, family transitions, and precondition violations

use netaddr_core::core::address::{AddrFamily, EndpointAddr};
use netaddr_core::core::mask::{apply_mask, host_portion_is_zero, masked_cmp, masked_copy};
use netaddr_core::format;
use std::cmp::Ordering;

// ============================================================================
// MASK ENGINE EDGE CASES
// ============================================================================

#[test]
fn test_boundary_byte_keeps_most_significant_bits() {
    // /1 through /7 keep the TOP bits of the first byte
    let expected = [0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE];
    for (i, &want) in expected.iter().enumerate() {
        let bits = i as u8 + 1;
        let mut buf = [0xFF, 0xFF, 0xFF, 0xFF];
        apply_mask(&mut buf, bits);
        assert_eq!(buf, [want, 0, 0, 0], "wrong boundary mask at /{bits}");
    }
}

#[test]
fn test_masked_cmp_agrees_with_boundary_mask() {
    for bits in 1u8..8 {
        let all_ones = [0xFF, 0xFF, 0xFF, 0xFF];
        let mut network = all_ones;
        apply_mask(&mut network, bits);

        assert_eq!(
            masked_cmp(&all_ones, &network, bits),
            Ordering::Equal,
            "host bits leaked into comparison at /{bits}"
        );
    }
}

#[test]
fn test_masked_cmp_never_reads_past_boundary() {
    // Identical through the boundary byte, wildly different after it
    let a = [10, 20, 0xA5, 0x00];
    let b = [10, 20, 0xA7, 0xFF];

    // /22 keeps the top 6 bits of byte 2: 0xA5 and 0xA7 agree there
    assert_eq!(masked_cmp(&a, &b, 22), Ordering::Equal);
}

#[test]
fn test_single_host_bit_prefixes() {
    // /31 leaves exactly one host bit
    assert!(host_portion_is_zero(&[192, 168, 1, 0b1111_1110], 31));
    assert!(!host_portion_is_zero(&[192, 168, 1, 0b1111_1111], 31));

    let mut buf = [192, 168, 1, 0b1111_1111];
    apply_mask(&mut buf, 31);
    assert_eq!(buf, [192, 168, 1, 0b1111_1110]);
}

#[test]
fn test_prefix_multiples_of_eight_touch_whole_bytes() {
    for &bits in &[8u8, 16, 24] {
        let mut buf = [0xDE, 0xAD, 0xBE, 0xEF];
        apply_mask(&mut buf, bits);

        let full = usize::from(bits / 8);
        assert_eq!(&buf[..full], &[0xDE, 0xAD, 0xBE, 0xEF][..full]);
        assert!(buf[full..].iter().all(|&b| b == 0));
    }
}

#[test]
fn test_ipv6_extreme_prefixes() {
    let mut buf = [0xFF; 16];
    apply_mask(&mut buf, 0);
    assert_eq!(buf, [0; 16]);

    let mut buf = [0xFF; 16];
    apply_mask(&mut buf, 128);
    assert_eq!(buf, [0xFF; 16]);

    // /127: only the last bit is host
    assert!(!host_portion_is_zero(&[0xFF; 16], 127));
    let mut almost = [0xFF; 16];
    almost[15] = 0xFE;
    assert!(host_portion_is_zero(&almost, 127));
}

#[test]
fn test_masked_copy_overwrites_whole_destination() {
    // Every destination byte is written: network bytes copied, host zeroed
    let src = [0x12, 0x34, 0x56, 0x78];
    let mut dst = [0xFF; 4];
    masked_copy(&mut dst, &src, 0);
    assert_eq!(dst, [0, 0, 0, 0]);

    let mut dst = [0xFF; 4];
    masked_copy(&mut dst, &src, 32);
    assert_eq!(dst, src);
}

// ============================================================================
// MASK PRECONDITION VIOLATIONS
// ============================================================================

#[test]
#[should_panic(expected = "out of range")]
fn test_apply_mask_panics_past_buffer_width() {
    let mut buf = [0u8; 16];
    apply_mask(&mut buf, 129);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_host_portion_panics_past_buffer_width() {
    let _ = host_portion_is_zero(&[0u8; 4], 33);
}

#[test]
#[should_panic(expected = "equal-length")]
fn test_masked_copy_panics_on_width_mismatch() {
    // An IPv4 network copied over an IPv6 buffer is a caller bug
    let mut dst = [0u8; 4];
    masked_copy(&mut dst, &[0u8; 16], 8);
}

#[test]
#[should_panic(expected = "equal-length")]
fn test_masked_cmp_panics_on_width_mismatch() {
    let _ = masked_cmp(&[0u8; 16], &[0u8; 4], 8);
}

// ============================================================================
// ORDERING EDGE CASES
// ============================================================================

#[test]
fn test_sort_produces_family_then_bytes_then_port() {
    let unspec = EndpointAddr::Unspecified;
    let v4_low = EndpointAddr::V4 {
        addr: [1, 2, 3, 4],
        port: 80,
    };
    let v4_low_high_port = EndpointAddr::V4 {
        addr: [1, 2, 3, 4],
        port: 81,
    };
    let v4_high = EndpointAddr::V4 {
        addr: [1, 2, 3, 5],
        port: 80,
    };
    let v6_zero = EndpointAddr::V6 {
        addr: [0; 16],
        port: 0,
        scope_id: 0,
    };

    let mut list = [v4_high, v6_zero, v4_low_high_port, unspec, v4_low];
    list.sort();

    assert_eq!(list, [unspec, v4_low, v4_low_high_port, v4_high, v6_zero]);
}

#[test]
fn test_ports_compare_numerically() {
    // 256 stores as bytes [1, 0], 255 as [0, 255]; both views agree
    let low = EndpointAddr::V4 {
        addr: [9, 9, 9, 9],
        port: 255,
    };
    let high = EndpointAddr::V4 {
        addr: [9, 9, 9, 9],
        port: 256,
    };
    assert!(low < high);

    let min = EndpointAddr::V4 {
        addr: [9, 9, 9, 9],
        port: 0,
    };
    let max = EndpointAddr::V4 {
        addr: [9, 9, 9, 9],
        port: 65535,
    };
    assert!(min < low);
    assert!(high < max);
}

#[test]
fn test_mapped_v6_is_not_its_v4_twin_until_canonical() {
    let v4 = EndpointAddr::V4 {
        addr: [1, 2, 3, 4],
        port: 80,
    };
    let mapped = EndpointAddr::V6 {
        addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 1, 2, 3, 4],
        port: 80,
        scope_id: 0,
    };

    // Different families, so different endpoints and a fixed order
    assert_ne!(v4, mapped);
    assert!(v4 < mapped);

    // Normalization is what makes them meet
    assert_eq!(mapped.to_canonical(), v4);
}

// ============================================================================
// NORMALIZATION EDGE CASES
// ============================================================================

#[test]
fn test_canonical_demands_exact_mapped_prefix() {
    // ::ffff:0.0.0.0 is mapped; :: and ::00ff:ffff:... are not
    let zero_mapped = EndpointAddr::V6 {
        addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 0, 0, 0, 0],
        port: 1,
        scope_id: 0,
    };
    assert_eq!(
        zero_mapped.to_canonical(),
        EndpointAddr::V4 {
            addr: [0, 0, 0, 0],
            port: 1
        }
    );

    let all_zero = EndpointAddr::V6 {
        addr: [0; 16],
        port: 1,
        scope_id: 0,
    };
    assert_eq!(all_zero.to_canonical(), all_zero);

    let shifted = EndpointAddr::V6 {
        addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 0, 1, 2, 3, 4],
        port: 1,
        scope_id: 0,
    };
    assert_eq!(shifted.to_canonical(), shifted);
}

#[test]
fn test_canonical_drops_scope_with_the_v6_form() {
    let mapped = EndpointAddr::V6 {
        addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 10, 0, 0, 1],
        port: 655,
        scope_id: 4,
    };
    let canonical = mapped.to_canonical();

    assert_eq!(canonical.family(), AddrFamily::V4);
    assert_eq!(canonical.scope_id(), None);
    assert_eq!(canonical.port(), Some(655));
}

// ============================================================================
// FORMATTER EDGE CASES
// ============================================================================

#[test]
fn test_describe_numeric_forms() {
    let v4 = EndpointAddr::V4 {
        addr: [192, 168, 1, 9],
        port: 655,
    };
    assert_eq!(format::describe_numeric(&v4), "192.168.1.9 port 655");

    let mut octets = [0u8; 16];
    octets[0] = 0x20;
    octets[1] = 0x01;
    octets[2] = 0x0D;
    octets[3] = 0xB8;
    octets[15] = 1;
    let v6 = EndpointAddr::V6 {
        addr: octets,
        port: 443,
        scope_id: 0,
    };
    assert_eq!(format::describe_numeric(&v6), "2001:db8::1 port 443");

    assert_eq!(
        format::describe_numeric(&EndpointAddr::Unspecified),
        "unknown port unknown"
    );
    assert_eq!(format::UNKNOWN, "unknown");
}

#[test]
fn test_numeric_parts_have_no_brackets_or_zone() {
    let v6 = EndpointAddr::V6 {
        addr: [0xFE, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9],
        port: 22,
        scope_id: 3,
    };
    let (host, service) = format::numeric_parts(&v6);

    assert_eq!(host, "fe80::9");
    assert_eq!(service, "22");
    assert!(!host.contains('['));
    assert!(!host.contains('%'));
}

#[test]
#[should_panic(expected = "unspecified address")]
fn test_numeric_parts_panics_on_unspecified() {
    let _ = format::numeric_parts(&EndpointAddr::Unspecified);
}

#[test]
fn test_strip_zone_variants() {
    assert_eq!(format::strip_zone("fe80::1%eth0"), "fe80::1");
    assert_eq!(format::strip_zone("fe80::1%25eth0"), "fe80::1");
    assert_eq!(format::strip_zone("::1"), "::1");
    assert_eq!(format::strip_zone(""), "");
}
