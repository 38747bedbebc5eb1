//! # Subnet Mask Arithmetic
//!
//! Prefix-length operations over raw address octets.
//!
//! Buffers hold address bytes in network order and are treated as big-endian
//! bitstrings: a prefix length `bits` selects the leading network bits, the
//! remainder are host bits. When `bits` is not a multiple of 8, exactly one
//! boundary byte straddles the split; its top `bits % 8` bits belong to the
//! network portion.
//!
//! Buffers carry address octets only, never a port: 4 bytes for IPv4,
//! 16 for IPv6. The operations themselves work on any width.
//!
//! A prefix length wider than the buffer is a programmer error and panics;
//! callers validate prefixes at their own boundary first.

use std::cmp::Ordering;

/// Mask selecting the top `r` network bits of the boundary byte.
#[inline]
fn keep_top(r: u8) -> u8 {
    debug_assert!((1..=7).contains(&r));
    0xFF << (8 - r)
}

/// Split a prefix into full network bytes and leftover bits, validating range.
#[inline]
fn prefix_parts(buf_len: usize, bits: u8) -> (usize, u8) {
    let total = buf_len * 8;
    assert!(
        usize::from(bits) <= total,
        "prefix length {bits} out of range for a {total}-bit address"
    );
    (usize::from(bits / 8), bits % 8)
}

/// Compares the network portions of two equal-length address buffers.
///
/// Full network bytes are compared as unsigned values, most significant
/// first; when the prefix ends mid-byte, the boundary byte is compared
/// under the network-side mask. Host bits never influence the result, and
/// bytes past the boundary are not read at all.
///
/// ```rust
/// use std::cmp::Ordering;
/// use netaddr_core::core::mask::masked_cmp;
///
/// let net = [192, 168, 1, 0];
/// let host = [192, 168, 1, 200];
/// assert_eq!(masked_cmp(&host, &net, 24), Ordering::Equal);
/// assert_eq!(masked_cmp(&host, &net, 32), Ordering::Greater);
/// ```
///
/// # Panics
/// Panics if the buffers differ in length or `bits` exceeds their bit width.
pub fn masked_cmp(a: &[u8], b: &[u8], bits: u8) -> Ordering {
    assert_eq!(a.len(), b.len(), "masked_cmp requires equal-length buffers");
    let (full, r) = prefix_parts(a.len(), bits);

    match a[..full].cmp(&b[..full]) {
        Ordering::Equal if r > 0 => {
            let keep = keep_top(r);
            (a[full] & keep).cmp(&(b[full] & keep))
        }
        ordering => ordering,
    }
}

/// Zeroes the host portion of an address buffer in place.
///
/// Full network bytes are untouched, the boundary byte keeps only its
/// network bits, and every byte after it becomes zero. With `bits == 0` the
/// whole buffer is cleared; with `bits` equal to the buffer's bit width the
/// buffer is unchanged.
///
/// ```rust
/// use netaddr_core::core::mask::apply_mask;
///
/// let mut addr = [192, 168, 1, 200];
/// apply_mask(&mut addr, 24);
/// assert_eq!(addr, [192, 168, 1, 0]);
///
/// let mut addr = [192, 168, 1, 200];
/// apply_mask(&mut addr, 20);
/// assert_eq!(addr, [192, 168, 0, 0]);
/// ```
///
/// # Panics
/// Panics if `bits` exceeds the buffer's bit width.
pub fn apply_mask(buf: &mut [u8], bits: u8) {
    let (full, r) = prefix_parts(buf.len(), bits);

    let mut host = full;
    if r > 0 {
        buf[host] &= keep_top(r);
        host += 1;
    }
    for byte in &mut buf[host..] {
        *byte = 0;
    }
}

/// Copies the network portion of `src` into `dst`, zeroing the host portion.
///
/// The result equals `src` with [`apply_mask`] applied; the prior contents
/// of `dst` are irrelevant, and host bytes of `src` past the boundary are
/// not read.
///
/// ```rust
/// use netaddr_core::core::mask::masked_copy;
///
/// let src = [10, 1, 2, 3];
/// let mut dst = [0xAA; 4];
/// masked_copy(&mut dst, &src, 12);
/// assert_eq!(dst, [10, 0, 0, 0]);
/// ```
///
/// # Panics
/// Panics if the buffers differ in length or `bits` exceeds their bit width.
pub fn masked_copy(dst: &mut [u8], src: &[u8], bits: u8) {
    assert_eq!(
        dst.len(),
        src.len(),
        "masked_copy requires equal-length buffers"
    );
    let (full, r) = prefix_parts(dst.len(), bits);

    dst[..full].copy_from_slice(&src[..full]);
    let mut host = full;
    if r > 0 {
        dst[host] = src[host] & keep_top(r);
        host += 1;
    }
    for byte in &mut dst[host..] {
        *byte = 0;
    }
}

/// Reports whether every host bit of the buffer is zero.
///
/// True exactly when the buffer already names a network: the host side of
/// the boundary byte and all bytes after it are zero. Useful for validating
/// that a configured subnet address is the network address itself.
///
/// ```rust
/// use netaddr_core::core::mask::host_portion_is_zero;
///
/// assert!(host_portion_is_zero(&[192, 168, 1, 0], 24));
/// assert!(!host_portion_is_zero(&[192, 168, 1, 1], 24));
/// ```
///
/// # Panics
/// Panics if `bits` exceeds the buffer's bit width.
pub fn host_portion_is_zero(buf: &[u8], bits: u8) -> bool {
    let (full, r) = prefix_parts(buf.len(), bits);

    let mut host = full;
    if r > 0 {
        if buf[host] & (0xFF >> r) != 0 {
            return false;
        }
        host += 1;
    }
    buf[host..].iter().all(|&byte| byte == 0)
}
