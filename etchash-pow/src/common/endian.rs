/// Host byte order detection and word/byte buffer conversion
///
/// Dataset and mix buffers are word sequences laid out in the host's native
/// byte order, so serialization here follows the host rather than a fixed
/// wire order.

use byteorder::{ByteOrder, NativeEndian};

use crate::algorithms::ethash::keccak::digest256;

/// Host byte order, fixed at compile time.
pub const HOST_IS_LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

/// Check whether the host stores words least significant byte first
#[inline]
pub fn is_little_endian() -> bool {
    0x0102_0304u32.to_ne_bytes()[0] == 0x04
}

/// Serialize words into a byte buffer in host byte order.
///
/// The output is always exactly `4 * words.len()` bytes.
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    let mut buf = vec![0u8; words.len() * 4];
    NativeEndian::write_u32_into(words, &mut buf);
    buf
}

/// Read host byte order words back out of a byte buffer.
///
/// Only whole words are read; trailing bytes that do not fill a word are
/// ignored.
pub fn bytes_to_words(bytes: &[u8]) -> Vec<u32> {
    let whole = bytes.len() / 4 * 4;
    let mut words = vec![0u32; whole / 4];
    NativeEndian::read_u32_into(&bytes[..whole], &mut words);
    words
}

/// Keccak-256 of the host-order serialization of `words`, as `0x` hex.
pub fn words_to_hex_digest(words: &[u32]) -> String {
    digest256(&words_to_bytes(words)).to_prefixed_hex()
}

/// Reverse the byte order of every 4-byte word in place.
pub fn swap_word_bytes(buffer: &mut [u8]) {
    for word in buffer.chunks_exact_mut(4) {
        word.reverse();
    }
}
