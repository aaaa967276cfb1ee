use std::fmt::{self, Display, Write};

/// Renders a bitset as eight rows of binary digits, most significant bit first
pub struct BinaryRows(pub u64);

impl Display for BinaryRows {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        visualize_to(self.0, f)
    }
}

/// Writes `bitset` as binary digits from bit 63 down to bit 0
///
/// A newline follows every bit whose index is a multiple of 8, which yields
/// eight lines of eight digits, and one extra newline closes the output
pub fn visualize_to<W: Write>(bitset: u64, writer: &mut W) -> fmt::Result {
    for index in (0..64).rev() {
        let mask = 1u64 << index;
        writer.write_char(if bitset & mask != 0 { '1' } else { '0' })?;
        if index % 8 == 0 {
            writer.write_char('\n')?;
        }
    }
    writer.write_char('\n')
}
