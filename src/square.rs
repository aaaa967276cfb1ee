use crate::error::BitboardError;

/// Files in bit order: `h` is the lowest bit of each rank, `a` the highest
const FILES: [u8; 8] = *b"hgfedcba";

/// Ranks in bit order: rank `1` is the lowest byte of the bitboard
const RANKS: [u8; 8] = *b"12345678";

/// Resolves a coordinate such as `"e4"` to the bitboard with only that square set
pub fn bitboard_position(position: &str) -> Result<u64, BitboardError> {
    let (col, row) = lookup(position)?;
    Ok((1u64 << col) << (row * 8))
}

/// Returns the bit index a coordinate occupies, `0` for `h1` up to `63` for `a8`
pub fn square_index(position: &str) -> Result<u32, BitboardError> {
    let (col, row) = lookup(position)?;
    Ok(col + row * 8)
}

/// Returns the coordinate of a bit index
pub fn square_name(index: u32) -> Result<String, BitboardError> {
    if index >= 64 {
        return Err(BitboardError::IndexOutOfRange(index));
    }

    Ok(name_of(index as usize))
}

/// Returns an iterator over the coordinates of every set bit, lowest bit first
pub fn active_squares(bitboard: u64) -> impl Iterator<Item = String> {
    SetBits::new(bitboard).map(name_of)
}

fn name_of(index: usize) -> String {
    let file = FILES[index % 8] as char;
    let rank = RANKS[index / 8] as char;
    format!("{file}{rank}")
}

fn lookup(position: &str) -> Result<(u32, u32), BitboardError> {
    let invalid = || BitboardError::InvalidCoordinate(position.to_string());

    // Strict: anything but exactly two bytes is rejected, trailing characters included
    let &[file, rank] = position.as_bytes() else {
        return Err(invalid());
    };

    let col = FILES.iter().position(|&c| c == file).ok_or_else(invalid)?;
    let row = RANKS.iter().position(|&c| c == rank).ok_or_else(invalid)?;
    Ok((col as u32, row as u32))
}

/// Iterator over the indices of the set bits of a bitboard
struct SetBits {
    remaining: u64,
}

impl SetBits {
    fn new(remaining: u64) -> Self {
        Self { remaining }
    }
}

impl Iterator for SetBits {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let index = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.remaining.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for SetBits {}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_coordinates() -> Vec<(usize, usize, String)> {
        let mut coordinates = vec![];
        for (file_index, file) in "abcdefgh".chars().enumerate() {
            for (rank_index, rank) in "12345678".chars().enumerate() {
                coordinates.push((file_index, rank_index, format!("{file}{rank}")));
            }
        }
        coordinates
    }

    #[test]
    fn every_square_sets_exactly_one_bit() {
        for (file_index, rank_index, coordinate) in all_coordinates() {
            let bitboard = bitboard_position(&coordinate).unwrap();
            assert_eq!(bitboard.count_ones(), 1, "{coordinate}");

            let expected_index = (7 - file_index) + rank_index * 8;
            assert_eq!(bitboard.trailing_zeros() as usize, expected_index, "{coordinate}");
        }
    }

    #[test]
    fn corner_squares() {
        assert_eq!(bitboard_position("h1").unwrap(), 1);
        assert_eq!(bitboard_position("a1").unwrap(), 1 << 7);
        assert_eq!(bitboard_position("h8").unwrap(), 1 << 56);
        assert_eq!(bitboard_position("a8").unwrap(), 1 << 63);
        assert_eq!(bitboard_position("a8").unwrap() as i64, i64::MIN);
    }

    #[test]
    fn e4_matches_lookup_tables() {
        let col = FILES.iter().position(|&c| c == b'e').unwrap();
        let row = RANKS.iter().position(|&c| c == b'4').unwrap();
        assert_eq!((col, row), (3, 3));

        let oracle = (1u64 << col) << (row * 8);
        assert_eq!(bitboard_position("e4").unwrap(), oracle);
        assert_eq!(bitboard_position("e4").unwrap(), 134_217_728);
        assert_eq!(square_index("e4").unwrap(), 27);
    }

    #[test]
    fn unrecognized_characters_are_rejected() {
        for input in ["z9", "e9", "i4", "E4", "e0", "4e", "", "e", "e44", "é4"] {
            assert_eq!(
                bitboard_position(input),
                Err(BitboardError::InvalidCoordinate(input.to_string())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn name_inverts_index() {
        for (_, _, coordinate) in all_coordinates() {
            let index = square_index(&coordinate).unwrap();
            assert_eq!(square_name(index).unwrap(), coordinate);
        }
        assert_eq!(square_name(0).unwrap(), "h1");
        assert_eq!(square_name(63).unwrap(), "a8");
    }

    #[test]
    fn name_rejects_out_of_range_index() {
        assert_eq!(square_name(64), Err(BitboardError::IndexOutOfRange(64)));
        assert_eq!(square_name(u32::MAX), Err(BitboardError::IndexOutOfRange(u32::MAX)));
    }

    #[test]
    fn active_squares_in_bit_order() {
        assert_eq!(active_squares(0).count(), 0);

        let bitboard = bitboard_position("a8").unwrap()
            | bitboard_position("e4").unwrap()
            | bitboard_position("h1").unwrap();
        let squares: Vec<String> = active_squares(bitboard).collect();
        assert_eq!(squares, ["h1", "e4", "a8"]);
    }

    #[test]
    fn set_bits_reports_exact_size() {
        let bits = SetBits::new(0x8100_0000_0000_0081);
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.collect::<Vec<_>>(), [0, 7, 56, 63]);
        assert_eq!(SetBits::new(u64::MAX).count(), 64);
    }
}
