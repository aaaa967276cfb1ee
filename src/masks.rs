use crate::error::BitboardError;

/// Occupancy of a piece kind or a side in the standard starting position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartingMask {
    Kings,
    Queens,
    Bishops,
    Knights,
    Rooks,
    Pawns,
    White,
    Black,
}

impl StartingMask {
    /// Returns the bitboard of this mask
    pub const fn bits(self) -> u64 {
        match self {
            StartingMask::Kings => 0x0800_0000_0000_0008,
            StartingMask::Queens => 0x1000_0000_0000_0010,
            StartingMask::Bishops => 0x2400_0000_0000_0024,
            StartingMask::Knights => 0x4200_0000_0000_0042,
            StartingMask::Rooks => 0x8100_0000_0000_0081,
            StartingMask::Pawns => 0x00FF_0000_0000_FF00,
            StartingMask::White => 0x0000_0000_0000_FFFF,
            StartingMask::Black => 0xFFFF_0000_0000_0000,
        }
    }

    /// Resolves a piece letter (`K`, `Q`, `B`, `N`, `R`, `P`) or a side (`white`, `black`)
    pub fn from_symbol(symbol: &str) -> Result<Self, BitboardError> {
        match symbol {
            "K" => Ok(StartingMask::Kings),
            "Q" => Ok(StartingMask::Queens),
            "B" => Ok(StartingMask::Bishops),
            "N" => Ok(StartingMask::Knights),
            "R" => Ok(StartingMask::Rooks),
            "P" => Ok(StartingMask::Pawns),
            "white" => Ok(StartingMask::White),
            "black" => Ok(StartingMask::Black),
            _ => Err(BitboardError::UnknownMask(symbol.to_string())),
        }
    }
}
