//! Memory-address gutter shown beside each grid row

use rand::Rng;

/// Monotonic fake memory address counter
///
/// Starts somewhere in `0x0C00..0xFC00` and advances by 1 to 6 per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexCounter {
    current: u32,
}

impl HexCounter {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            current: rng.random_range(0..0xF000) + 0x0C00,
        }
    }

    #[must_use]
    pub const fn starting_at(current: u32) -> Self {
        Self { current }
    }

    /// Advance to the next row's address and return it
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        self.current += rng.random_range(1..=6);
        self.current
    }

    /// Addresses for `rows` consecutive rows
    pub fn take_rows<R: Rng + ?Sized>(&mut self, rows: usize, rng: &mut R) -> Vec<u32> {
        (0..rows).map(|_| self.advance(rng)).collect()
    }
}

/// Render an address the way the terminal shows it, e.g. `0xF4A3`
#[must_use]
pub fn format_address(address: u32) -> String {
    format!("0x{address:04X}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn addresses_strictly_increase_in_small_steps() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counter = HexCounter::new(&mut rng);
        let addresses = counter.take_rows(34, &mut rng);

        assert_eq!(addresses.len(), 34);
        for pair in addresses.windows(2) {
            let step = pair[1] - pair[0];
            assert!((1..=6).contains(&step), "step {step} out of range");
        }
    }

    #[test]
    fn start_is_in_range() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut counter = HexCounter::new(&mut rng);
            let first = counter.advance(&mut rng);
            assert!((0x0C01..=0xFC05).contains(&first));
        }
    }

    #[test]
    fn formats_as_upper_hex() {
        assert_eq!(format_address(0xf4a3), "0xF4A3");
        assert_eq!(format_address(0x0c01), "0x0C01");
        assert_eq!(format_address(HexCounter::starting_at(0xABCD).current), "0xABCD");
    }
}
