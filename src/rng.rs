use rand::prelude::*;

/// Seedable RNG threaded through the search so decisions are reproducible.
#[repr(transparent)]
#[derive(Debug, Clone)]
pub struct RngState(pub SmallRng);

impl RngCore for RngState {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl RngState {
    #[inline]
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is given, otherwise seeded from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map(Self::from_seed_u64).unwrap_or_else(Self::from_entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RngState::from_seed_u64(42);
        let mut b = RngState::from_seed_u64(42);
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_clone_forks_state() {
        let mut a = RngState::from_seed_u64(7);
        a.next_u64();
        let mut b = a.clone();
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
