use std::{fmt::Display, ops::AddAssign};

/// Visit count and accumulated reward of a tree node.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeStats {
    pub q: f64,
    pub n: u32,
}

impl Display for NodeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}/{}", self.q, self.n))
    }
}

impl NodeStats {
    #[inline]
    pub fn new(q: f64, n: u32) -> Self {
        Self { q, n }
    }

    /// Mean reward per visit, 0 for an unvisited node.
    #[inline]
    pub fn mean(self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.q / (self.n as f64)
        }
    }

    /// One backpropagation pass.
    #[inline]
    pub fn record(&mut self, reward: f64) {
        self.n += 1;
        self.q += reward;
    }
}

impl AddAssign for NodeStats {
    fn add_assign(&mut self, rhs: Self) {
        self.q += rhs.q;
        self.n += rhs.n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unvisited_mean_is_zero() {
        assert_eq!(0.0, NodeStats::default().mean());
    }

    proptest! {
        #[test]
        fn test_record_counts_and_sums(rewards in proptest::collection::vec(0u32..=5, 1..64)) {
            let mut s = NodeStats::default();
            for &r in &rewards {
                s.record(r as f64);
            }
            prop_assert_eq!(rewards.len() as u32, s.n);
            prop_assert_eq!(rewards.iter().sum::<u32>() as f64, s.q);
            prop_assert!((0.0..=5.0).contains(&s.mean()));
        }

        #[test]
        fn test_add_assign_matches_record(a in 0u32..=5, b in 0u32..=5) {
            let (mut x, mut y) = (NodeStats::default(), NodeStats::default());
            x.record(a as f64);
            y.record(b as f64);
            let mut z = NodeStats::default();
            z.record(a as f64);
            z.record(b as f64);
            x += y;
            prop_assert_eq!(z, x);
        }
    }
}
