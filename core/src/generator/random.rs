use super::*;

/// Generation strategy that lays out a uniformly shuffled tile pool, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, table: &FrequencyTable) -> Board {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut pool = table.expand();
        // Fisher-Yates, every permutation equally likely
        pool.shuffle(&mut rng);
        Board::from_row_major(pool)
    }
}
