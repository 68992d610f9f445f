use super::*;

/// Generation strategy that scatters pairs uniformly: the cells are shuffled and consumed two at a
/// time, each consecutive couple receiving one freshly drawn symbol.
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
    fn generate(self, size: BoardSize, pool: &mut SymbolPool) -> Result<Solution> {
        use rand::prelude::*;

        let pairs = size.pair_count();
        pool.ensure_available(pairs)?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut positions: Vec<CellCount> = (0..size.total_cells()).collect();
        positions.shuffle(&mut rng);

        let side = usize::from(size.get());
        let mut symbols: Array2<Symbol> = Array2::default((side, side));
        for couple in positions.chunks_exact(2) {
            let symbol = pool.draw(&mut rng)?;
            let first = from_linear(couple[0], size.get());
            let second = from_linear(couple[1], size.get());
            log::trace!("Placing {} at {:?} and {:?}", symbol, first, second);
            symbols[first.to_nd_index()] = symbol.clone();
            symbols[second.to_nd_index()] = symbol;
        }

        log::debug!(
            "Generated {} board with {} pairs from seed {}",
            size,
            pairs,
            self.seed
        );
        Solution::new(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(count: usize) -> SymbolPool {
        (0..count)
            .map(|i| Symbol::new(alloc::format!("s{i}")))
            .collect()
    }

    #[test]
    fn generated_board_pairs_every_cell() {
        let size = BoardSize::new(6).unwrap();
        let mut pool = pool(40);

        let solution = RandomBoardGenerator::new(3).generate(size, &mut pool).unwrap();

        assert_eq!(solution.pairs().len(), 18);
        assert_eq!(pool.len(), 40 - 18);
    }

    #[test]
    fn same_seed_same_board() {
        let size = BoardSize::new(4).unwrap();

        let first = RandomBoardGenerator::new(11).generate(size, &mut pool(8)).unwrap();
        let second = RandomBoardGenerator::new(11).generate(size, &mut pool(8)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn exact_pool_is_fully_consumed() {
        let size = BoardSize::new(10).unwrap();
        let mut pool = pool(50);

        RandomBoardGenerator::new(0).generate(size, &mut pool).unwrap();

        assert!(pool.is_empty());
    }

    #[test]
    fn short_pool_fails_without_drawing() {
        let size = BoardSize::new(8).unwrap();
        let mut pool = pool(31);

        let result = RandomBoardGenerator::new(0).generate(size, &mut pool);

        assert_eq!(
            result,
            Err(GameError::InsufficientSymbols {
                needed: 32,
                available: 31
            })
        );
        assert_eq!(pool.len(), 31);
    }
}
