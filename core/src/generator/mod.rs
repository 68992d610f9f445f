use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, size: BoardSize, pool: &mut SymbolPool) -> Result<Solution>;
}
