use sparse_life::{patterns, Density, NiceInt, Region, SparseLifeEngine, Viewport};
use std::time::Instant;
use tracing::info;

const SEED: u64 = 42;
const SIDE: u32 = 512;
const GENERATIONS: u64 = 200;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sparse_life=info".parse()?),
        )
        .init();

    let density = Density::new(0.3)?;
    let mut engine = SparseLifeEngine::new(Viewport::new(SIDE, SIDE));
    let timer = Instant::now();
    engine.seed_random(density, Region::new(SIDE, SIDE), Some(SEED));
    info!(elapsed = ?timer.elapsed(), population = %NiceInt::from_usize(engine.population()), "soup seeded");

    let timer = Instant::now();
    engine.update(GENERATIONS);
    info!(elapsed = ?timer.elapsed(), "soup updated\n{}", engine.stats());

    let mut engine = SparseLifeEngine::default();
    engine.seed_rle(patterns::ACORN)?;
    let timer = Instant::now();
    engine.update(5206);
    info!(elapsed = ?timer.elapsed(), "acorn updated\n{}", engine.stats());
    Ok(())
}
