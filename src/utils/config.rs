use std::sync::atomic::{AtomicUsize, Ordering};

struct Config {
    parallel_threshold: AtomicUsize,
}

static CONFIG: Config = Config {
    parallel_threshold: AtomicUsize::new(4096),
};

pub struct ConfigSnapshot {
    /// Populations at least this large are advanced on the rayon pool.
    pub parallel_threshold: usize,
}

pub fn get_config() -> ConfigSnapshot {
    ConfigSnapshot {
        parallel_threshold: CONFIG.parallel_threshold.load(Ordering::Relaxed),
    }
}

pub fn set_parallel_threshold(threshold: usize) {
    CONFIG
        .parallel_threshold
        .store(threshold, Ordering::Relaxed);
}
