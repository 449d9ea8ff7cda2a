// Small helpers shared by adapters and the runner.

pub mod rng;
