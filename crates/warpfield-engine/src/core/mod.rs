pub mod rng;
pub mod timestep;
pub mod viewport;
