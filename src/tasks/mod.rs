pub mod analysis;
pub mod blink;
pub mod sampler;
