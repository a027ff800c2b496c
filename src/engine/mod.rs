mod adjuster;
mod converter;
mod errors;
mod normalizer;
mod pipeline;

pub use pipeline::Pipeline;
