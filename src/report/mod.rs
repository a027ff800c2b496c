mod errors;
mod pivot;
#[cfg(test)]
mod tests;

pub use errors::ReportError;
pub use pivot::Pivot;
