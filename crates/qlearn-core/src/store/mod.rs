pub mod features;
pub mod linear;
pub mod snapshot;
pub mod sparse;
pub mod table;
pub mod value;

#[cfg(test)]
mod tests;
