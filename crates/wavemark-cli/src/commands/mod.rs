pub mod capacity;
pub mod embed;
pub mod extract;
mod options;

pub use options::WatermarkArgs;
