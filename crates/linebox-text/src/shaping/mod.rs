pub mod shaper;

pub use shaper::TextShaper;
