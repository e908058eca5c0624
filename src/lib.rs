pub use gender_core::*;
