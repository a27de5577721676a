//! Browser-facing helpers with native-testable cores.

pub mod assets;
pub mod carousel;
pub mod reveal;
pub mod theme;
