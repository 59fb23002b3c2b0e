//! Service test support.


pub use context::TestContext;
