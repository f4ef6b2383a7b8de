//! One-shot HTML rewrites: inline-asset extraction and reference injection.

mod atomic;
pub mod extract;
pub mod inject;
