//! Pure transforms over move sequences.
//!
//! Nothing here touches hardware. The mission feeds the finished search
//! log through [`compress`], sends the result, and drives out along
//! [`invert`] of it.

mod compress;
mod invert;

pub use compress::compress;
pub use invert::invert;
