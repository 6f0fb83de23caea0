//! Token-adjacent utilities built atop the ownership core.
pub mod holder;

pub use holder::{Error as TokenHolderError, ITokenHolder, TokenHolder};
