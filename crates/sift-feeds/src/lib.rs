//! sift feed filtering.

mod category;
mod document;
mod entry;
mod error;
mod filter;
pub mod prelude;

#[cfg(test)]
mod tests;

use prelude::internal::*;
use prelude::*;
