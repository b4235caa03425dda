/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod fpa;
mod validation;

#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use validation::validate_items;
