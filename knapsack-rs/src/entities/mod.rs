mod container;
mod instance;
mod item;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use container::Summary;

#[doc(inline)]
pub use instance::KPInstance;

#[doc(inline)]
pub use item::Item;
