//! Sample resources. Each module pairs a handler with the metadata declared on it.

pub mod child;
pub mod root;
pub mod widget;

pub use child::Child;
pub use root::Root;
pub use widget::Widget;
