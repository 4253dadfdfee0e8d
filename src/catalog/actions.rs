pub mod categories;
pub mod dishes;
pub mod selection;

pub use categories::*;
pub use dishes::*;
pub use selection::*;
