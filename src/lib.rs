mod catalog {
    pub mod actions;
    pub mod error;
    pub mod form;
    pub mod schema;
    pub mod source;
}

mod constants;

pub use catalog::*;
pub use catalog::source::*;
pub use constants::*;
