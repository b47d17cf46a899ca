mod capture;
mod core;
mod field;
mod parameter;

pub(crate) use self::capture::*;
pub use self::core::*;
pub use self::field::*;
pub use self::parameter::*;
