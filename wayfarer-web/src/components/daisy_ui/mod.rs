pub mod atoms;
pub mod foundation;
pub mod molecules;

pub use foundation::{DaisyColor, DaisySize};

pub use atoms::*;
pub use molecules::*;
