mod candidate;
mod countdown;

pub use candidate::*;
pub use countdown::*;
