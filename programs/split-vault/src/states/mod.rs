pub mod recipient;
pub mod vault;

pub use recipient::*;
pub use vault::*;
