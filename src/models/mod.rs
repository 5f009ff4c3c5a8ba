pub mod card;
pub mod color;
pub mod page;
pub mod result;

pub use card::*;
pub use color::*;
pub use page::*;
pub use result::*;
