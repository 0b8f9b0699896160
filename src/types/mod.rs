//! Type definitions

pub mod load;
pub mod matching;
pub mod route;
pub mod truck;

pub use load::*;
pub use matching::*;
pub use route::*;
pub use truck::*;
