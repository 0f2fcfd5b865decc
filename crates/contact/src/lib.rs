mod body;
mod input;
mod relay;

pub use body::*;
pub use input::*;
pub use relay::*;
