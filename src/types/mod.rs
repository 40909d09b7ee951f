pub mod candle;
pub mod indicators;
pub mod signals;
pub mod style;

pub use candle::*;
pub use indicators::*;
pub use signals::*;
pub use style::*;
