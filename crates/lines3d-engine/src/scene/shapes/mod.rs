pub(crate) mod circle;
pub(crate) mod line;

pub use circle::CircleCmd;
pub use line::{LineCmd, HAIRLINE_WIDTH};
