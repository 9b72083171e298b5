pub mod io;
pub mod rgb;
pub mod traits;

pub use self::rgb::{PixelGrid, Rgb, LUMA_SCALE};
pub use self::traits::{ImageView, Rows};
