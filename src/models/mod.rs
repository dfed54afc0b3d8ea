pub mod place;
pub mod point;
pub mod review;
pub mod saved_location;

pub use place::{Place, TimingDay};
pub use point::Point;
pub use review::Review;
pub use saved_location::SavedLocation;
