pub mod point_2;
pub mod segment_2;

pub use point_2::Point2;
pub use segment_2::Segment2;
