pub mod orientation;
pub mod predicates;

pub use orientation::{Orientation, orient2d};
pub use predicates::{point_in_bbox, segments_intersect};
