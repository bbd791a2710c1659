pub mod convex_hull;

pub use convex_hull::{ConvexHullError, graham_scan, hull_contains, jarvis_march};
