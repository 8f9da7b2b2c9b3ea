pub mod ops;
pub mod view;

pub use ops::{derivative_of_point, dot, point_square_error};
pub use view::LinearModelView;
