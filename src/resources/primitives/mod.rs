mod box_shape;
mod cylinder;
mod sphere;

pub use box_shape::create_box;
pub use cylinder::create_cylinder;
pub use sphere::create_sphere;
