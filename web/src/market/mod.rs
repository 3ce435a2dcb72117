pub mod aggregate;
pub mod icon;
pub mod palette;
pub mod validate;
