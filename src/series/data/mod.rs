//! Coefficient tables, one module per body

pub mod earth;
pub mod jupiter;
pub mod mars;
pub mod mercury;
pub mod neptune;
pub mod pluto;
pub mod saturn;
pub mod uranus;
pub mod venus;
