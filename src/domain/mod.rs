// Domain layer: expression model and the input port. No external dependencies.

pub mod model;
pub mod ports;
