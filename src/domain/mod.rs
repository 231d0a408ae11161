// Domain layer: rover models and the ports the engine depends on.

pub mod model;
pub mod ports;
