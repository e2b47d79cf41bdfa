// Domain layer: workout models and the ports the engine drives.

pub mod model;
pub mod ports;
