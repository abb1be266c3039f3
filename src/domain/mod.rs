// Domain layer: query/result models and ports. No IO here.

pub mod model;
pub mod ports;
