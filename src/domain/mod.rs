// Domain layer: entities, response envelopes and ports. No framework types here.

pub mod envelope;
pub mod model;
pub mod ports;
