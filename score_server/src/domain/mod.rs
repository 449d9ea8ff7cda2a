// Domain layer: score entities, errors and the storage port.

pub mod entities;
pub mod errors;
pub mod ports;
