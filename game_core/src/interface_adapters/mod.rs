// Interface adapters: score service client, wire DTOs and the headless host.

pub mod clients;
pub mod pilot;
pub mod protocol;
pub mod render;
pub mod utils;
