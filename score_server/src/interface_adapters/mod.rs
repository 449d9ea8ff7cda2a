// Interface adapters: HTTP handlers, routes, DTOs and store adapters.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
