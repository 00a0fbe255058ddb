pub mod sweep_request;
pub mod sweep_response;
pub mod sweep_route;
