// Domain layer: entities shared by client and server
pub mod models;
