use crate::module;

pub mod controller;
pub mod model;
pub mod name;
pub mod repository;
pub mod service;
pub mod user_entity;

pub use controller::UserController;
pub use model::User;
pub use repository::{SeaOrmUserRepository, UserRepository};
pub use service::UserService;

#[module(
    controllers = [UserController],
    providers = [SeaOrmUserRepository, UserService]
)]
pub struct UserModule;
