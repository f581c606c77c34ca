pub mod entities;
pub mod enums;
pub mod store;
