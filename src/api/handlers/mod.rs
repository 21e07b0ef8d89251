pub mod bankid;
pub mod health;
