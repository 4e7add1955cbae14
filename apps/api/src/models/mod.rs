pub mod employee;
pub mod recommendation;
pub mod role;
