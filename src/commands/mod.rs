pub mod greet;
pub mod repeat;
