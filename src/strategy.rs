pub mod gate;
pub mod panic;
