pub mod hello;
pub mod histogram;

pub use hello::{give_hint, say_hello};
pub use histogram::get_histogram;
