pub mod request;

pub use request::{Attributes, RequestAttributes};
