//! Swift AST nodes rendered through [`lanebridge_codegen::Renderable`].

mod class;
mod func;
mod protocol;

pub use class::Class;
pub use func::{Func, Param};
pub use protocol::{Extension, Property, Protocol};
