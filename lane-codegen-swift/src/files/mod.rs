//! Swift file generators.

mod actions_swift;
mod adapter_swift;
mod protocol_swift;

pub use actions_swift::ActionsSwift;
pub use adapter_swift::AdapterSwift;
pub use protocol_swift::ProtocolSwift;
