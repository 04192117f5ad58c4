/// File and resource table command.
pub mod info;
/// Raw descriptor blob command.
pub mod raw;
/// Descriptor resource decode command.
pub mod show;

mod decode_args;
mod print;
mod util;
