/// Public API for the Perforce command-line client layer.
pub mod client;
pub mod errors;
pub mod files;
pub mod locate;
pub mod print;
pub mod revision;

pub use client::P4Client;
pub use errors::P4Error;
pub use files::head_revision;
pub use print::print_to_file;
pub use revision::Revision;
