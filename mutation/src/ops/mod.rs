//! Mutation operation implementations.
//!
//! Each operation (rename, update, dig, deleteKey) is implemented
//! in its own module. Operations receive already arity-checked arguments.

mod delete;
mod dig;
mod rename;
mod update;

pub use delete::execute_delete;
pub use dig::execute_dig;
pub use rename::execute_rename;
pub use update::execute_update;
