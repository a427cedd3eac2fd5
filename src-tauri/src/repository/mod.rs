//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod supabase;
mod state;


pub use traits::Repository;
pub use supabase::SupabaseRepository;
pub use state::BackendState;
