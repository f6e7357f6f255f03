mod query;
mod schema;
mod serve;

pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::DirectoryConfig;
use crate::store::UserStore;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: DirectoryConfig,
    pub store: UserStore,
}

impl CommandContext {
    pub fn new(config: DirectoryConfig) -> Self {
        Self {
            config,
            store: UserStore::seed(),
        }
    }
}
