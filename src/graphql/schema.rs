use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptyMutation, EmptySubscription, ID, Object, Schema};

use crate::config::ServerSettings;
use crate::store::UserStore;

use super::types::*;

pub type DirectorySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema over `store`. Introspection follows `settings`.
pub fn build_schema(store: UserStore, settings: &ServerSettings) -> DirectorySchema {
    let builder = Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .extension(Tracing);

    if settings.introspection {
        builder.finish()
    } else {
        builder.disable_introspection().finish()
    }
}

fn get_store<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a UserStore> {
    ctx.data::<UserStore>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Get a single user by ID, or null if no user has that ID
    async fn get_user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<User>> {
        let store = get_store(ctx)?;
        let user = store.find(id.as_str()).map(User::from);
        tracing::debug!(id = %id.as_str(), found = user.is_some(), "getUser");
        Ok(user)
    }

    /// List users in directory order, keeping only the first `limit` when it is positive
    async fn list_users(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
    ) -> async_graphql::Result<Vec<User>> {
        let store = get_store(ctx)?;
        let users: Vec<User> = store.head(limit).iter().map(User::from).collect();
        tracing::debug!(?limit, count = users.len(), "listUsers");
        Ok(users)
    }
}
