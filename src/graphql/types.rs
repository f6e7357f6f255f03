use crate::model::User as ModelUser;
use async_graphql::{ID, SimpleObject};

/// A directory entry as exposed over GraphQL.
#[derive(SimpleObject, Clone, Debug)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: ID(u.id),
            name: u.name,
            email: u.email,
            age: u.age,
        }
    }
}

impl From<&ModelUser> for User {
    fn from(u: &ModelUser) -> Self {
        u.clone().into()
    }
}
