use crate::repos::user_repo::UserRow;

/// Identity the gate resolved for this request. Lives in the request
/// extensions and is dropped with the request; nothing is shared across
/// requests.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user: UserRow,
}
