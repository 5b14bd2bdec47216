use crate::models::user::User;

/// Ordered in-memory collection of users
///
/// Insertion order is listing order. The store does no locking itself;
/// shared access goes through the `RwLock` in [`crate::core::state::AppState`].
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Store holding the three records present at process start
    pub fn with_seed() -> Self {
        Self::from_users(seed_users())
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn find_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    /// Add a user at the end
    /// The caller is responsible for id and email uniqueness
    pub fn append(&mut self, user: User) {
        self.users.push(user);
    }

    /// Remove the first user with `id`, keeping the order of the rest
    pub fn remove_by_id(&mut self, id: i64) -> Option<User> {
        let index = self.users.iter().position(|user| user.id == id)?;
        Some(self.users.remove(index))
    }

    /// Highest id present plus one, or 1 when empty.
    /// Ids freed by deleting the maximum are handed out again.
    pub fn next_id(&self) -> i64 {
        self.users
            .iter()
            .map(|user| user.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "João Silva", "joao@email.com", 25, true),
        User::new(2, "Maria Santos", "maria@email.com", 30, true),
        User::new(3, "Pedro Costa", "pedro@email.com", 28, false),
    ]
}
