pub struct UsersServiceConfig {
    /// bcrypt cost
    pub password_hash_cost: u32,
}
