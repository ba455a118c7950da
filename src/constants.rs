pub mod limits {

    /// Todos a free-tier account may hold at creation time.
    pub const FREE_TODOS: usize = 10;
}
