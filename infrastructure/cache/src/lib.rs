pub mod connection;
pub mod cart {
    pub mod entity;
    pub mod memory;
    pub mod redis_cache;
}
