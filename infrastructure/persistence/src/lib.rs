pub mod db;
pub mod shopping_item {
    pub mod entity;
    pub mod in_memory;
    pub mod repository;
}
