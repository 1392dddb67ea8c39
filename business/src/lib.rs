pub mod application {
    pub mod shopping_item {
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shopping_item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod service;
    }
}
