pub mod application {
    pub mod cart {
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod cache;
        pub mod errors;
        pub mod model;
        pub mod service;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod health {
        pub mod model;
    }
    pub mod shared {
        pub mod context;
        pub mod value_objects;
    }
}
