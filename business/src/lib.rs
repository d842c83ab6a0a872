pub mod application {
    pub mod cart {
        pub mod add_to_cart;
        pub mod decrement;
        pub mod increment;
        pub mod load;
        pub mod remove;
        pub mod state;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod snapshot;
        pub mod summary;
        pub mod use_cases {
            pub mod add_to_cart;
            pub mod decrement;
            pub mod increment;
            pub mod load;
            pub mod remove;
        }
    }
}
