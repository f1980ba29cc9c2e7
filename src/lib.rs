pub mod shared {
    pub mod infrastructure {
        pub mod key_value_store;
        pub mod notifier;
    }
}

pub mod modules {
    pub mod cart {
        pub mod core {
            pub mod cart;
            pub mod errors;
            pub mod product;
            pub mod snapshot;
        }
        pub mod use_cases {
            pub mod add_product {
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod remove_product {
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_product_amount {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_cart {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod lookups;
                pub mod lookups_in_memory;
                pub mod storefront_api_http;
            }
        }
        pub mod store;
    }
}

pub mod shell;
