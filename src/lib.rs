pub mod shared {
    pub mod core {
        pub mod numeric_text;
    }
}

pub mod modules {
    pub mod irrf_simulator {
        pub mod core {
            pub mod irrf_result;
            pub mod ports;
            pub mod row;
            pub mod row_store;
        }
        pub mod use_cases {
            pub mod run_batch {
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_rows {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_rows {
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod row_details {
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_memo {
                pub mod handler;
                pub mod render;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod command_printer;
                pub mod http_calculator;
                pub mod in_memory_calculator;
                pub mod in_memory_printer;
            }
        }
    }
}

pub mod shell;
