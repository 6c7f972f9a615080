pub mod app;

pub mod common {
    pub mod command;
    pub mod error;
    pub mod input;
    pub mod money;
    pub mod outcome;
}

pub mod domain {
    pub mod account;
    pub mod ledger;
}

pub mod io {
    pub mod prompt;
    pub mod reader;
    pub mod style;
    pub mod writer;
}

pub mod worker {
    pub mod processor;
    pub mod handlers {
        pub mod balance;
        pub mod create;
        pub mod deposit;
        pub mod list;
        pub mod withdraw;
    }
}
