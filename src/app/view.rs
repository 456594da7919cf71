use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three widgets reachable from the top-level selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Todo,
    User,
    Product,
}

impl View {
    pub const ALL: [View; 3] = [View::Todo, View::User, View::Product];

    pub fn title(self) -> &'static str {
        match self {
            View::Todo => "Todo List",
            View::User => "User Manager",
            View::Product => "Product List",
        }
    }

    pub fn next(self) -> Self {
        match self {
            View::Todo => View::User,
            View::User => View::Product,
            View::Product => View::Todo,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            View::Todo => View::Product,
            View::User => View::Todo,
            View::Product => View::User,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            View::Todo => "todo",
            View::User => "user",
            View::Product => "product",
        };
        f.write_str(s)
    }
}
