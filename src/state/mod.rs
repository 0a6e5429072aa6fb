// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod command;
pub mod governance;
pub mod view;

pub use command::{Applied, Command, ExecutionReceipt};
pub use governance::GovernanceState;
pub use view::MultisigState;
