// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod id;
pub mod enums;

pub use enums::ProposalStatus;
pub use id::{Address, Digest, SequenceNumber, Timestamp, Version};
