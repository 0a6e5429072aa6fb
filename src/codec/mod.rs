// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod abi;
pub mod proposal;

pub use proposal::{canonicalize, CanonicalProposal, ProposalPayload};
