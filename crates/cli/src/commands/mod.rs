// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod hash;
pub mod replay;
pub mod timeline;
pub mod verify;
