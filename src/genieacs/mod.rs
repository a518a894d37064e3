// SPDX-License-Identifier: MIT

//! GenieACS inventory interaction module
//!
//! Contains the paginated API client and the defensive device-record
//! traversal used to pull interface counters out of TR-069 documents.

mod client;
mod extract;
mod value;

pub use client::GenieAcsClient;
pub use extract::{InterfaceStat, extract_stats};
pub use value::{counter, field, get_path};
