// SPDX-License-Identifier: MIT

mod health;
mod metrics;

pub use health::health_check;
pub use metrics::metrics_handler;
