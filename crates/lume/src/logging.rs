/*
 *  Copyright 2025 Colliery Software
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! Tracing subscriber setup for binaries and tests embedding the library.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a global `fmt` subscriber filtered by `level`.
///
/// When `level` is `None` the filter is read from `RUST_LOG`, falling back to
/// `info`. Calling this more than once is harmless: only the first call
/// installs a subscriber, later calls return without touching it.
///
/// ```rust,ignore
/// lume::init_logging(Some("lume=debug"));
/// ```
pub fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();
}

