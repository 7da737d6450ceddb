// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod model;
pub mod state;

pub use model::*;
pub use state::*;

/// Directory name used for platform config paths.
pub const APP_NAME: &str = "cycle";
