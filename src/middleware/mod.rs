// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (session resolution).

pub mod session;

pub use session::{require_session, CurrentUser};
