//! Storage keys for the persisted session.
//!
//! Centralising key names prevents typos and makes it easy to find every
//! key the console persists. The three keys are written and cleared
//! together as one logical unit.

/// Key holding the opaque access token.
pub const ACCESS_TOKEN: &str = "admin_token";

/// Key holding the opaque refresh token.
pub const REFRESH_TOKEN: &str = "admin_refresh_token";

/// Key holding the JSON-serialized admin identity.
pub const IDENTITY: &str = "admin_user";
