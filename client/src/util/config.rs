//! Build-time client configuration.
//!
//! The bundle is static, so settings are baked in at compile time:
//!
//! - `LEADS_VERIFICATION_SITE_KEY`: site key of the human-verification widget.
//!   Absent or empty disables the verification step.
//! - `LEADS_REQUIRE_TERMS`: whether the contact form requires accepting the
//!   terms (default `true`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leads::ContactGating;

/// Script that renders the verification widget.
pub const VERIFICATION_SCRIPT_URL: &str = "https://js.hcaptcha.com/1/api.js";

/// Gating applied to the landing-page contact form.
pub fn contact_gating() -> ContactGating {
    ContactGating::new(
        parse_flag(option_env!("LEADS_REQUIRE_TERMS"), true),
        option_env!("LEADS_VERIFICATION_SITE_KEY"),
    )
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|value| value.trim().to_ascii_lowercase()) {
        Some(value) if matches!(value.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(value) if matches!(value.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}
