//! CLI output: status banners and error mapping from domain errors to the CLI surface.

use crate::error::ApiError;
use owo_colors::{OwoColorize, Stream};

pub const OK_BANNER: &str = "OK";
pub const FAILED_BANNER: &str = "FAILED";

/// `OK`, green when stdout supports colour.
pub fn ok_banner() -> String {
    OK_BANNER
        .if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}

/// Map domain/service errors to CLI output: the failure banner, then the message.
pub fn map_error(e: &ApiError) -> String {
    format!(
        "{}\n{}",
        FAILED_BANNER.if_supports_color(Stream::Stdout, |t| t.red()),
        e
    )
}
