//! `sf ui` — interactive terminal views.
//!
//! Opens the order history browser by default; `sf ui login` opens the
//! sign-in screen instead. A submission produced by the sign-in screen is
//! printed to stdout after the terminal is restored, for the host to post.

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};

use shopfront_core::payload::HostPayload;

use crate::tui;

/// Arguments for `sf ui`.
#[derive(Args, Debug)]
pub struct UiArgs {
    /// Which screen to open
    #[arg(value_enum, default_value_t = Screen::Orders)]
    pub screen: Screen,
}

/// Interactive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    /// Order history browser
    Orders,
    /// Sign-in form
    Login,
}

/// Run `sf ui`.
///
/// # Errors
/// Returns an error if the terminal can't be set up or restored.
pub fn run_ui(args: &UiArgs, payload: HostPayload) -> Result<()> {
    match args.screen {
        Screen::Orders => tui::run_orders_tui(payload.orders),
        Screen::Login => {
            if let Some(submission) = tui::run_login_tui(&payload.login)? {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                serde_json::to_writer_pretty(&mut out, &submission)?;
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: UiArgs,
    }

    #[test]
    fn screen_defaults_to_orders() {
        let wrapper = Wrapper::parse_from(["test"]);
        assert_eq!(wrapper.args.screen, Screen::Orders);
    }

    #[test]
    fn login_screen_parses() {
        let wrapper = Wrapper::parse_from(["test", "login"]);
        assert_eq!(wrapper.args.screen, Screen::Login);
    }
}
