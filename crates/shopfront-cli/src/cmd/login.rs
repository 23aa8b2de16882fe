//! `sf login` — print the sign-in form definition.
//!
//! Without credentials this prints the declarative form: method, action,
//! and the hidden fields exactly as the payload supplied them. With both
//! `--username` and `--password` it prints the submission the host would
//! post. Verification and the post itself stay with the host.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use shopfront_core::login::{FormSubmission, LoginForm};
use shopfront_core::payload::LoginPayload;

use crate::output::{self, CliError, OutputMode};

/// Arguments for `sf login`.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username or email to fill into the form
    #[arg(long)]
    pub username: Option<String>,

    /// Password to fill into the form
    #[arg(long)]
    pub password: Option<String>,
}

/// Run `sf login`.
///
/// # Errors
/// Returns an error if only one credential flag is given or stdout fails.
pub fn run_login(args: &LoginArgs, output: OutputMode, payload: &LoginPayload) -> Result<()> {
    let form = LoginForm::from_payload(payload);
    match (args.username.as_deref(), args.password.as_deref()) {
        (Some(username), Some(password)) => {
            let submission = form.submission(username, password);
            output::render_mode(
                output,
                &submission,
                render_submission_text,
                render_submission_human,
            )
        }
        (None, None) => output::render_mode(output, &form, render_form_text, render_form_human),
        _ => {
            output::render_error(
                output,
                &CliError::new("both --username and --password are required to fill the form"),
            )?;
            anyhow::bail!("missing credential flag");
        }
    }
}

fn render_form_human(form: &LoginForm, w: &mut dyn Write) -> io::Result<()> {
    output::pretty_section(w, "Sign In")?;
    output::pretty_kv(w, "Method", form.method)?;
    output::pretty_kv(w, "Action", &form.action)?;
    writeln!(w)?;
    writeln!(w, "Hidden fields (forwarded unchanged):")?;
    for field in &form.hidden {
        writeln!(w, "  {:<24} {}", field.name, field.value)?;
    }
    Ok(())
}

fn render_form_text(form: &LoginForm, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{} {}", form.method, form.action)?;
    for field in &form.hidden {
        writeln!(w, "{}\t{}", field.name, field.value)?;
    }
    Ok(())
}

fn render_submission_human(submission: &FormSubmission, w: &mut dyn Write) -> io::Result<()> {
    output::pretty_section(w, "Sign In Submission")?;
    output::pretty_kv(w, "Method", submission.method)?;
    output::pretty_kv(w, "Action", &submission.action)?;
    writeln!(w)?;
    for field in &submission.fields {
        // Pretty output is for eyes; never echo the password there.
        let shown = if field.name == "password" {
            "••••••••"
        } else {
            field.value.as_str()
        };
        writeln!(w, "  {:<24} {shown}", field.name)?;
    }
    Ok(())
}

fn render_submission_text(submission: &FormSubmission, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{} {}", submission.method, submission.action)?;
    for field in &submission.fields {
        writeln!(w, "{}\t{}", field.name, field.value)?;
    }
    Ok(())
}
