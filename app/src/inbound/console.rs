//! Headless presentation adapter.
//!
//! Stands in for the mobile front end: notices become log events plus a line
//! on an injected writer, navigation is recorded, and the user list renders
//! one row per record.

use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::domain::ports::{Navigator, Notifier};
use crate::domain::{Notice, SessionToken, UserRecord};

/// Writes notices to a shared writer and mirrors them to tracing.
pub struct ConsoleNotifier<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleNotifier<W> {
    /// Wrap `out` for notice output.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the writer, for inspection after a run.
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn notify(&self, notice: &Notice) {
        if notice.is_error() {
            warn!(notice = %notice, "user notice");
        } else {
            info!(notice = %notice, "user notice");
        }
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(error) = writeln!(out, "{notice}") {
            warn!(error = %error, "failed to write notice");
        }
    }
}

/// Records whether the directory view has been opened.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    opened: AtomicBool,
}

impl ConsoleNavigator {
    /// Return whether a successful login navigated to the directory.
    pub fn directory_opened(&self) -> bool {
        self.opened.load(Ordering::SeqCst)
    }
}

impl Navigator for ConsoleNavigator {
    fn open_directory(&self, _session: &SessionToken) {
        info!("opening directory view");
        self.opened.store(true, Ordering::SeqCst);
    }
}

/// Render one "First Last <email>" row per record.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn render_users<'a, W, I>(out: &mut W, users: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a UserRecord>,
{
    for user in users {
        writeln!(out, "{} <{}>", user.display_name(), user.email())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for console rendering.
    use super::*;
    use crate::domain::UserRecordId;
    use crate::domain::ports::RemoteServiceError;

    #[test]
    fn notices_are_written_one_per_line() {
        let notifier = ConsoleNotifier::new(Vec::new());
        notifier.notify(&Notice::LoginSucceeded);
        notifier.notify(&Notice::for_directory_failure(
            &RemoteServiceError::remote_rejected(500_u16, ""),
        ));

        let written = String::from_utf8(notifier.into_inner()).expect("utf-8 output");
        assert_eq!(written, "Successful login\nError while loading users\n");
    }

    #[test]
    fn navigator_records_directory_opening() {
        let navigator = ConsoleNavigator::default();
        assert!(!navigator.directory_opened());
        navigator.open_directory(&SessionToken::new("token"));
        assert!(navigator.directory_opened());
    }

    #[test]
    fn users_render_as_name_and_email_rows() {
        let users = vec![
            UserRecord::new(UserRecordId::new(1), "George", "Bluth", "george.bluth@reqres.in", ""),
            UserRecord::new(UserRecordId::new(2), "Janet", "Weaver", "janet.weaver@reqres.in", ""),
        ];
        let mut out = Vec::new();
        render_users(&mut out, &users).expect("vec writes never fail");
        assert_eq!(
            String::from_utf8(out).expect("utf-8 output"),
            "George Bluth <george.bluth@reqres.in>\nJanet Weaver <janet.weaver@reqres.in>\n"
        );
    }
}
