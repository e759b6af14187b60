//! Contact notification hook.
//!
//! Email delivery is not wired up yet; new submissions are logged so they
//! show up in server output. Best-effort only: this must never fail the
//! request that triggered it.
//!
//! TODO: send via the shop's SMTP relay once credentials are provisioned.

use tracing::info;

use crate::models::ContactSubmission;

/// Record a new contact submission in the server log.
pub fn contact_submission_received(submission: &ContactSubmission) {
    info!(
        name = %submission.name,
        email = %submission.email,
        subject = %submission.subject,
        "New contact form submission"
    );
}
