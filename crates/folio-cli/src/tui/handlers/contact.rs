//! Contact actions: submit, copy email, open the mail client and links
//!
//! Clipboard and opener failures are reported with a toast and logged; they
//! never end the session.

use std::time::Instant;

use folio_core::constants::contact::{COPIED_DURATION, SEND_FAILED_MESSAGE};

use crate::tui::app::App;
use crate::tui::components::Toast;
use crate::tui::page::CONTACT;

impl App {
    /// Start editing the form and bring it into view
    pub fn begin_contact_edit(&mut self) {
        self.view.contact.begin_editing();
        self.view.jump_to(CONTACT);
    }

    pub fn submit_contact(&mut self) {
        let now = Instant::now();
        let Some(mailto) =
            self.view
                .contact
                .submit(&self.view.portfolio.owner, &self.view.portfolio.brand, now)
        else {
            return;
        };
        if let Err(e) = (self.opener)(&mailto) {
            tracing::warn!("Failed to open mail client: {}", e);
            self.view.contact.send_failed();
        }
    }

    pub fn copy_email(&mut self) {
        let email = self.view.portfolio.owner.email.clone();
        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(email));
        match result {
            Ok(()) => {
                self.view.contact.mark_copied(Instant::now());
                self.toasts
                    .push(Toast::success("Copied").with_duration(COPIED_DURATION));
            }
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {}", e);
                self.toasts.push(Toast::error("Clipboard unavailable"));
            }
        }
    }

    /// Open a blank message to the owner
    pub fn open_mail_client(&mut self) {
        let mailto = format!("mailto:{}", self.view.portfolio.owner.email);
        if let Err(e) = (self.opener)(&mailto) {
            tracing::warn!("Failed to open mail client: {}", e);
            self.toasts.push(Toast::error(SEND_FAILED_MESSAGE));
        }
    }

    /// Follow a social or project link
    pub fn open_link(&mut self, href: &str) {
        tracing::debug!(href, "Opening link");
        if let Err(e) = (self.opener)(href) {
            tracing::warn!("Failed to open {}: {}", href, e);
            self.toasts.push(Toast::error(format!("Could not open {}", href)));
        }
    }
}
