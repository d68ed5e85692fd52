//! Keyboard event handlers
//!
//! Two modes: browsing the page, and typing into the contact form. While the
//! form has focus every printable key goes to the focused field.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::contact::FormField;

use crate::tui::app::App;
use crate::tui::page::{HERO, NAV_LINKS};

/// Lines per arrow key press
const LINE_STEP: usize = 1;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        let code = key.code;
        let modifiers = key.modifiers;

        // Ctrl+C always quits
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.view.contact.is_editing() {
            self.handle_form_key(code, modifiers);
        } else {
            self.handle_browse_key(code, modifiers);
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Down | KeyCode::Char('j') => {
                self.view.scroll_down(LINE_STEP);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.view.scroll_up(LINE_STEP);
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                if modifiers.contains(KeyModifiers::SHIFT) {
                    self.view.page_up();
                } else {
                    self.view.page_down();
                }
            }
            KeyCode::PageUp => {
                self.view.page_up();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.view.scroll_to_top();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.view.scroll_to_end();
            }

            KeyCode::Char('0') | KeyCode::Char('h') => {
                self.view.jump_to(HERO);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if let Some((id, _)) = NAV_LINKS.get(idx) {
                    self.view.jump_to(id);
                }
            }

            KeyCode::Char('s') => self.view.next_skill_filter(),
            KeyCode::Char('S') => self.view.prev_skill_filter(),
            KeyCode::Char('p') => self.view.next_project_filter(),
            KeyCode::Char('P') => self.view.prev_project_filter(),

            KeyCode::Char('c') => self.begin_contact_edit(),
            KeyCode::Char('y') => self.copy_email(),
            KeyCode::Char('m') => self.open_mail_client(),
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let contact = &mut self.view.contact;
        match code {
            KeyCode::Esc => contact.stop_editing(),
            KeyCode::Tab | KeyCode::Down => contact.focus_next(),
            KeyCode::BackTab | KeyCode::Up => contact.focus_prev(),
            KeyCode::Enter => {
                if contact.focus == Some(FormField::Message) {
                    self.submit_contact();
                } else {
                    contact.focus_next();
                }
            }
            KeyCode::Backspace => contact.backspace(),
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                contact.clear_field();
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                contact.insert_char(c);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::app;
    use crate::tui::page::{ABOUT, EXPERIENCE, SKILLS};
    use crate::tui::state::FormStatus;
    use folio_core::filter::{ProjectFilter, SkillFilter};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        app.view.flush();
        assert_eq!(app.view.state().active_section_id, SKILLS);
        assert_eq!(
            app.view.scroll.offset,
            app.view.spy.registry().offset_of(SKILLS).unwrap()
        );

        press(&mut app, KeyCode::Char('1'));
        app.view.flush();
        assert_eq!(app.view.state().active_section_id, ABOUT);

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('0'));
        app.view.flush();
        assert_eq!(app.view.state().active_section_id, HERO);
        assert_eq!(app.view.scroll.offset, 0);
    }

    #[test]
    fn test_keys_past_nav_are_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.view.scroll.offset, 0);
        assert!(!app.view.spy.has_pending());
    }

    #[test]
    fn test_scroll_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.view.scroll.offset, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.view.scroll.offset, 1);
        press(&mut app, KeyCode::End);
        assert_eq!(app.view.scroll.offset, app.view.scroll.max_scroll);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.view.scroll.offset, 0);
        press(&mut app, KeyCode::PageDown);
        assert!(app.view.scroll.offset > 1);
    }

    #[test]
    fn test_threshold_boundary_through_keys() {
        let mut app = app();
        // terminal threshold is one row: row 1 is not past it, row 2 is
        press(&mut app, KeyCode::Char('j'));
        app.view.flush();
        assert!(!app.view.state().is_past_threshold);
        press(&mut app, KeyCode::Char('j'));
        app.view.flush();
        assert!(app.view.state().is_past_threshold);
    }

    #[test]
    fn test_filter_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_ne!(app.view.skill_filter, SkillFilter::All);
        press(&mut app, KeyCode::Char('S'));
        assert_eq!(app.view.skill_filter, SkillFilter::All);
        press(&mut app, KeyCode::Char('P'));
        assert_ne!(app.view.project_filter, ProjectFilter::All);
    }

    #[test]
    fn test_form_mode_captures_letters() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert!(app.view.contact.is_editing());

        type_str(&mut app, "qjs");
        assert_eq!(app.view.contact.form.name, "qjs");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "not-an-email");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.contact.focus, Some(FormField::Message));

        // empty message: validation fails, nothing is opened
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.view.contact.status, FormStatus::Error(_)));
        assert!(app.view.contact.invalid.contains(&FormField::Email));

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        press(&mut app, KeyCode::Esc);
        assert!(!app.view.contact.is_editing());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_contact_edit_scrolls_to_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        app.view.flush();
        assert_eq!(app.view.state().active_section_id, EXPERIENCE);
        press(&mut app, KeyCode::Char('c'));
        assert!(app.view.scroll.offset > app.view.spy.registry().offset_of(EXPERIENCE).unwrap());
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
