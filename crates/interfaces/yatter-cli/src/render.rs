//! Plain-text views of the screen snapshots.

use std::fmt::Write;
use yatter_app_core::{LoginUiState, PublicTimelineUiState};

pub fn render_login(state: &LoginUiState) -> String {
    let mut out = String::from(":: Login\n");
    let form = &state.login_binding_model;
    let mark = |ok: bool| if ok { "ok" } else { "invalid" };
    let _ = writeln!(out, "   Username: {} ({})", form.username, mark(state.valid_username));
    let _ = writeln!(
        out,
        "   Password: {} ({})",
        "*".repeat(form.password.chars().count()),
        mark(state.valid_password)
    );
    if state.is_loading {
        out.push_str("   Logging in...\n");
    } else {
        let hint = if state.is_enable_login() { "ready" } else { "check username and password" };
        let _ = writeln!(out, "   Log in: {hint}");
    }
    if let Some(failure) = state.login_failure {
        let _ = writeln!(out, "   ! {failure}");
    }
    out
}

pub fn render_timeline(state: &PublicTimelineUiState) -> String {
    let mut out = String::from(":: Public timeline\n");
    if let Some(failure) = state.fetch_failure {
        let _ = writeln!(out, "   ! {failure}");
    }
    if state.yweet_list.is_empty() {
        if !state.is_fetching() {
            out.push_str("   (no yweets yet)\n");
        }
        return out;
    }
    for yweet in &state.yweet_list {
        let _ = writeln!(out, "\n   {} @{}", yweet.display_name, yweet.username);
        for line in yweet.content.lines() {
            let _ = writeln!(out, "     {line}");
        }
        match yweet.attachment_image_list.len() {
            0 => {}
            1 => out.push_str("     [1 image]\n"),
            n => {
                let _ = writeln!(out, "     [{n} images]");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use yatter_app_core::{LoginBindingModel, YweetBindingModel};
    use yatter_core::{LoginFailure, TimelineFailure};

    #[test]
    fn password_is_masked() {
        let state = LoginUiState {
            login_binding_model: LoginBindingModel {
                username: "alice".into(),
                password: "secret12".into(),
            },
            valid_username: true,
            valid_password: true,
            is_loading: false,
            login_failure: Some(LoginFailure::InvalidCredentials),
        };
        let text = render_login(&state);
        assert!(text.contains("alice (ok)"));
        assert!(text.contains("******** (ok)"));
        assert!(!text.contains("secret12"));
        assert!(text.contains("username or password is incorrect"));
        assert!(text.contains("Log in: ready"));
    }

    #[test]
    fn invalid_form_hints_login_is_not_ready() {
        let state = LoginUiState {
            login_binding_model: LoginBindingModel {
                username: "alice".into(),
                password: "short".into(),
            },
            valid_username: true,
            valid_password: false,
            ..Default::default()
        };
        let text = render_login(&state);
        assert!(text.contains("***** (invalid)"));
        assert!(text.contains("Log in: check username and password"));
        assert!(!text.contains("Logging in"));
    }

    #[test]
    fn timeline_keeps_rows_next_to_failure() {
        let state = PublicTimelineUiState {
            yweet_list: vec![YweetBindingModel {
                id: "1".into(),
                display_name: "Alice".into(),
                username: "alice".into(),
                avatar: None,
                content: "hello\nworld".into(),
                attachment_image_list: vec![],
            }],
            fetch_failure: Some(TimelineFailure::Network),
            ..Default::default()
        };
        let text = render_timeline(&state);
        assert!(text.contains("could not reach the server"));
        assert!(text.contains("Alice @alice"));
        assert!(text.contains("     world"));
    }

    #[test]
    fn empty_timeline_says_so() {
        assert!(render_timeline(&PublicTimelineUiState::default()).contains("no yweets"));
    }
}
