use yatter_core::{Password, Username};

use super::events::{LoginEvent, LoginField};
use super::state::LoginUiState;

pub fn reduce(mut state: LoginUiState, ev: LoginEvent) -> LoginUiState {
    match ev {
        LoginEvent::FieldChanged { field, raw } => {
            match field {
                LoginField::Username => {
                    state.valid_username = Username::new(raw.as_str()).is_valid();
                    state.login_binding_model.username = raw;
                }
                LoginField::Password => {
                    state.valid_password = Password::new(raw.as_str()).is_valid();
                    state.login_binding_model.password = raw;
                }
            }
            // An edited form no longer matches the rejected attempt.
            state.login_failure = None;
        }

        LoginEvent::SubmitStarted => {
            state.is_loading = true;
            state.login_failure = None;
        }

        LoginEvent::SubmitFinished(result) => {
            state.is_loading = false;
            state.login_failure = result.err();
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use yatter_core::{LoginFailure, Session};

    fn changed(field: LoginField, raw: &str) -> LoginEvent {
        LoginEvent::FieldChanged {
            field,
            raw: raw.to_string(),
        }
    }

    #[test]
    fn field_changes_echo_last_value_and_validity() {
        let inputs = [
            (LoginField::Username, "alice"),
            (LoginField::Password, "short"),
            (LoginField::Username, ""),
            (LoginField::Password, "correct-pass"),
            (LoginField::Username, "bob smith"),
        ];

        let mut state = LoginUiState::default();
        for (field, raw) in inputs {
            state = reduce(state, changed(field, raw));
        }

        assert_eq!(state.login_binding_model.username, "bob smith");
        assert_eq!(
            state.valid_username,
            Username::new("bob smith").validate().is_ok()
        );
        assert_eq!(state.login_binding_model.password, "correct-pass");
        assert!(state.valid_password);
        assert!(!state.is_loading);
    }

    #[test]
    fn finish_always_clears_loading() {
        let state = reduce(LoginUiState::default(), LoginEvent::SubmitStarted);
        assert!(state.is_loading);

        let failed = reduce(
            state.clone(),
            LoginEvent::SubmitFinished(Err(LoginFailure::InvalidCredentials)),
        );
        assert!(!failed.is_loading);
        assert_eq!(failed.login_failure, Some(LoginFailure::InvalidCredentials));

        let ok = reduce(
            state,
            LoginEvent::SubmitFinished(Ok(Session::new(Username::new("alice"), None))),
        );
        assert!(!ok.is_loading);
        assert_eq!(ok.login_failure, None);
    }

    #[test]
    fn editing_clears_displayed_failure() {
        let state = LoginUiState {
            login_failure: Some(LoginFailure::InvalidCredentials),
            ..Default::default()
        };
        let state = reduce(state, changed(LoginField::Password, "another-pass"));
        assert_eq!(state.login_failure, None);
    }
}
