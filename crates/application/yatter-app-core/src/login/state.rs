use yatter_core::LoginFailure;

use crate::snapshot::UiSnapshot;

/// Raw form input, echoed back exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginBindingModel {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginUiState {
    pub login_binding_model: LoginBindingModel,
    pub valid_username: bool,
    pub valid_password: bool,
    pub is_loading: bool,
    pub login_failure: Option<LoginFailure>,
}

impl LoginUiState {
    /// Display hint only; submitting with invalid fields is still allowed.
    pub fn is_enable_login(&self) -> bool {
        self.valid_username && self.valid_password && !self.is_loading
    }
}

impl UiSnapshot for LoginUiState {}
