use crate::usecase::LoginUseCaseResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Clone)]
pub enum LoginEvent {
    FieldChanged { field: LoginField, raw: String },
    SubmitStarted,
    SubmitFinished(LoginUseCaseResult),
}
