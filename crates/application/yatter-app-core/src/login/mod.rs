pub mod events;
pub mod holder;
pub mod reducer;
pub mod state;

pub use events::{LoginEvent, LoginField};
pub use holder::LoginHolder;
pub use reducer::reduce;
pub use state::{LoginBindingModel, LoginUiState};
