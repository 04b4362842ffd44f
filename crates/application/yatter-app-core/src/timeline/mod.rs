pub mod events;
pub mod holder;
pub mod reducer;
pub mod state;

pub use events::{FetchTrigger, TimelineEvent};
pub use holder::PublicTimelineHolder;
pub use reducer::reduce;
pub use state::{ImageBindingModel, PublicTimelineUiState, YweetBindingModel};
