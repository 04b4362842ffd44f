mod async_runtime;
pub mod holder;
pub mod login;
pub mod navigation;
pub mod ports;
pub mod registry;
pub mod snapshot;
pub mod startup;
pub mod timeline;
pub mod usecase;

pub use holder::{RunId, RunnerError, ScreenStateHolder, SubmissionPhase, UseCaseRunner};
pub use login::{LoginBindingModel, LoginField, LoginHolder, LoginUiState};
pub use navigation::{
    Destination, NavGraph, NavHost, NavigationError, NavigationObserver, NavigationSlot, PopUpTo,
    Route,
};
pub use ports::*;
pub use registry::{RegistryError, ScopeRegistry};
pub use snapshot::{SnapshotPublisher, SnapshotStream, UiSnapshot};
pub use startup::{MainHolder, MainUiState};
pub use timeline::{PublicTimelineHolder, PublicTimelineUiState, YweetBindingModel};
pub use usecase::*;
