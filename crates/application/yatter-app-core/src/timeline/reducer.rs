use super::events::{FetchTrigger, TimelineEvent};
use super::state::{PublicTimelineUiState, YweetBindingModel};

/// Only the list, progress flags and failure are ever written here.
pub fn reduce(mut state: PublicTimelineUiState, ev: TimelineEvent) -> PublicTimelineUiState {
    match ev {
        TimelineEvent::FetchStarted(FetchTrigger::Resume) => state.is_loading = true,
        TimelineEvent::FetchStarted(FetchTrigger::Refresh) => state.is_refreshing = true,

        TimelineEvent::FetchFinished(Ok(yweets)) => {
            state.yweet_list = yweets.iter().map(YweetBindingModel::from).collect();
            state.fetch_failure = None;
            state.is_loading = false;
            state.is_refreshing = false;
        }

        TimelineEvent::FetchFinished(Err(failure)) => {
            // Keep showing the last good list.
            state.fetch_failure = Some(failure);
            state.is_loading = false;
            state.is_refreshing = false;
        }
    }
    state
}
