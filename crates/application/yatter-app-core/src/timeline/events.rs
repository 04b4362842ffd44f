use crate::usecase::TimelineUseCaseResult;

/// What asked for the fetch; decides which progress flag is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    Resume,
    Refresh,
}

#[derive(Debug, Clone)]
pub enum TimelineEvent {
    FetchStarted(FetchTrigger),
    FetchFinished(TimelineUseCaseResult),
}
