use crate::reactor::ReactorState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimerState {
    /// Seconds studied today, as reported by the server.
    pub today_seconds: u64,
    pub is_running: bool,
    pub goal: Option<String>,
    pub error: Option<String>,
}

impl ReactorState for TimerState {}

impl TimerState {
    /// `HH:MM:SS` rendering of today's total.
    pub fn today_display(&self) -> String {
        let hours = self.today_seconds / 3600;
        let minutes = (self.today_seconds % 3600) / 60;
        let seconds = self.today_seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}
