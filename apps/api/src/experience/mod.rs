// Experience timeline: free-text role dates resolved into durations and
// per-company summaries. Computed per request since "Present" tracks the clock.

pub mod duration;
pub mod timeline;

