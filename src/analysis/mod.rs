pub mod champion_stats;
pub mod session_summary;
