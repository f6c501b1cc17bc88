//! Statistics, profile and report output files.

use std::ffi::c_char;

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_STATS_MODE_OVERWRITE: AtStatsMode = 0;
pub const AI_STATS_MODE_APPEND: AtStatsMode = 1;

arnold_api! {
    pub struct StatsApi => stats {
        fn AiStatsGetMode() -> AtStatsMode;
        fn AiStatsGetFileName() -> *const c_char;
        fn AiStatsSetMode(mode: AtStatsMode);
        fn AiStatsSetFileName(filename: *const c_char);
        fn AiProfileSetFileName(filename: *const c_char);
        fn AiProfileGetFileName() -> AtStringReturn;
        fn AiReportSetFileName(filename: *const c_char);
        fn AiReportGetFileName() -> AtStringReturn;
    }
}
