pub mod record_service;

pub use record_service::{
    GameSource, RecordLookup, RecordRequest, RecordService, Scoreboard,
};
