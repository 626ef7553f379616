pub mod error;
pub mod mapping;
pub mod timing;
pub mod types;

pub use error::TimingError;
pub use timing::TimingRegistry;
pub use types::{
    EventInfo, EventTimingInfo, LogInfo, LogLevel, Measurements, PageViewInfo,
    PageViewTimingInfo, Properties,
};
