//! Core value types and numeric helpers shared by the activation model and
//! the ROI engine.

pub mod fields;
pub mod numeric;
pub mod types;

pub use fields::{parse_number, FieldSource};
pub use types::{
    AbsenteeismParams, ActivationBasis, BreakEven, Channel, ChannelResult, EngineInput,
    EngineResult, ManagerTimeParams, ProductivityParams, TurnoverParams,
    MANAGER_WORKING_HOURS_PER_YEAR, MONTHS_PER_YEAR, WORKING_DAYS_PER_YEAR,
};
