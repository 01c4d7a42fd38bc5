mod date_fmt;
mod flow_vm;

pub use date_fmt::format_date_label;
pub use flow_vm::{FlowOutcome, QuestionFlowVm};
