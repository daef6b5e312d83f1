//! CLI presentation: pure view builders per resource family. Each returns the
//! table used by table/plaintext modes and the value used by JSON/template modes.

mod organization;
mod phase;
mod run;
mod shared;
mod state_version;
mod variable;
mod workspace;

pub use organization::{
    organization_detail, organization_list, OrganizationAttributes, OrganizationRecord,
};
pub use phase::{
    apply_detail, log_read_url, plan_detail, ApplyAttributes, ApplyRecord, ExecutionDetails,
    Phase, PlanAttributes, PlanRecord,
};
pub use run::{run_detail, run_list, RunAttributes, RunDetail, RunRecord};
pub use shared::{page_note, print_page_note, short_date, truncate_str, Record};
pub use state_version::{
    state_version_detail, state_version_list, StateVersionAttributes, StateVersionRecord,
};
pub use variable::{variable_detail, variable_list, NewVariable, VariableAttributes, VariableRecord};
pub use workspace::{workspace_detail, workspace_list, LockRequest, WorkspaceAttributes, WorkspaceRecord};
