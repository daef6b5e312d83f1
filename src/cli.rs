//! CLI domain: parse, route, help, output, and presentation only.
//! A single route table dispatches to the API client and the renderer.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{map_error, ErrorReport};
pub use parse::{
    Cli, Commands, OrganizationCommands, OutputArgs, PageArgs, PhaseCommands, RunCommands,
    StateVersionCommands, VariableCommands, WorkspaceCommands,
};
pub use presentation::{
    apply_detail, log_read_url, organization_detail, organization_list, page_note, plan_detail,
    run_detail, run_list, short_date, state_version_detail, state_version_list, truncate_str,
    variable_detail, variable_list, workspace_detail, workspace_list, ApplyAttributes,
    ApplyRecord, ExecutionDetails, LockRequest, NewVariable, OrganizationAttributes,
    OrganizationRecord, Phase, PlanAttributes, PlanRecord, Record, RunAttributes, RunDetail,
    RunRecord, StateVersionAttributes, StateVersionRecord, VariableAttributes, VariableRecord,
    WorkspaceAttributes, WorkspaceRecord,
};
pub use route::{list_path, with_param, RunContext};
