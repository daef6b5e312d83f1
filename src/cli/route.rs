//! CLI route: single route table and run context. Fetches through the API
//! client, builds views via presentation, and renders through `output`.

use crate::api::Client;
use crate::auth;
use crate::config::TfcConfig;
use crate::error::TfcError;
use crate::jsonapi::{self, wrap_for_create, Resource};
use crate::output::{render_stream, render_table, OutputOptions, TableData};
use crate::pagination::collect_all;
use serde::Serialize;
use serde_json::json;
use std::time::Instant;
use tracing::{debug, info};

use crate::cli::command_name;
use crate::cli::parse::{
    Commands, OrganizationCommands, PageArgs, PhaseCommands, RunCommands, StateVersionCommands,
    VariableCommands, WorkspaceCommands,
};
use crate::cli::presentation::{
    apply_detail, log_read_url, organization_detail, organization_list, plan_detail,
    print_page_note, run_detail, run_list, state_version_detail, state_version_list,
    variable_detail, variable_list, workspace_detail, workspace_list, LockRequest, NewVariable,
    Phase,
};

/// Runtime context for CLI execution: API client, resolved output options, and
/// the defaults list commands fall back to.
pub struct RunContext {
    client: Client,
    options: OutputOptions,
    organization: Option<String>,
    page_size: u32,
}

impl RunContext {
    /// Create a run context from loaded configuration. `organization` is the
    /// `--org`/`TFC_ORG` value and wins over the configured default.
    pub fn new(
        config: &TfcConfig,
        options: OutputOptions,
        organization: Option<String>,
    ) -> Result<Self, TfcError> {
        let token = auth::get_token()?;
        let client = Client::new(&auth::get_address(config), &token)?;
        Ok(Self::with_client(
            client,
            options,
            organization.or_else(|| config.organization.clone()),
            config.page_size,
        ))
    }

    /// Create a run context around an existing client.
    pub fn with_client(
        client: Client,
        options: OutputOptions,
        organization: Option<String>,
        page_size: u32,
    ) -> Self {
        Self {
            client,
            options,
            organization: organization.filter(|o| !o.trim().is_empty()),
            page_size,
        }
    }

    pub fn options(&self) -> &OutputOptions {
        &self.options
    }

    /// Execute one command. Rendered output goes to stdout or the output file.
    pub fn execute(&self, command: &Commands) -> Result<(), TfcError> {
        let name = command_name(command);
        let started = Instant::now();
        info!(command = %name, "Executing command");
        let result = self.execute_inner(command);
        debug!(
            command = %name,
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<(), TfcError> {
        match command {
            Commands::Organization { command } => self.handle_organization_command(command),
            Commands::Workspace { command } => self.handle_workspace_command(command),
            Commands::Run { command } => self.handle_run_command(command),
            Commands::Plan { command } => self.handle_phase_command(Phase::Plan, command),
            Commands::Apply { command } => self.handle_phase_command(Phase::Apply, command),
            Commands::StateVersion { command } => self.handle_state_version_command(command),
            Commands::Variable { command } => self.handle_variable_command(command),
        }
    }

    fn handle_organization_command(&self, command: &OrganizationCommands) -> Result<(), TfcError> {
        match command {
            OrganizationCommands::List { page } => {
                let resources = self.list("/organizations", page)?;
                let (table, records) = organization_list(&resources)?;
                self.show(&table, &records)
            }
            OrganizationCommands::Show { name } => {
                let name = match name {
                    Some(name) => name.clone(),
                    None => self.require_org()?.to_string(),
                };
                let resource = self.get_single(&format!("/organizations/{}", name))?;
                let (table, record) = organization_detail(&resource)?;
                self.show(&table, &record)
            }
        }
    }

    fn handle_workspace_command(&self, command: &WorkspaceCommands) -> Result<(), TfcError> {
        match command {
            WorkspaceCommands::List { search, page } => {
                let org = self.require_org()?;
                let mut path = format!("/organizations/{}/workspaces", org);
                if let Some(search) = search.as_deref().filter(|s| !s.is_empty()) {
                    path = with_param(&path, "search[name]", search);
                }
                let resources = self.list(&path, page)?;
                let (table, records) = workspace_list(&resources)?;
                self.show(&table, &records)
            }
            WorkspaceCommands::Show { name } => {
                let org = self.require_org()?;
                let resource =
                    self.get_single(&format!("/organizations/{}/workspaces/{}", org, name))?;
                let (table, record) = workspace_detail(&resource)?;
                self.show(&table, &record)
            }
            WorkspaceCommands::Lock { id, reason } => {
                let body = LockRequest {
                    reason: reason.clone(),
                };
                let doc = self
                    .client
                    .post(&format!("/workspaces/{}/actions/lock", id), &body)?;
                let (table, record) = workspace_detail(&jsonapi::parse_single(&doc)?)?;
                self.show(&table, &record)
            }
            WorkspaceCommands::Unlock { id } => {
                let doc = self
                    .client
                    .post(&format!("/workspaces/{}/actions/unlock", id), &json!({}))?;
                let (table, record) = workspace_detail(&jsonapi::parse_single(&doc)?)?;
                self.show(&table, &record)
            }
        }
    }

    fn handle_run_command(&self, command: &RunCommands) -> Result<(), TfcError> {
        match command {
            RunCommands::List {
                workspace,
                status,
                page,
            } => {
                let mut path = format!("/workspaces/{}/runs", workspace);
                if let Some(status) = status.as_deref().filter(|s| !s.is_empty()) {
                    path = with_param(&path, "filter[status]", status);
                }
                let resources = self.list(&path, page)?;
                let (table, records) = run_list(&resources)?;
                self.show(&table, &records)
            }
            RunCommands::Show { id } => {
                let resource = self.get_single(&format!("/runs/{}", id))?;
                let (table, detail) = run_detail(&resource)?;
                self.show(&table, &detail)
            }
        }
    }

    fn handle_phase_command(&self, phase: Phase, command: &PhaseCommands) -> Result<(), TfcError> {
        match command {
            PhaseCommands::Show { id } => {
                let resource = self.get_single(&phase.path(id))?;
                match phase {
                    Phase::Plan => {
                        let (table, record) = plan_detail(&resource)?;
                        self.show(&table, &record)
                    }
                    Phase::Apply => {
                        let (table, record) = apply_detail(&resource)?;
                        self.show(&table, &record)
                    }
                }
            }
            PhaseCommands::Logs { id } => {
                let resource = self.get_single(&phase.path(id))?;
                let url = log_read_url(phase, &resource)?;
                let mut body = self.client.fetch_url(&url)?;
                render_stream(&mut *body, &self.options)
            }
        }
    }

    fn handle_state_version_command(&self, command: &StateVersionCommands) -> Result<(), TfcError> {
        match command {
            StateVersionCommands::List { workspace, page } => {
                let resources = self.list(&format!("/workspaces/{}/state-versions", workspace), page)?;
                let (table, records) = state_version_list(&resources)?;
                self.show(&table, &records)
            }
            StateVersionCommands::Show { id } => {
                let resource = self.get_single(&format!("/state-versions/{}", id))?;
                let (table, record) = state_version_detail(&resource)?;
                self.show(&table, &record)
            }
        }
    }

    fn handle_variable_command(&self, command: &VariableCommands) -> Result<(), TfcError> {
        match command {
            VariableCommands::List { workspace } => {
                let doc = self.client.get(&format!("/workspaces/{}/vars", workspace))?;
                let (table, records) = variable_list(&jsonapi::parse_list(&doc)?)?;
                self.show(&table, &records)
            }
            VariableCommands::Show { id } => {
                let resource = self.get_single(&format!("/vars/{}", id))?;
                let (table, record) = variable_detail(&resource)?;
                self.show(&table, &record)
            }
            VariableCommands::Create {
                workspace,
                key,
                value,
                description,
                category,
                hcl,
                sensitive,
            } => {
                let attrs = NewVariable {
                    key: key.clone(),
                    value: value.clone(),
                    description: description.clone(),
                    category: category.clone(),
                    hcl: *hcl,
                    sensitive: *sensitive,
                };
                let body = wrap_for_create("vars", &attrs)?;
                let doc = self
                    .client
                    .post(&format!("/workspaces/{}/vars", workspace), &body)?;
                let (table, record) = variable_detail(&jsonapi::parse_single(&doc)?)?;
                self.show(&table, &record)
            }
            VariableCommands::Delete { id, workspace } => {
                let path = match workspace {
                    Some(ws) => format!("/workspaces/{}/vars/{}", ws, id),
                    None => format!("/vars/{}", id),
                };
                self.client.delete(&path)?;
                let table = TableData::field_value([("ID", id.as_str()), ("Deleted", "yes")]);
                self.show(&table, &json!({ "id": id, "deleted": true }))
            }
        }
    }

    fn require_org(&self) -> Result<&str, TfcError> {
        self.organization.as_deref().ok_or_else(|| {
            TfcError::Usage(
                "organization required: use --org flag or set TFC_ORG env var".to_string(),
            )
        })
    }

    fn get_single(&self, path: &str) -> Result<Resource, TfcError> {
        let doc = self.client.get(path)?;
        jsonapi::parse_single(&doc)
    }

    /// One page with a page note on stderr, or every page with `--all`.
    fn list(&self, path: &str, page: &PageArgs) -> Result<Vec<Resource>, TfcError> {
        let size = page.page_size.unwrap_or(self.page_size);
        let base = list_path(path, size);
        if page.all {
            return collect_all(&self.client, &base);
        }
        let doc = self.client.get(&base)?;
        let resources = jsonapi::parse_list(&doc)?;
        if let Some(p) = doc.pagination() {
            print_page_note(p, self.options.no_color);
        }
        Ok(resources)
    }

    fn show<T: Serialize + ?Sized>(&self, table: &TableData, value: &T) -> Result<(), TfcError> {
        render_table(table, value, &self.options)
    }
}

/// `path` with `key=value` appended; the value is percent-encoded.
pub fn with_param(path: &str, key: &str, value: &str) -> String {
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", path, sep, key, urlencoding::encode(value))
}

/// `path` with `page[size]` appended.
pub fn list_path(path: &str, page_size: u32) -> String {
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{}{}page[size]={}", path, sep, page_size)
}
