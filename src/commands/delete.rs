use crate::cli::DeleteCmd;
use crate::config::Config;
use crate::delete::{self, DeleteRequest, SelectionCriteria};
use crate::error::Result;
use crate::resource::TASK_RUN;
use crate::store::KubectlStore;
use std::io;

pub fn execute(config: &Config, cmd: &DeleteCmd) -> Result<()> {
    // Validate flags before touching kubectl at all
    let criteria = SelectionCriteria::from_flags(
        &TASK_RUN,
        &cmd.selection.names,
        cmd.selection.task.as_deref(),
        cmd.selection.all,
    )?;

    let store = KubectlStore::new(TASK_RUN, &config.kubectl, config.verbose);
    store.check_installed()?;

    let request = DeleteRequest {
        criteria,
        namespace: config.namespace(cmd.namespace.as_deref()),
        force: cmd.force,
        dry_run: cmd.dry_run,
        verbose: config.verbose,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    delete::run(
        &TASK_RUN,
        &request,
        &store,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}
