/// The fetch pipeline: resolve revision, print to file, verify, report.
use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::cli::output::write_fetched;
use crate::cli::OutputCtx;
use crate::depot::{
    FetchError, FetchRequest, RevisionSpec, clear_target, local_file_name, verify_produced,
};
use crate::p4::{P4Client, Revision, head_revision, print_to_file};
use crate::types::FetchOutput;

/// Outcome of a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// The local file that now holds the content.
    pub path: PathBuf,
    pub revision: Revision,
    /// Whether `revision` came from a head lookup.
    pub head: bool,
}

/// Fetch one depot file revision with an already-located client.
///
/// # Errors
///
/// Returns the first `FetchError` hit: head lookup failure, `p4 print`
/// launch failure, or a missing/unreadable output file.
pub fn fetch(
    client: &P4Client,
    request: &FetchRequest,
    ctx: &OutputCtx,
) -> Result<Fetched, FetchError> {
    let depot_file = request.depot_file();

    let (revision, head) = match request.revision() {
        RevisionSpec::Exact(revision) => (revision, false),
        RevisionSpec::Head => {
            let _t = ctx.timer("resolve_head");
            (head_revision(client, depot_file)?, true)
        }
    };

    let path = local_file_name(depot_file, revision, request.local_dir());
    tracing::debug!(%revision, head, path = %path.display(), "fetching {depot_file}");

    clear_target(&path)?;

    let output = {
        let _t = ctx.timer("print");
        print_to_file(client, depot_file, revision, &path)?
    };

    verify_produced(&path, &output.text)?;

    Ok(Fetched {
        path,
        revision,
        head,
    })
}

/// Run `p4fetch`, writing the result line to `out`.
///
/// # Errors
///
/// Returns `FetchError::ToolNotFound` if `p4` is not on `PATH`, otherwise
/// whatever [`fetch`] returns.
pub fn run<W: Write>(cli: &Cli, ctx: &OutputCtx, out: &mut W) -> Result<(), FetchError> {
    let request = FetchRequest::new(
        cli.depot_file.as_str(),
        &cli.local_dir,
        cli.user.clone(),
        cli.revision.into(),
    );

    let client = {
        let _t = ctx.timer("locate_p4");
        P4Client::discover(&cli.p4_command, request.user().map(str::to_owned))?
    };

    let fetched = fetch(&client, &request, ctx)?;

    write_fetched(
        out,
        &FetchOutput {
            ok: true,
            path: fetched.path.display().to_string(),
            depot_file: request.depot_file().to_owned(),
            revision: fetched.revision.get(),
            head: fetched.head,
        },
        ctx,
    );
    Ok(())
}
