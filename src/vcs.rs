//! Version-control initialization for a freshly scaffolded project.
use anyhow::{Context as _, Result};
use git2::{IndexAddOption, Oid, Repository, RepositoryInitOptions, Signature};
use std::path::Path;

/// Branch that receives the initial commit.
pub const INITIAL_BRANCH: &str = "main";

/// Branch checked out after the initial commit.
pub const WORKING_BRANCH: &str = "develop";

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit: Complete AI project scaffold";

const FALLBACK_EMAIL: &str = "forge@localhost";

/// Whether `root` is already inside a repository's working tree root.
#[must_use]
pub fn is_repository(root: &Path) -> bool {
    Repository::open(root).is_ok()
}

/// Initialize a repository at `root`, commit everything on [`INITIAL_BRANCH`],
/// then create and check out [`WORKING_BRANCH`].
///
/// The committer comes from the user's git configuration, falling back to
/// `author` when none is set.
///
/// # Errors
///
/// Returns an error if any git operation fails.
pub fn init_repository(root: &Path, author: &str) -> Result<Oid> {
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head(INITIAL_BRANCH);
    let repo = Repository::init_opts(root, &opts)
        .with_context(|| format!("initializing repository in {}", root.display()))?;

    let mut index = repo.index().context("opening index")?;
    index
        .add_all(["*"], IndexAddOption::DEFAULT, None)
        .context("staging files")?;
    index.write().context("writing index")?;
    let tree_id = index.write_tree().context("writing tree")?;
    let tree = repo.find_tree(tree_id).context("loading tree")?;

    let signature = repo
        .signature()
        .or_else(|_| Signature::now(author, FALLBACK_EMAIL))
        .context("building commit signature")?;
    let commit_id = repo
        .commit(
            Some("HEAD"),
            &signature,
            &signature,
            INITIAL_COMMIT_MESSAGE,
            &tree,
            &[],
        )
        .context("creating initial commit")?;

    let commit = repo.find_commit(commit_id).context("loading commit")?;
    repo.branch(WORKING_BRANCH, &commit, false)
        .with_context(|| format!("creating branch {WORKING_BRANCH}"))?;
    repo.set_head(&format!("refs/heads/{WORKING_BRANCH}"))
        .with_context(|| format!("checking out {WORKING_BRANCH}"))?;

    Ok(commit_id)
}
