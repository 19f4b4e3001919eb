use crate::error::{Error, Result};
use git2::{build::RepoBuilder, Cred, CredentialType, FetchOptions, RemoteCallbacks, Repository};
use std::path::Path;

/// Version-control operations the scaffold workflow depends on.
pub trait VersionControl {
    /// Clones `url` into `path`, creating the directory.
    fn clone_repository(&self, url: &str, path: &Path) -> Result<()>;

    /// Creates a new, empty repository at `path`.
    fn init_repository(&self, path: &Path) -> Result<()>;
}

/// [`VersionControl`] backed by libgit2.
#[derive(Debug, Default)]
pub struct GitClient;

impl GitClient {
    pub fn new() -> Self {
        Self
    }

    fn fetch_options<'a>() -> FetchOptions<'a> {
        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(CredentialType::SSH_KEY) {
                Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
            } else {
                Cred::default()
            }
        });

        let mut fetch_opts = FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);
        fetch_opts
    }
}

impl VersionControl for GitClient {
    fn clone_repository(&self, url: &str, path: &Path) -> Result<()> {
        log::debug!("Cloning '{url}' to '{}'", path.display());

        let mut builder = RepoBuilder::new();
        builder.fetch_options(Self::fetch_options());

        builder
            .clone(url, path)
            .map(|_| ())
            .map_err(|source| Error::CloneFailed { url: url.to_string(), source })
    }

    fn init_repository(&self, path: &Path) -> Result<()> {
        log::debug!("Initializing repository in '{}'", path.display());

        Repository::init(path).map(|_| ()).map_err(|e| {
            Error::UnknownFailure(format!(
                "Failed to initialize git repository in '{}': {}",
                path.display(),
                e.message()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn commit_file(repo: &Repository, name: &str, content: &str) {
        let workdir = repo.workdir().unwrap();
        fs::write(workdir.join(name), content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = git2::Signature::now("Template", "template@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[]).unwrap();
    }

    #[test]
    fn clones_local_repository() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("source");
        let repo = Repository::init(&source).unwrap();
        commit_file(&repo, "package.json", "{}");

        let dest = tmp.path().join("dest");
        GitClient::new().clone_repository(source.to_str().unwrap(), &dest).unwrap();

        assert!(dest.join("package.json").is_file());
        assert!(dest.join(".git").is_dir());
    }

    #[test]
    fn clone_of_missing_repository_fails() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");
        let dest = tmp.path().join("dest");

        let err =
            GitClient::new().clone_repository(missing.to_str().unwrap(), &dest).unwrap_err();

        assert!(matches!(err, Error::CloneFailed { .. }));
    }

    #[test]
    fn init_creates_empty_repository() {
        let tmp = TempDir::new().unwrap();
        GitClient::new().init_repository(tmp.path()).unwrap();

        let repo = Repository::open(tmp.path()).unwrap();
        assert!(repo.head().is_err());
        assert!(repo.is_empty().unwrap());
    }
}
