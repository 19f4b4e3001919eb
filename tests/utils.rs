#![allow(dead_code)]

use git2::{Repository, Signature};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Creates a git repository at `root/template` with one commit holding `files`.
///
/// Returns the repository path, usable as a clone URL.
pub fn create_template_repo(root: &Path, files: &[(&str, &str)]) -> PathBuf {
    let path = root.join("template");
    let repo = Repository::init(&path).unwrap();

    let mut index = repo.index().unwrap();
    for (name, content) in files {
        let file = path.join(name);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file, content).unwrap();
        index.add_path(Path::new(name)).unwrap();
    }
    index.write().unwrap();

    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = Signature::now("Template Author", "template@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "Template history", &tree, &[]).unwrap();

    path
}

/// Relative paths of all files below `dir`, skipping `.git`, sorted.
pub fn project_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    files.sort();
    files
}
