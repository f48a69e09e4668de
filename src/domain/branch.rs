/// The branch a release is being cut from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_release: bool,
}

impl BranchContext {
    /// Create a branch context, comparing `name` against the configured release branch
    pub fn new(name: impl Into<String>, release_branch: &str) -> Self {
        let name = name.into();
        let is_release = name == release_branch;

        BranchContext { name, is_release }
    }

    /// Check if releases may be cut from this branch
    pub fn is_release_branch(&self) -> bool {
        self.is_release
    }

    /// A detached HEAD reports an empty branch name
    pub fn is_detached(&self) -> bool {
        self.name.is_empty()
    }
}
