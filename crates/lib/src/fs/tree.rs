//! The directory tree arena.

/// Index of a directory in a [`Fs`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A file listed directly inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

#[derive(Debug)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    /// Children in first-seen order, names unique.
    children: Vec<NodeId>,
    /// Files named by the most recent listing, names unique.
    files: Vec<FileEntry>,
}

/// Directory tree stored as a flat arena.
///
/// Parent and child links are indices into the arena, which sidesteps the
/// ownership cycle a parent back-pointer would otherwise create. The root is
/// created up front and never has a parent.
#[derive(Debug)]
pub struct Fs {
    nodes: Vec<Node>,
}

impl Fs {
    /// Construct a tree holding only the root directory `/`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: String::from("/"),
                parent: None,
                children: Vec::new(),
                files: Vec::new(),
            }],
        }
    }

    /// The root directory.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Name of the given directory.
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Parent of the given directory, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children of the given directory in first-seen order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id.0].children.iter().copied()
    }

    /// Files listed directly in the given directory.
    pub fn files(&self, id: NodeId) -> &[FileEntry] {
        &self.nodes[id.0].files
    }

    /// Look up a child by name.
    pub fn child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children(id).find(|&c| self.name(c) == name)
    }

    /// Look up a child by name, creating an empty one if it does not exist.
    ///
    /// This single operation backs both `cd <name>` and `ls` reporting a
    /// subdirectory, so a directory entered before any listing mentions it
    /// still exists, and repeated listings never duplicate a child.
    pub fn ensure_child(&mut self, id: NodeId, name: &str) -> NodeId {
        if let Some(child) = self.child(id, name) {
            return child;
        }

        let child = NodeId(self.nodes.len());

        self.nodes.push(Node {
            name: name.to_owned(),
            parent: Some(id),
            children: Vec::new(),
            files: Vec::new(),
        });

        self.nodes[id.0].children.push(child);
        child
    }

    /// Replace the full set of files listed directly in `id`.
    pub fn set_files(&mut self, id: NodeId, files: Vec<FileEntry>) {
        self.nodes[id.0].files = files;
    }

    /// Total size of the subtree rooted at `id`.
    ///
    /// Recomputed on every call, listings may arrive after a directory is
    /// first referenced so a cached size would go stale.
    pub fn size(&self, id: NodeId) -> u64 {
        let node = &self.nodes[id.0];
        let direct: u64 = node.files.iter().map(|f| f.size).sum();
        direct + node.children.iter().map(|&c| self.size(c)).sum::<u64>()
    }

    /// Absolute path of the given directory.
    pub fn path(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut cursor = Some(id);

        while let Some(id) = cursor {
            if self.parent(id).is_some() {
                names.push(self.name(id));
            }

            cursor = self.parent(id);
        }

        if names.is_empty() {
            return String::from("/");
        }

        let mut path = String::new();

        for name in names.iter().rev() {
            path.push('/');
            path.push_str(name);
        }

        path
    }

    /// Pre-order traversal over every directory, each one before its
    /// children, children in first-seen order.
    ///
    /// The iterator borrows the tree immutably, so any number of walks can
    /// run over the same built tree and all see the same order.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            fs: self,
            stack: vec![self.root()],
        }
    }
}

impl Default for Fs {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator over the directories of a [`Fs`].
pub struct Walk<'a> {
    fs: &'a Fs,
    stack: Vec<NodeId>,
}

impl Iterator for Walk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = &self.fs.nodes[id.0];
        self.stack.extend(node.children.iter().rev().copied());
        Some(id)
    }
}
