use crate::vfs::{EntryKind, VirtualFS};
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    kind: NodeKind,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Directory,
    File,
    Download,
}
impl TreeNode {
    fn new(name: String, kind: NodeKind) -> Self {
        Self {
            name,
            children: Vec::new(),
            kind,
        }
    }
}

/// Build the directory tree from the VFS entries, returning the root node.
fn build_tree(vfs: &VirtualFS, destination: &Path) -> Rc<RefCell<TreeNode>> {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, NodeKind::Directory)));

    // relative path -> node, the root sits at the empty path
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    for entry in &vfs.entries {
        let rel_path = &entry.destination;

        let parent_path = rel_path.parent().unwrap_or_else(|| Path::new(""));
        let Some(parent_node) = lookup.get(parent_path).map(Rc::clone) else {
            log::debug!("parent not staged for path: {}", rel_path.display());
            continue;
        };

        let child_name = rel_path
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_else(|| rel_path.display().to_string());

        let kind = match entry.kind {
            EntryKind::Directory => NodeKind::Directory,
            EntryKind::File(_) => NodeKind::File,
            EntryKind::Remote(_) => NodeKind::Download,
        };

        let child = Rc::new(RefCell::new(TreeNode::new(child_name, kind)));

        parent_node.borrow_mut().children.push(Rc::clone(&child));

        lookup.insert(rel_path.clone(), child);
    }

    root
}

/// Writes the tree with a nice ASCII style into `out`.
fn render_tree(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool, out: &mut Vec<String>) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = match node_borrow.kind {
        NodeKind::Directory => node_borrow.name.blue(),
        NodeKind::File => node_borrow.name.green(),
        NodeKind::Download => node_borrow.name.magenta(),
    };
    out.push(format!("{}{}{}", prefix.yellow(), connector, name));

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        render_tree(child, &child_prefix, i == len - 1, out);
    }
}

/// Prints what generating into `destination` would create.
pub fn preview_as_tree(vfs: &VirtualFS, destination: &Path) {
    let tree_root = build_tree(vfs, destination);

    println!(
        "Legend: {} = (directory), {} = (file), {} = (download)",
        "blue".blue(),
        "green".green(),
        "magenta".magenta()
    );

    println!("{} {}\n", "┌─".bold().bright_blue(), "Preview".bold().bright_blue());

    let mut lines = Vec::new();
    render_tree(&tree_root, "", true, &mut lines);
    for line in lines {
        println!("{}", line);
    }

    println!(
        "\n{} {}",
        "└─".bold().bright_blue(),
        "Dry run, nothing was written".bright_green()
    );
}
