use std::path::PathBuf;

/// What a [`VirtualEntry`] turns into once applied to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// A file with rendered contents.
    File(String),
    /// A binary file whose body is fetched from the given URL.
    Remote(String),
}

/// A single directory or file staged in memory before anything touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEntry {
    /// Path relative to the extension directory.
    pub destination: PathBuf,
    pub kind: EntryKind,
}

/// Ordered plan of everything the generator creates.
///
/// Directories come first so that files and downloads always have a parent to land in.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
    pub fn push_directory<P: Into<PathBuf>>(&mut self, destination: P) {
        self.push(destination.into(), EntryKind::Directory);
    }
    pub fn push_file<P: Into<PathBuf>>(&mut self, destination: P, content: String) {
        self.push(destination.into(), EntryKind::File(content));
    }
    pub fn push_remote<P: Into<PathBuf>>(&mut self, destination: P, url: String) {
        self.push(destination.into(), EntryKind::Remote(url));
    }
    fn push(&mut self, destination: PathBuf, kind: EntryKind) {
        self.entries.push(VirtualEntry { destination, kind });
    }
    pub fn directories(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Directory)
    }
    /// Files with rendered contents, in insertion order.
    pub fn files(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.entries.iter().filter_map(|entry| match &entry.kind {
            EntryKind::File(content) => Some((&entry.destination, content.as_str())),
            _ => None,
        })
    }
    /// Downloads as `(destination, url)` pairs.
    pub fn remotes(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.entries.iter().filter_map(|entry| match &entry.kind {
            EntryKind::Remote(url) => Some((&entry.destination, url.as_str())),
            _ => None,
        })
    }
}
