//! # dirkit Scaffold Layout Descriptor
//!
//! File: cli/src/commands/scaffold/layout.rs
//!
//! ## Overview
//!
//! A structure descriptor is a static tree of folders. Each folder holds
//! either more folders or a flat list of file names, never both. The tree is
//! built from `const` data so the shape of the built-in skeleton is checked
//! at compile time.
//!
//! ```rust
//! const LAYOUT: &[Folder] = &[Folder::nested(
//!     "src",
//!     &[Folder::files("utils", &["helpers.ts"])],
//! )];
//! ```
//!

/// A single folder in a structure descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Folder {
    /// Folder name, created directly under its parent.
    pub name: &'static str,
    /// What the folder contains.
    pub contents: Contents,
}

/// Contents of a descriptor folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contents {
    /// Nested folders, each materialized recursively.
    Folders(&'static [Folder]),
    /// Empty files created directly inside the folder, in order.
    Files(&'static [&'static str]),
}

impl Folder {
    /// A folder containing other folders.
    pub const fn nested(name: &'static str, children: &'static [Folder]) -> Self {
        Self {
            name,
            contents: Contents::Folders(children),
        }
    }

    /// A folder containing empty files.
    pub const fn files(name: &'static str, files: &'static [&'static str]) -> Self {
        Self {
            name,
            contents: Contents::Files(files),
        }
    }
}

/// Folder and file totals for a descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    pub folders: usize,
    pub files: usize,
}

/// Counts every folder and file a descriptor would create.
pub fn stats(layout: &[Folder]) -> LayoutStats {
    layout.iter().fold(LayoutStats::default(), |acc, folder| {
        let inner = match folder.contents {
            Contents::Folders(children) => stats(children),
            Contents::Files(files) => LayoutStats {
                folders: 0,
                files: files.len(),
            },
        };
        LayoutStats {
            folders: acc.folders + 1 + inner.folders,
            files: acc.files + inner.files,
        }
    })
}

/// The front-end project skeleton materialized by `dirkit scaffold`.
pub const PROJECT_LAYOUT: &[Folder] = &[Folder::nested(
    "src",
    &[
        Folder::files(
            "components",
            &["Header.tsx", "SearchBar.tsx", "NoteCard.tsx", "FolderCard.tsx"],
        ),
        Folder::files(
            "screens",
            &[
                "NotesListScreen.tsx",
                "FolderExplorerScreen.tsx",
                "NoteEditorScreen.tsx",
            ],
        ),
        Folder::files("context", &["AppContext.tsx"]),
        Folder::files("services", &["StorageService.ts", "SyncService.ts"]),
        Folder::files("theme", &["colors.ts"]),
        Folder::files("utils", &["helpers.ts"]),
    ],
)];
