use std::{
    collections::HashMap,
    env, fs, io,
    path::{Path, PathBuf},
};

use panepack::{positive_size, DimensionTarget, Id, Item, PackError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::label::ItemLabel;

static PROJECT_FILENAME: &str = "panecut.toml";

/// A list of pieces to cut and the sheet size to cut them from, contained in a
/// panecut.toml file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Project {
    /// The name of the project, copied into layout files and log output.
    #[serde(default)]
    pub name: Option<String>,

    /// The size of every page, as `[width, height]`. Can be overridden from
    /// the command line, and must be given one way or the other.
    ///
    /// Read as signed numbers so that a negative size is reported as an
    /// invalid dimension instead of a parse error.
    #[serde(default)]
    pub page_size: Option<(i64, i64)>,

    /// The pieces to lay out.
    #[serde(default)]
    pub items: Vec<ItemConfig>,

    /// The path that this project came from.
    #[serde(skip)]
    pub file_path: PathBuf,
}

impl Project {
    /// Reads the project at the given path, or from the current directory if
    /// no path is given.
    pub fn discover(path: Option<&Path>) -> Result<Self, ProjectError> {
        match path {
            Some(path) => Self::read_from_folder_or_file(path),
            None => {
                let current_dir = env::current_dir().map_err(ProjectError::CurrentDir)?;
                Self::read_from_folder(current_dir)
            }
        }
    }

    pub fn read_from_folder_or_file<P: AsRef<Path>>(path: P) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let meta = fs::metadata(path).map_err(|source| ProjectError::Io {
            path: path.to_owned(),
            source,
        })?;

        if meta.is_file() {
            Self::read_from_file(path)
        } else {
            Self::read_from_folder(path)
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, ProjectError> {
        let folder_path = folder_path.as_ref();
        let file_path = &folder_path.join(PROJECT_FILENAME);

        Self::read_from_file(file_path)
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|source| ProjectError::Io {
            path: path.to_owned(),
            source,
        })?;

        let mut project: Self = toml::from_slice(&contents).map_err(|source| ProjectError::Toml {
            path: path.to_owned(),
            source,
        })?;
        project.file_path = path.to_owned();

        log::trace!(
            "Read project {:?} with {} item entries from {}",
            project.name,
            project.items.len(),
            path.display()
        );

        Ok(project)
    }

    /// The page size to pack onto. A size passed on the command line wins over
    /// the one in the file.
    pub fn page_size(&self, override_size: Option<(u32, u32)>) -> Result<(u32, u32), ProjectError> {
        if let Some(size) = override_size {
            return Ok(size);
        }

        match self.page_size {
            Some((width, height)) => positive_size(width, height, DimensionTarget::Page)
                .map_err(|source| ProjectError::InvalidPageSize {
                    path: self.file_path.clone(),
                    source,
                }),
            None => Err(ProjectError::MissingPageSize {
                path: self.file_path.clone(),
            }),
        }
    }

    /// Turns the item entries into packer items, making one item per copy.
    pub fn item_list(&self) -> Result<ItemList, ProjectError> {
        let mut list = ItemList::default();

        for (index, config) in self.items.iter().enumerate() {
            let template =
                Item::try_new(config.width, config.height).map_err(|source| {
                    ProjectError::InvalidItem {
                        path: self.file_path.clone(),
                        index: index + 1,
                        source,
                    }
                })?;

            let label = match &config.label {
                Some(label) => ItemLabel::new(label),
                None => ItemLabel::from_size(template.size()),
            };

            if config.quantity == 0 {
                log::warn!("Item {} ({}) has a quantity of zero, skipping it", index + 1, label);
                continue;
            }

            list.push(template, label.clone());
            for _ in 1..config.quantity {
                list.push(Item::new(template.size()), label.clone());
            }
        }

        Ok(list)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ItemConfig {
    /// A name to show for this piece. Defaults to its size, like `60 x 40`.
    #[serde(default)]
    pub label: Option<String>,

    pub width: i64,

    pub height: i64,

    /// How many copies of this piece are needed.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Items ready to hand to the packer, along with the label of each one.
#[derive(Debug, Default)]
pub struct ItemList {
    items: Vec<Item>,
    labels: HashMap<Id, ItemLabel>,
}

impl ItemList {
    pub fn push(&mut self, item: Item, label: ItemLabel) {
        self.labels.insert(item.id(), label);
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn label(&self, id: Id) -> Option<&ItemLabel> {
        self.labels.get(&id)
    }
}

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{source} in {}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("couldn't get the current directory of the process")]
    CurrentDir(#[source] io::Error),

    #[error("{source} in {}", .path.display())]
    InvalidPageSize { path: PathBuf, source: PackError },

    #[error("item {index} in {}: {source}", .path.display())]
    InvalidItem {
        path: PathBuf,
        index: usize,
        source: PackError,
    },

    #[error(
        "no page size in {}, add page-size to the file or pass --page-size",
        .path.display()
    )]
    MissingPageSize { path: PathBuf },
}

impl ProjectError {
    /// Tells whether this ProjectError originated because of a path not
    /// existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ProjectError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
